use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to load zone from {source_name}: {reason}")]
    ZoneLoad { source_name: String, reason: String },

    #[error("Zone source unavailable: {0}")]
    ZoneSource(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl DomainError {
    pub fn zone_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::ZoneLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        DomainError::MalformedMessage(reason.into())
    }
}
