use async_trait::async_trait;
use authdns_domain::{DomainError, Zone};

#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Reads every zone from the backing source.
    ///
    /// Zones that fail to load individually are skipped by the provider;
    /// an `Err` means the source as a whole could not be read.
    async fn load_zones(&self) -> Result<Vec<Zone>, DomainError>;
}
