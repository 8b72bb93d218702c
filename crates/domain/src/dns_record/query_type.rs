use std::fmt;

/// Record types this server answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
}

impl QueryType {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(QueryType::A),
            _ => None,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryType::A => 1,
        }
    }

    /// Key used for this type in zone files.
    pub fn tag(&self) -> &'static str {
        match self {
            QueryType::A => "a",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(QueryType::A),
            _ => None,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::A => write!(f, "A"),
        }
    }
}
