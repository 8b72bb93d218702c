use super::QueryType;
use std::net::Ipv4Addr;

/// A typed resource record held by a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Address { ttl: u32, address: Ipv4Addr },
}

impl Record {
    pub fn address(ttl: u32, address: Ipv4Addr) -> Self {
        Record::Address { ttl, address }
    }

    pub fn query_type(&self) -> QueryType {
        match self {
            Record::Address { .. } => QueryType::A,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            Record::Address { ttl, .. } => *ttl,
        }
    }
}
