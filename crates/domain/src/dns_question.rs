use crate::dns_name::DomainName;
use crate::dns_record::QueryType;

/// The single question carried by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: DomainName,
    /// Query type code exactly as received.
    pub qtype: u16,
}

impl DnsQuestion {
    pub fn new(name: DomainName, qtype: u16) -> Self {
        Self { name, qtype }
    }

    pub fn query_type(&self) -> Option<QueryType> {
        QueryType::from_code(self.qtype)
    }
}
