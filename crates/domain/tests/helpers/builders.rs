#![allow(dead_code)]
use authdns_domain::{QueryType, Record, Zone};
use std::net::Ipv4Addr;

pub struct ZoneBuilder {
    origin: String,
    a_records: Vec<Record>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            origin: "example.com".to_string(),
            a_records: vec![],
        }
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    pub fn a(mut self, ttl: u32, address: &str) -> Self {
        let address: Ipv4Addr = address.parse().unwrap();
        self.a_records.push(Record::address(ttl, address));
        self
    }

    pub fn build(self) -> Zone {
        Zone::new(self.origin.as_str()).with_records(QueryType::A, self.a_records)
    }
}

impl Default for ZoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
