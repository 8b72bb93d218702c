use crate::dns_record::{QueryType, Record};
use std::collections::HashMap;
use std::sync::Arc;

/// Authoritative records for one fully-qualified origin.
///
/// Zones are immutable once built; record sequences are shared with
/// resolutions through `Arc` instead of being copied per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    origin: Arc<str>,
    records: HashMap<QueryType, Arc<[Record]>>,
}

impl Zone {
    pub fn new(origin: impl Into<Arc<str>>) -> Self {
        Self {
            origin: origin.into(),
            records: HashMap::new(),
        }
    }

    /// Sets the ordered record sequence for `query_type`.
    pub fn with_records(mut self, query_type: QueryType, records: Vec<Record>) -> Self {
        self.records.insert(query_type, records.into());
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn records(&self, query_type: QueryType) -> Option<&Arc<[Record]>> {
        self.records.get(&query_type)
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(|r| r.len()).sum()
    }
}
