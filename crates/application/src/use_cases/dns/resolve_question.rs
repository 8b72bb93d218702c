use crate::ports::ZoneStore;
use authdns_domain::{DnsQuestion, DomainName, QueryType, Record};
use std::sync::Arc;
use tracing::debug;

/// Outcome of resolving one question against the zone store.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The queried name, returned whether or not anything matched.
    pub name: DomainName,
    /// `None` when the type is unsupported or nothing matched.
    pub query_type: Option<QueryType>,
    pub records: Arc<[Record]>,
}

impl Resolution {
    pub fn empty(name: DomainName) -> Self {
        Self {
            name,
            query_type: None,
            records: Arc::from(Vec::new()),
        }
    }

    pub fn answer_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_answers(&self) -> bool {
        !self.records.is_empty()
    }
}

pub struct ResolveQuestionUseCase {
    zones: Arc<dyn ZoneStore>,
}

impl ResolveQuestionUseCase {
    pub fn new(zones: Arc<dyn ZoneStore>) -> Self {
        Self { zones }
    }

    /// Looks up the zone whose origin is exactly the queried name and returns
    /// its records of the queried type.
    pub fn execute(&self, question: &DnsQuestion) -> Resolution {
        let Some(query_type) = question.query_type() else {
            debug!(domain = %question.name, qtype = question.qtype, "Unsupported query type");
            return Resolution::empty(question.name.clone());
        };

        let zone_key = question.name.zone_key();
        let Some(zone) = self.zones.lookup(&zone_key) else {
            debug!(domain = %zone_key, "No zone matches query");
            return Resolution::empty(question.name.clone());
        };

        match zone.records(query_type) {
            Some(records) if !records.is_empty() => {
                debug!(
                    domain = %zone_key,
                    record_type = %query_type,
                    answers = records.len(),
                    "Zone answered query"
                );
                Resolution {
                    name: question.name.clone(),
                    query_type: Some(query_type),
                    records: Arc::clone(records),
                }
            }
            _ => {
                debug!(domain = %zone_key, record_type = %query_type, "Zone has no records for type");
                Resolution::empty(question.name.clone())
            }
        }
    }
}
