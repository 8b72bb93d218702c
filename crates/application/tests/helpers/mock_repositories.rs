#![allow(dead_code)]

use async_trait::async_trait;
use authdns_application::ports::{ZoneProvider, ZoneStore};
use authdns_domain::{DomainError, QueryType, Record, Zone};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Default)]
pub struct MockZoneStore {
    zones: RwLock<HashMap<String, Arc<Zone>>>,
    replace_calls: AtomicUsize,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let store = Self::new();
        store.replace(zones);
        store.replace_calls.store(0, Ordering::SeqCst);
        store
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

impl ZoneStore for MockZoneStore {
    fn lookup(&self, zone_name: &str) -> Option<Arc<Zone>> {
        self.zones.read().unwrap().get(zone_name).cloned()
    }

    fn replace(&self, zones: Vec<Zone>) -> usize {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        let map: HashMap<String, Arc<Zone>> = zones
            .into_iter()
            .map(|z| (z.origin().to_string(), Arc::new(z)))
            .collect();
        let count = map.len();
        *self.zones.write().unwrap() = map;
        count
    }

    fn zone_count(&self) -> usize {
        self.zones.read().unwrap().len()
    }
}

pub struct MockZoneProvider {
    zones: RwLock<Vec<Zone>>,
    should_fail: RwLock<bool>,
    load_calls: AtomicUsize,
}

impl MockZoneProvider {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones: RwLock::new(zones),
            should_fail: RwLock::new(false),
            load_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_zones(&self, zones: Vec<Zone>) {
        *self.zones.write().unwrap() = zones;
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    async fn load_zones(&self) -> Result<Vec<Zone>, DomainError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::ZoneSource("mock source unavailable".to_string()));
        }
        Ok(self.zones.read().unwrap().clone())
    }
}

pub fn a_zone(origin: &str, records: &[(u32, &str)]) -> Zone {
    let records = records
        .iter()
        .map(|(ttl, ip)| Record::address(*ttl, ip.parse::<Ipv4Addr>().unwrap()))
        .collect();
    Zone::new(origin).with_records(QueryType::A, records)
}
