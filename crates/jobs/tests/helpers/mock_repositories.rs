#![allow(dead_code)]

use async_trait::async_trait;
use authdns_application::ports::{ZoneProvider, ZoneStore};
use authdns_application::use_cases::ReloadZonesUseCase;
use authdns_domain::{DomainError, Zone};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct CountingZoneProvider {
    calls: AtomicUsize,
}

impl CountingZoneProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneProvider for CountingZoneProvider {
    async fn load_zones(&self) -> Result<Vec<Zone>, DomainError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Zone::new(format!("reload{n}.example").as_str())])
    }
}

#[derive(Default)]
pub struct SimpleZoneStore {
    zones: Mutex<HashMap<String, Arc<Zone>>>,
}

impl ZoneStore for SimpleZoneStore {
    fn lookup(&self, zone_name: &str) -> Option<Arc<Zone>> {
        self.zones.lock().unwrap().get(zone_name).cloned()
    }

    fn replace(&self, zones: Vec<Zone>) -> usize {
        let mut map = self.zones.lock().unwrap();
        *map = zones
            .into_iter()
            .map(|z| (z.origin().to_string(), Arc::new(z)))
            .collect();
        map.len()
    }

    fn zone_count(&self) -> usize {
        self.zones.lock().unwrap().len()
    }
}

pub fn reload_use_case(
    provider: Arc<CountingZoneProvider>,
    store: Arc<SimpleZoneStore>,
) -> Arc<ReloadZonesUseCase> {
    Arc::new(ReloadZonesUseCase::new(provider, store))
}
