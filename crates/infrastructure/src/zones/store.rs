use arc_swap::ArcSwap;
use authdns_application::ports::ZoneStore;
use authdns_domain::Zone;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::warn;

type ZoneMap = FxHashMap<String, Arc<Zone>>;

/// Zone store whose map is replaced wholesale, never edited in place.
///
/// Readers load the current map without locking; a reload builds a new map
/// and swaps it in, so a lookup sees either the old or the new zone set.
pub struct ArcSwapZoneStore {
    zones: ArcSwap<ZoneMap>,
}

impl ArcSwapZoneStore {
    pub fn new() -> Self {
        Self {
            zones: ArcSwap::from_pointee(ZoneMap::default()),
        }
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let store = Self::new();
        store.replace(zones);
        store
    }

    pub fn origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self.zones.load().keys().cloned().collect();
        origins.sort();
        origins
    }
}

impl Default for ArcSwapZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneStore for ArcSwapZoneStore {
    fn lookup(&self, zone_name: &str) -> Option<Arc<Zone>> {
        self.zones.load().get(zone_name).cloned()
    }

    /// Later zones win over earlier ones with the same origin.
    fn replace(&self, zones: Vec<Zone>) -> usize {
        let mut map = ZoneMap::with_capacity_and_hasher(zones.len(), Default::default());
        for zone in zones {
            let origin = zone.origin().to_string();
            if map.insert(origin.clone(), Arc::new(zone)).is_some() {
                warn!(origin = %origin, "Duplicate zone origin, later definition wins");
            }
        }
        let count = map.len();
        self.zones.store(Arc::new(map));
        count
    }

    fn zone_count(&self) -> usize {
        self.zones.load().len()
    }
}
