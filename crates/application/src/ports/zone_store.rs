use authdns_domain::Zone;
use std::sync::Arc;

/// Read-mostly index of loaded zones keyed by origin.
pub trait ZoneStore: Send + Sync {
    /// Returns the zone whose origin equals `zone_name` exactly.
    fn lookup(&self, zone_name: &str) -> Option<Arc<Zone>>;

    /// Replaces the whole zone set at once. Returns the number of zones now
    /// held, which can be lower than `zones.len()` when origins repeat.
    fn replace(&self, zones: Vec<Zone>) -> usize;

    fn zone_count(&self) -> usize;
}
