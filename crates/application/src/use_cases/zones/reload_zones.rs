use crate::ports::{ZoneProvider, ZoneStore};
use authdns_domain::DomainError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

/// Reads all zones from the provider and swaps them into the store.
///
/// On provider failure the store keeps serving the previous zone set.
pub struct ReloadZonesUseCase {
    provider: Arc<dyn ZoneProvider>,
    store: Arc<dyn ZoneStore>,
}

impl ReloadZonesUseCase {
    pub fn new(provider: Arc<dyn ZoneProvider>, store: Arc<dyn ZoneStore>) -> Self {
        Self { provider, store }
    }

    /// Returns the number of zones held after the swap.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let start = Instant::now();

        let zones = self.provider.load_zones().await.map_err(|e| {
            error!(error = %e, "Zone reload failed, keeping previous zones");
            e
        })?;

        let records: usize = zones.iter().map(|z| z.record_count()).sum();
        let count = self.store.replace(zones);

        debug!(
            zones = count,
            records,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Zones loaded"
        );

        Ok(count)
    }
}
