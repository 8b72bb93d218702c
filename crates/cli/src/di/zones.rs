use authdns_application::ports::ZoneStore;
use authdns_application::use_cases::ReloadZonesUseCase;
use authdns_domain::Config;
use authdns_infrastructure::zones::{ArcSwapZoneStore, FileZoneProvider};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ZoneServices {
    pub store: Arc<ArcSwapZoneStore>,
    pub reload: Arc<ReloadZonesUseCase>,
}

impl ZoneServices {
    /// Builds the zone store and performs the initial load.
    ///
    /// An unreadable zone directory is not fatal: the server starts with no
    /// zones and later reloads can still pick the directory up.
    pub async fn new(config: &Config) -> Self {
        let provider = Arc::new(
            FileZoneProvider::new(&config.zones.directory)
                .with_extension(config.zones.zone_extension.as_str()),
        );
        let store = Arc::new(ArcSwapZoneStore::new());
        let directory = provider.directory().display().to_string();
        let reload = Arc::new(ReloadZonesUseCase::new(provider, store.clone()));

        match reload.execute().await {
            Ok(_) => info!(
                directory = %directory,
                zones = store.zone_count(),
                origins = ?store.origins(),
                "Zones loaded"
            ),
            Err(e) => warn!(
                directory = %directory,
                error = %e,
                "Initial zone load failed, starting with no zones"
            ),
        }

        Self { store, reload }
    }
}
