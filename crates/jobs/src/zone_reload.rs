use authdns_application::use_cases::ReloadZonesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_RELOAD_INTERVAL_SECS: u64 = 300;

/// Background job that periodically re-reads all zones.
///
/// The first tick is consumed immediately because zones are already loaded
/// during startup.
pub struct ZoneReloadJob {
    reload: Arc<ReloadZonesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ZoneReloadJob {
    pub fn new(reload: Arc<ReloadZonesUseCase>) -> Self {
        Self {
            reload,
            interval_secs: DEFAULT_RELOAD_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting zone reload job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ZoneReloadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reload.execute().await {
                            Ok(zones) => info!(zones, "ZoneReloadJob: reload completed"),
                            Err(e) => error!(error = %e, "ZoneReloadJob: reload failed"),
                        }
                    }
                }
            }
        });
    }
}
