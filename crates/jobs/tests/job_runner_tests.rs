use authdns_jobs::{JobRunner, ZoneReloadJob};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{reload_use_case, CountingZoneProvider, SimpleZoneStore};

#[tokio::test]
async fn test_job_runner_with_no_jobs() {
    JobRunner::new().start().await;
}

#[tokio::test]
async fn test_job_runner_starts_zone_reload() {
    let provider = Arc::new(CountingZoneProvider::new());
    let store = Arc::new(SimpleZoneStore::default());
    let job = ZoneReloadJob::new(reload_use_case(provider.clone(), store)).with_interval(1);

    JobRunner::new().with_zone_reload(job).start().await;
    sleep(Duration::from_millis(1100)).await;

    assert!(provider.call_count() >= 1);
}

#[tokio::test]
async fn test_job_runner_propagates_shutdown_token() {
    let provider = Arc::new(CountingZoneProvider::new());
    let store = Arc::new(SimpleZoneStore::default());
    let token = CancellationToken::new();
    let job = ZoneReloadJob::new(reload_use_case(provider.clone(), store)).with_interval(1);

    JobRunner::new()
        .with_zone_reload(job)
        .with_shutdown_token(token.clone())
        .start()
        .await;
    token.cancel();
    sleep(Duration::from_millis(1100)).await;

    assert_eq!(provider.call_count(), 0);
}
