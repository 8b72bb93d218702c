use authdns_domain::{CliOverrides, ReloadMode};
use authdns_jobs::{JobRunner, ZoneReloadJob};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "authdns")]
#[command(version)]
#[command(about = "authdns - Authoritative DNS server answering A queries from JSON zone files")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory holding *.zone files
    #[arg(short = 'z', long, value_name = "DIR")]
    zones_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        zones_directory: cli.zones_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting authdns v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();

    let zones = di::ZoneServices::new(&config).await;
    let dns_services = di::DnsServices::new(&config, &zones);

    if config.zones.reload == ReloadMode::Interval {
        let job = ZoneReloadJob::new(zones.reload.clone())
            .with_interval(config.zones.reload_interval_secs);
        JobRunner::new()
            .with_zone_reload(job)
            .with_shutdown_token(shutdown.clone())
            .start()
            .await;
    }

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_shutdown.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    server::start_dns_server(
        config.server.listen_addr(),
        config.server.max_message_size,
        dns_services.handler,
        shutdown,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
