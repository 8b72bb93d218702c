use super::ZoneServices;
use authdns_application::use_cases::ResolveQuestionUseCase;
use authdns_domain::{Config, ReloadMode};
use authdns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config, zones: &ZoneServices) -> Self {
        let resolver = Arc::new(ResolveQuestionUseCase::new(zones.store.clone()));
        let mut handler = DnsServerHandler::new(resolver);

        if config.zones.reload == ReloadMode::PerQuery {
            info!("Zones will be reloaded before every query");
            handler = handler.with_reload_per_query(zones.reload.clone());
        }

        Self { handler }
    }
}
