mod zone_provider;
mod zone_store;

pub use zone_provider::ZoneProvider;
pub use zone_store::ZoneStore;
