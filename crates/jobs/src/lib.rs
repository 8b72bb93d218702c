pub mod runner;
pub mod zone_reload;

pub use runner::JobRunner;
pub use zone_reload::ZoneReloadJob;
