pub mod file_provider;
pub mod store;
pub mod zone_file;

pub use file_provider::FileZoneProvider;
pub use store::ArcSwapZoneStore;
pub use zone_file::parse_zone;
