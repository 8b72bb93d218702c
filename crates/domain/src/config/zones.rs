use serde::Deserialize;

/// When zone data is (re)read from the zone directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadMode {
    /// Load once at startup.
    #[default]
    Startup,
    /// Reload before answering every query.
    PerQuery,
    /// Reload from a background job every `reload_interval_secs`.
    Interval,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZonesConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_zone_extension")]
    pub zone_extension: String,

    #[serde(default)]
    pub reload: ReloadMode,

    #[serde(default = "default_reload_interval_secs")]
    pub reload_interval_secs: u64,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            zone_extension: default_zone_extension(),
            reload: ReloadMode::default(),
            reload_interval_secs: default_reload_interval_secs(),
        }
    }
}

fn default_directory() -> String {
    "zones".to_string()
}

fn default_zone_extension() -> String {
    "zone".to_string()
}

fn default_reload_interval_secs() -> u64 {
    300
}
