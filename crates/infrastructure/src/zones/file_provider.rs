use super::zone_file::parse_zone;
use async_trait::async_trait;
use authdns_application::ports::ZoneProvider;
use authdns_domain::{DomainError, Zone};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads every `*.<extension>` file in a directory as a JSON zone.
pub struct FileZoneProvider {
    directory: PathBuf,
    extension: String,
}

impl FileZoneProvider {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: "zone".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Zone file paths in sorted order, so that duplicate origins resolve
    /// the same way on every load.
    async fn zone_files(&self) -> Result<Vec<PathBuf>, DomainError> {
        let mut entries = tokio::fs::read_dir(&self.directory).await.map_err(|e| {
            DomainError::ZoneSource(format!("{}: {}", self.directory.display(), e))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            DomainError::ZoneSource(format!("{}: {}", self.directory.display(), e))
        })? {
            let path = entry.path();
            let matches_extension = path
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str());
            if !matches_extension {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => continue,
                _ => paths.push(path),
            }
        }

        paths.sort();
        Ok(paths)
    }

    async fn load_zone(path: &Path) -> Result<Zone, DomainError> {
        let source_name = path.display().to_string();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::zone_load(&source_name, e.to_string()))?;
        parse_zone(&source_name, &contents)
    }
}

#[async_trait]
impl ZoneProvider for FileZoneProvider {
    async fn load_zones(&self) -> Result<Vec<Zone>, DomainError> {
        let paths = self.zone_files().await?;
        let mut zones = Vec::with_capacity(paths.len());

        for path in &paths {
            match Self::load_zone(path).await {
                Ok(zone) => {
                    debug!(
                        file = %path.display(),
                        origin = zone.origin(),
                        records = zone.record_count(),
                        "Zone file loaded"
                    );
                    zones.push(zone);
                }
                Err(e) => warn!(error = %e, "Skipping zone file"),
            }
        }

        Ok(zones)
    }
}
