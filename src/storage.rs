//! The only local state: a marker recording which dashboard version last ran
//! against this data directory.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

pub const SYSTEM_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VersionMarker {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    Current,
    FirstRun,
    Upgraded { from: String },
}

pub async fn load_marker(path: &Path) -> Option<VersionMarker> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(marker) => Some(marker),
            Err(err) => {
                error!("failed to parse version marker: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read version marker: {err}");
            None
        }
    }
}

pub async fn persist_marker(path: &Path, marker: &VersionMarker) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(marker).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Compares the marker with `current` and rewrites it when they differ.
pub async fn check_version(path: &Path, current: &str) -> Result<VersionCheck, AppError> {
    let check = match load_marker(path).await {
        Some(marker) if marker.version == current => return Ok(VersionCheck::Current),
        Some(marker) => VersionCheck::Upgraded {
            from: marker.version,
        },
        None => VersionCheck::FirstRun,
    };

    info!("system updated to version {current}");
    if let VersionCheck::Upgraded { from } = &check {
        warn!("previous version was {from}; refresh open dashboards if you see issues");
    }
    persist_marker(
        path,
        &VersionMarker {
            version: current.to_string(),
        },
    )
    .await?;
    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("order_desk_{tag}_{}_{nanos}", std::process::id()))
            .join("version.json")
    }

    #[tokio::test]
    async fn first_run_then_current_then_upgrade() {
        let path = temp_path("marker");
        assert_eq!(check_version(&path, "2.0.0").await.unwrap(), VersionCheck::FirstRun);
        assert_eq!(check_version(&path, "2.0.0").await.unwrap(), VersionCheck::Current);
        assert_eq!(
            check_version(&path, "2.1.0").await.unwrap(),
            VersionCheck::Upgraded {
                from: "2.0.0".into()
            }
        );
        assert_eq!(load_marker(&path).await.unwrap().version, "2.1.0");
    }

    #[tokio::test]
    async fn garbage_marker_counts_as_first_run() {
        let path = temp_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        fs::write(&path, b"not json").await.unwrap();
        assert_eq!(check_version(&path, "2.0.0").await.unwrap(), VersionCheck::FirstRun);
    }
}
