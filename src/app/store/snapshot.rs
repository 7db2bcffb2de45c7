//! JSON snapshot persistence for the in-memory store
//!
//! A snapshot holds every record with its coordinates written as decimal
//! strings, so values survive a round trip without any floating-point step.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::MemoryStore;
use crate::app::models::Postcode;
use crate::{Error, Result};

/// On-disk layout of a store snapshot
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub postcodes: Vec<Postcode>,
}

impl MemoryStore {
    /// Load a store from a snapshot file
    ///
    /// A missing file yields an empty store. Duplicate identifiers or
    /// postcodes in the file fail with a uniqueness conflict.
    pub async fn load_snapshot(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path)
            .await
            .map_err(|e| Error::io(format!("Failed to access snapshot {}", path.display()), e))?
        {
            info!(
                "No snapshot at {}, starting with an empty store",
                path.display()
            );
            return Ok(Self::new());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read snapshot {}", path.display()), e))?;

        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            Error::snapshot(format!("Failed to decode snapshot {}", path.display()), e)
        })?;

        let count = snapshot.postcodes.len();
        let store = Self::from_records(snapshot.postcodes)?;
        info!("Loaded {} postcodes from {}", count, path.display());
        Ok(store)
    }

    /// Write every record to a snapshot file
    ///
    /// The snapshot is written to a sibling temporary file and renamed into
    /// place, so readers never observe a partial file.
    pub async fn save_snapshot(&self, path: &Path) -> Result<()> {
        let snapshot = Snapshot {
            postcodes: self.records().await,
        };
        let content = serde_json::to_string_pretty(&snapshot).map_err(|e| {
            Error::snapshot(format!("Failed to encode snapshot {}", path.display()), e)
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io(
                    format!("Failed to create snapshot directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let temp_path = temporary_path(path);
        tokio::fs::write(&temp_path, content).await.map_err(|e| {
            Error::io(format!("Failed to write snapshot {}", temp_path.display()), e)
        })?;
        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Failed to remove temporary snapshot {}: {}",
                        temp_path.display(),
                        cleanup
                    );
                }
            }
            return Err(Error::io(
                format!("Failed to replace snapshot {}", path.display()),
                e,
            ));
        }

        debug!(
            "Saved {} postcodes to {}",
            snapshot.postcodes.len(),
            path.display()
        );
        Ok(())
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}
