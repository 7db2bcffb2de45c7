//! Startup routine: open the store and run the optional import

use std::sync::Arc;
use tracing::{info, warn};

use crate::Result;
use crate::app::services::bulk_importer::{BulkImporter, ImportStats};
use crate::app::store::MemoryStore;
use crate::config::Config;

/// Open the store and import the configured source file, if any
///
/// A configured snapshot is loaded first. With a non-blank source path the
/// importer runs to completion before anything else is served, and the
/// snapshot is written afterwards. Chunks committed before an import failure
/// are persisted too before the error is returned.
pub async fn bootstrap(config: &Config) -> Result<(Arc<MemoryStore>, Option<ImportStats>)> {
    let store = match &config.store.snapshot_path {
        Some(path) => MemoryStore::load_snapshot(path).await?,
        None => MemoryStore::new(),
    };

    let Some(source) = config.import.source_path() else {
        info!("No source file configured, skipping import");
        return Ok((Arc::new(store), None));
    };

    let importer = BulkImporter::from_config(&config.import)?;
    let result = {
        let mut writer = store.chunk_writer();
        importer.import(&source, &mut writer).await
    };

    match result {
        Ok(stats) => {
            persist(&store, config).await?;
            Ok((Arc::new(store), Some(stats)))
        }
        Err(error) => {
            warn!("Import of {} failed: {}", source.display(), error);
            if let Err(persist_error) = persist(&store, config).await {
                warn!(
                    "Failed to persist chunks committed before the failure: {}",
                    persist_error
                );
            }
            Err(error)
        }
    }
}

/// Write the store to its snapshot file when one is configured
pub async fn persist(store: &MemoryStore, config: &Config) -> Result<()> {
    if let Some(path) = &config.store.snapshot_path {
        store.save_snapshot(path).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::app::store::PostcodeStore;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn source_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_bootstrap_without_source_skips_import() {
        let config = Config::default().with_csv_path("  ");

        let (store, stats) = bootstrap(&config).await.unwrap();

        assert!(stats.is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_imports_and_persists_snapshot() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("store.json");
        let source = source_file("id,postcode,latitude,longitude\n1,SW1A 1AA,51.5074,-0.1278\n");
        let config = Config::default()
            .with_csv_path(source.path().display().to_string())
            .with_snapshot_path(&snapshot)
            .without_progress();

        let (store, stats) = bootstrap(&config).await.unwrap();
        assert_eq!(stats.unwrap().records_written, 1);
        assert_eq!(store.count().await.unwrap(), 1);

        let reopened = MemoryStore::load_snapshot(&snapshot).await.unwrap();
        assert!(
            reopened
                .find_by_postcode("SW1A 1AA")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_bootstrap_keeps_committed_chunks_on_failure() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("store.json");
        let source = source_file(
            "id,postcode,latitude,longitude\n1,SW1A 1AA,51.5074,-0.1278\n2,SW1A 2AA,bad,-0.1276\n",
        );
        let config = Config::default()
            .with_csv_path(source.path().display().to_string())
            .with_snapshot_path(&snapshot)
            .with_chunk_size(1)
            .without_progress();

        let result = bootstrap(&config).await;
        assert!(matches!(result, Err(Error::MalformedRecord { line: 3, .. })));

        let reopened = MemoryStore::load_snapshot(&snapshot).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_import_error_survives_snapshot_failure() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("store.json");
        std::fs::create_dir(dir.path().join("store.json.tmp")).unwrap();
        let source = source_file("id,postcode,latitude,longitude\n1,SW1A 1AA,bad,-0.1\n");
        let config = Config::default()
            .with_csv_path(source.path().display().to_string())
            .with_snapshot_path(&snapshot)
            .without_progress();

        match bootstrap(&config).await {
            Err(Error::MalformedRecord { line, field, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(field.as_deref(), Some("latitude"));
            }
            other => panic!("expected malformed record, got {:?}", other.map(|_| ())),
        }
    }
}
