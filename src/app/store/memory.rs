//! In-memory postcode store
//!
//! Records are indexed by identifier with a secondary postcode index that
//! enforces uniqueness. Chunk commits validate every staged record against
//! both indexes and against each other before anything is inserted, all
//! under a single write lock.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

use super::{ChunkWriter, PostcodeStore};
use crate::app::models::Postcode;
use crate::{Error, Result};

/// Postcode store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    /// Records indexed by identifier
    by_id: BTreeMap<i64, Postcode>,

    /// Postcode string to owning identifier
    id_by_postcode: HashMap<String, i64>,
}

impl Tables {
    /// Reject a record whose id or postcode is already taken
    fn check_new(&self, record: &Postcode) -> Result<()> {
        if self.by_id.contains_key(&record.id) {
            return Err(Error::uniqueness_conflict("id", record.id));
        }
        if self.id_by_postcode.contains_key(&record.postcode) {
            return Err(Error::uniqueness_conflict("postcode", &record.postcode));
        }
        Ok(())
    }

    fn insert(&mut self, record: Postcode) {
        self.id_by_postcode.insert(record.postcode.clone(), record.id);
        self.by_id.insert(record.id, record);
    }

    /// Overwrite by identifier, keeping the postcode index consistent
    fn upsert(&mut self, record: Postcode) -> Result<()> {
        if let Some(&owner) = self.id_by_postcode.get(&record.postcode) {
            if owner != record.id {
                return Err(Error::uniqueness_conflict("postcode", &record.postcode));
            }
        }

        if let Some(previous) = self.by_id.get(&record.id) {
            if previous.postcode != record.postcode {
                let stale = previous.postcode.clone();
                self.id_by_postcode.remove(&stale);
            }
        }

        self.insert(record);
        Ok(())
    }
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, enforcing uniqueness
    pub fn from_records(records: impl IntoIterator<Item = Postcode>) -> Result<Self> {
        let mut tables = Tables::default();
        for record in records {
            tables.check_new(&record)?;
            tables.insert(record);
        }

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// All records ordered by identifier
    pub async fn records(&self) -> Vec<Postcode> {
        self.tables.read().await.by_id.values().cloned().collect()
    }

    /// Open a chunk writer bound to this store
    pub fn chunk_writer(&self) -> MemoryChunkWriter<'_> {
        MemoryChunkWriter {
            store: self,
            staged: None,
        }
    }
}

#[async_trait]
impl PostcodeStore for MemoryStore {
    async fn find_by_postcode(&self, postcode: &str) -> Result<Option<Postcode>> {
        let tables = self.tables.read().await;
        Ok(tables
            .id_by_postcode
            .get(postcode)
            .and_then(|id| tables.by_id.get(id))
            .cloned())
    }

    async fn save(&self, postcode: &Postcode) -> Result<()> {
        self.tables.write().await.upsert(postcode.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.tables.read().await.by_id.len())
    }

    async fn all(&self) -> Result<Vec<Postcode>> {
        Ok(self.records().await)
    }
}

/// Chunk writer staging records for an atomic commit into a [`MemoryStore`]
#[derive(Debug)]
pub struct MemoryChunkWriter<'a> {
    store: &'a MemoryStore,
    staged: Option<Vec<Postcode>>,
}

#[async_trait]
impl ChunkWriter for MemoryChunkWriter<'_> {
    async fn begin_chunk(&mut self) -> Result<()> {
        if self.staged.is_some() {
            return Err(Error::storage("a chunk is already open"));
        }
        self.staged = Some(Vec::new());
        Ok(())
    }

    async fn write(&mut self, records: &[Postcode]) -> Result<()> {
        let staged = self
            .staged
            .as_mut()
            .ok_or_else(|| Error::storage("write called without an open chunk"))?;
        staged.extend_from_slice(records);
        Ok(())
    }

    async fn commit(&mut self) -> Result<usize> {
        let staged = self
            .staged
            .take()
            .ok_or_else(|| Error::storage("commit called without an open chunk"))?;

        let mut tables = self.store.tables.write().await;

        {
            let mut chunk_ids = HashSet::with_capacity(staged.len());
            let mut chunk_postcodes = HashSet::with_capacity(staged.len());
            for record in &staged {
                tables.check_new(record)?;
                if !chunk_ids.insert(record.id) {
                    return Err(Error::uniqueness_conflict("id", record.id));
                }
                if !chunk_postcodes.insert(record.postcode.as_str()) {
                    return Err(Error::uniqueness_conflict("postcode", &record.postcode));
                }
            }
        }

        let committed = staged.len();
        for record in staged {
            tables.insert(record);
        }

        debug!("Committed chunk of {} records", committed);
        Ok(committed)
    }

    async fn abort(&mut self) -> Result<()> {
        if let Some(staged) = self.staged.take() {
            debug!("Discarded open chunk of {} records", staged.len());
        }
        Ok(())
    }
}
