//! Postcode store ports and the in-memory adapter
//!
//! The query service reads and writes single records through
//! [`PostcodeStore`]; the bulk importer writes whole chunks through a
//! [`ChunkWriter`], which commits each chunk as one atomic unit.
//!
//! Both traits guarantee the uniqueness of the identifier and of the
//! postcode string: a write that would break either fails with
//! [`Error::UniquenessConflict`](crate::Error::UniquenessConflict).

use async_trait::async_trait;

use crate::Result;
use crate::app::models::Postcode;

pub mod memory;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

pub use memory::{MemoryChunkWriter, MemoryStore};

/// Keyed record access used by the query/update service
#[async_trait]
pub trait PostcodeStore: Send + Sync {
    /// Find the record whose postcode matches exactly
    async fn find_by_postcode(&self, postcode: &str) -> Result<Option<Postcode>>;

    /// Insert or overwrite the record with the same identifier
    ///
    /// Last write wins; there is no concurrency token.
    async fn save(&self, postcode: &Postcode) -> Result<()>;

    /// Number of stored records
    async fn count(&self) -> Result<usize>;

    /// Every stored record, ordered by identifier
    async fn all(&self) -> Result<Vec<Postcode>>;
}

/// Transactional chunk writes used by the bulk importer
///
/// A chunk is opened with [`begin_chunk`](ChunkWriter::begin_chunk), filled
/// with [`write`](ChunkWriter::write) and made durable with
/// [`commit`](ChunkWriter::commit). Nothing written to an open chunk is
/// visible until commit, and a failed commit leaves the store untouched.
/// [`abort`](ChunkWriter::abort) discards an open chunk.
#[async_trait]
pub trait ChunkWriter: Send {
    /// Open a new chunk; fails if one is already open
    async fn begin_chunk(&mut self) -> Result<()>;

    /// Stage records into the open chunk
    async fn write(&mut self, records: &[Postcode]) -> Result<()>;

    /// Persist every staged record or none of them, returning the count
    async fn commit(&mut self) -> Result<usize>;

    /// Discard the open chunk, if any
    async fn abort(&mut self) -> Result<()>;
}
