//! Tests for the bulk importer

use async_trait::async_trait;

use crate::app::models::Postcode;
use crate::app::store::ChunkWriter;
use crate::{Error, Result};


/// Chunk writer recording every committed chunk, optionally failing one
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub committed: Vec<Vec<Postcode>>,
    pub aborts: usize,
    pub fail_on_commit: Option<usize>,
    open: Option<Vec<Postcode>>,
}

impl RecordingWriter {
    pub fn failing_on_commit(chunk: usize) -> Self {
        Self {
            fail_on_commit: Some(chunk),
            ..Self::default()
        }
    }

    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.committed.iter().map(Vec::len).collect()
    }
}

#[async_trait]
impl ChunkWriter for RecordingWriter {
    async fn begin_chunk(&mut self) -> Result<()> {
        if self.open.is_some() {
            return Err(Error::storage("chunk already open"));
        }
        self.open = Some(Vec::new());
        Ok(())
    }

    async fn write(&mut self, records: &[Postcode]) -> Result<()> {
        self.open
            .as_mut()
            .ok_or_else(|| Error::storage("no open chunk"))?
            .extend_from_slice(records);
        Ok(())
    }

    async fn commit(&mut self) -> Result<usize> {
        if self.fail_on_commit == Some(self.committed.len() + 1) {
            return Err(Error::storage("simulated commit failure"));
        }
        let chunk = self
            .open
            .take()
            .ok_or_else(|| Error::storage("no open chunk"))?;
        let count = chunk.len();
        self.committed.push(chunk);
        Ok(count)
    }

    async fn abort(&mut self) -> Result<()> {
        self.open = None;
        self.aborts += 1;
        Ok(())
    }
}

/// Source text with a header followed by `count` valid data lines
pub fn source_with_records(count: usize) -> String {
    let mut content = String::from("id,postcode,latitude,longitude\n");
    for i in 1..=count {
        content.push_str(&format!("{},PC{} 1AA,51.{:04},-0.{:04}\n", i, i, i % 10000, i % 10000));
    }
    content
}
