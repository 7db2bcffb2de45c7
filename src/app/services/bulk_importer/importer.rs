//! Chunked bulk import of postcode source files
//!
//! Lines are read strictly in order. The header and blank lines are skipped,
//! every other line is parsed, and records are buffered until a full chunk
//! is ready. Each chunk goes through `begin_chunk` / `write` / `commit`; the
//! trailing partial chunk is flushed at end of input. Any parse, I/O or
//! storage failure stops the run. Chunks committed before the failure stay
//! committed, the failing chunk is aborted.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use super::stats::ImportStats;
use crate::app::models::Postcode;
use crate::app::services::record_parser::{LineKind, RecordParser};
use crate::app::store::ChunkWriter;
use crate::config::ImportConfig;
use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::{Error, Result};

/// One-shot importer writing parsed records in fixed-size chunks
#[derive(Debug, Clone)]
pub struct BulkImporter {
    parser: RecordParser,
    chunk_size: usize,
    show_progress: bool,
}

impl BulkImporter {
    /// Create an importer committing `chunk_size` records per chunk
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::configuration("Import chunk size must be at least 1"));
        }

        Ok(Self {
            parser: RecordParser::new(),
            chunk_size,
            show_progress: false,
        })
    }

    /// Create an importer from the import section of the configuration
    pub fn from_config(config: &ImportConfig) -> Result<Self> {
        Ok(Self::new(config.chunk_size)?.with_progress(config.show_progress))
    }

    /// Show a progress spinner while importing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Records per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Import every record of the file at `path` through `writer`
    pub async fn import<W>(&self, path: &Path, writer: &mut W) -> Result<ImportStats>
    where
        W: ChunkWriter + ?Sized,
    {
        let file = File::open(path).await.map_err(|e| {
            Error::io(format!("Failed to open source file {}", path.display()), e)
        })?;

        self.import_from_reader(BufReader::new(file), &path.display().to_string(), writer)
            .await
    }

    /// Import from any buffered reader; `source` names it in logs and stats
    pub async fn import_from_reader<R, W>(
        &self,
        mut reader: R,
        source: &str,
        writer: &mut W,
    ) -> Result<ImportStats>
    where
        R: AsyncBufRead + Unpin,
        W: ChunkWriter + ?Sized,
    {
        info!(
            "Importing postcodes from {} (chunk size {})",
            source, self.chunk_size
        );

        let start_time = Instant::now();
        let mut stats = ImportStats::new(source);
        let progress_bar = self.progress_bar();
        let mut chunk: Vec<Postcode> = Vec::with_capacity(self.chunk_size);
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            let read = reader.read_until(b'\n', &mut buffer).await.map_err(|e| {
                Error::io(
                    format!("Failed to read line {} of {}", line_number + 1, source),
                    e,
                )
            })?;
            if read == 0 {
                break;
            }

            line_number += 1;
            stats.lines_read += 1;

            // Header bytes are skipped undecoded, whatever their encoding
            if self.parser.is_header(line_number) {
                stats.header_lines_skipped += 1;
                continue;
            }

            let raw = std::str::from_utf8(strip_line_ending(&buffer))
                .map_err(|_| Error::malformed_record(line_number, None, "invalid UTF-8"))?;

            let data = match self.parser.classify(line_number, raw) {
                LineKind::Header => {
                    stats.header_lines_skipped += 1;
                    continue;
                }
                LineKind::Blank => {
                    stats.blank_lines_skipped += 1;
                    continue;
                }
                LineKind::Data(data) => data,
            };

            let record = self.parser.parse(line_number, data)?;
            stats.records_parsed += 1;
            chunk.push(record.into());

            if chunk.len() == self.chunk_size {
                self.flush_chunk(writer, &mut chunk, &mut stats).await?;
                if let Some(pb) = &progress_bar {
                    pb.set_message(format!("{} postcodes imported", stats.records_written));
                }
            }
        }

        self.flush_chunk(writer, &mut chunk, &mut stats).await?;
        stats.elapsed = start_time.elapsed();

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("{} postcodes imported", stats.records_written));
        }

        info!(
            "Imported {} postcodes in {} chunks from {} lines ({} blank) in {:.2}s",
            stats.records_written,
            stats.chunks_committed,
            stats.lines_read,
            stats.blank_lines_skipped,
            stats.elapsed.as_secs_f64()
        );

        Ok(stats)
    }

    /// Commit the buffered records as one chunk, aborting it on failure
    async fn flush_chunk<W>(
        &self,
        writer: &mut W,
        chunk: &mut Vec<Postcode>,
        stats: &mut ImportStats,
    ) -> Result<()>
    where
        W: ChunkWriter + ?Sized,
    {
        if chunk.is_empty() {
            return Ok(());
        }

        match Self::write_chunk(writer, chunk).await {
            Ok(committed) => {
                stats.chunks_committed += 1;
                stats.records_written += committed;
                debug!(
                    "Chunk {} committed ({} records, {} total)",
                    stats.chunks_committed, committed, stats.records_written
                );
                chunk.clear();
                Ok(())
            }
            Err(error) => {
                if let Err(abort_error) = writer.abort().await {
                    warn!(
                        "Failed to abort chunk {}: {}",
                        stats.chunks_committed + 1,
                        abort_error
                    );
                }
                Err(error)
            }
        }
    }

    async fn write_chunk<W>(writer: &mut W, chunk: &[Postcode]) -> Result<usize>
    where
        W: ChunkWriter + ?Sized,
    {
        writer.begin_chunk().await?;
        writer.write(chunk).await?;
        writer.commit().await
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        match ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Falling back to default spinner style: {}", e),
        }
        pb.set_message("Importing postcodes...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));
        Some(pb)
    }
}

/// Drop a trailing `\n` or `\r\n`
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Default for BulkImporter {
    fn default() -> Self {
        Self {
            parser: RecordParser::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: false,
        }
    }
}
