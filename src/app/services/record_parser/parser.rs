//! Line classification and tokenisation for postcode source files
//!
//! Every source line is first classified: the leading header line is never
//! parsed, whitespace-only lines are dropped, and everything else is data.
//! Data lines are trimmed, tokenised on the delimiter and mapped onto the
//! fixed four-column schema.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::field_parsers::{parse_required_decimal, parse_required_i64, parse_required_string};
use crate::app::models::ImportRecord;
use crate::constants::{FIELD_DELIMITER, HEADER_LINES, SOURCE_COLUMNS};
use crate::{Error, Result};

/// What a raw source line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Leading header line, ignored whatever its content
    Header,
    /// Empty or whitespace-only line
    Blank,
    /// Trimmed data line ready for parsing
    Data(&'a str),
}

/// Parser for `id,postcode,latitude,longitude` records
#[derive(Debug, Clone)]
pub struct RecordParser {
    header_lines: usize,
}

impl RecordParser {
    /// Create a parser for comma-delimited sources with a single header line
    pub fn new() -> Self {
        Self {
            header_lines: HEADER_LINES,
        }
    }

    /// Whether a 1-based line number falls inside the header
    pub fn is_header(&self, line_number: usize) -> bool {
        line_number <= self.header_lines
    }

    /// Classify a raw line by its 1-based line number and content
    pub fn classify<'a>(&self, line_number: usize, raw: &'a str) -> LineKind<'a> {
        if self.is_header(line_number) {
            return LineKind::Header;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Data(trimmed)
        }
    }

    /// Parse a data line into an import record
    pub fn parse(&self, line_number: usize, line: &str) -> Result<ImportRecord> {
        let record = self.tokenize(line_number, line.trim())?;

        if record.len() != SOURCE_COLUMNS.len() {
            return Err(Error::malformed_record(
                line_number,
                None,
                format!(
                    "expected {} fields, found {}",
                    SOURCE_COLUMNS.len(),
                    record.len()
                ),
            ));
        }

        Ok(ImportRecord {
            id: parse_required_i64(&record, line_number, "id")?,
            postcode: parse_required_string(&record, line_number, "postcode")?,
            latitude: parse_required_decimal(&record, line_number, "latitude")?,
            longitude: parse_required_decimal(&record, line_number, "longitude")?,
            line: line_number,
        })
    }

    /// Split a line into fields, honouring double-quoted values
    fn tokenize(&self, line_number: usize, line: &str) -> Result<StringRecord> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(FIELD_DELIMITER)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(line.as_bytes());

        let mut record = StringRecord::new();
        match reader.read_record(&mut record) {
            Ok(true) => Ok(record),
            Ok(false) => Err(Error::malformed_record(line_number, None, "no fields")),
            Err(e) => Err(Error::malformed_record(
                line_number,
                None,
                format!("tokenisation failed: {}", e),
            )),
        }
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}
