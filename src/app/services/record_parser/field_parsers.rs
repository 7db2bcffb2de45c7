//! Field parsing utilities for postcode source records
//!
//! This module provides helper functions for pulling typed values out of a
//! tokenised record with errors that carry the line number and field name.

use crate::constants::SOURCE_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use rust_decimal::Decimal;

/// Parse a required i64 field
pub fn parse_required_i64(record: &StringRecord, line: usize, field_name: &str) -> Result<i64> {
    let value_str = get_required_field(record, line, field_name)?;

    value_str.parse::<i64>().map_err(|e| {
        Error::malformed_record(
            line,
            Some(field_name),
            format!("invalid integer '{}' ({})", value_str, e),
        )
    })
}

/// Parse a required exact decimal field
///
/// The literal is parsed without any floating-point step; a value that needs
/// more precision than a `Decimal` holds is rejected rather than rounded.
pub fn parse_required_decimal(
    record: &StringRecord,
    line: usize,
    field_name: &str,
) -> Result<Decimal> {
    let value_str = get_required_field(record, line, field_name)?;

    Decimal::from_str_exact(value_str).map_err(|e| {
        Error::malformed_record(
            line,
            Some(field_name),
            format!("invalid decimal '{}' ({})", value_str, e),
        )
    })
}

/// Parse a required string field
pub fn parse_required_string(
    record: &StringRecord,
    line: usize,
    field_name: &str,
) -> Result<String> {
    let value_str = get_required_field(record, line, field_name)?;
    Ok(value_str.to_string())
}

/// Get a required, non-empty field value by schema column name
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    line: usize,
    field_name: &str,
) -> Result<&'a str> {
    let index = SOURCE_COLUMNS
        .iter()
        .position(|column| *column == field_name)
        .ok_or_else(|| {
            Error::malformed_record(line, Some(field_name), "column is not part of the schema")
        })?;

    let value = record
        .get(index)
        .ok_or_else(|| Error::malformed_record(line, Some(field_name), "no value"))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::malformed_record(line, Some(field_name), "empty value"));
    }

    Ok(trimmed)
}
