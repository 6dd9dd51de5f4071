//! Text ingestion of sparse labeled records.
//!
//! Each non-blank line holds one record:
//!
//! ```text
//! label a1:v1 a2:v2 ... an:vn
//! ```
//!
//! `label` is an integer (negative for test rows), each `ai:vi` token is a
//! non-negative integer attribute index and a real value. A negative index
//! such as `-3:1.0` is rejected as an invalid record. Tokens are separated
//! by whitespace. Parsing fails fast on the first malformed line.

use crate::core::constants::ATTRIBUTE_SEPARATOR;
use crate::core::error::{Result, TreeError};
use crate::core::types::{AttributeIndex, AttributeValue, ClassLabel};
use crate::dataset::dataset::Dataset;
use crate::dataset::record::Record;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parses one record line. `line_number` is 1-based and only used in errors.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record> {
    let mut tokens = line.split_whitespace();

    let label_token = tokens
        .next()
        .ok_or_else(|| TreeError::invalid_record(line_number, "empty line"))?;
    let label: ClassLabel = label_token.parse().map_err(|_| {
        TreeError::invalid_record(line_number, format!("invalid label '{}'", label_token))
    })?;

    let attributes = tokens
        .map(|token| parse_attribute(token, line_number))
        .collect::<Result<Vec<_>>>()?;

    Record::new(label, attributes).map_err(|err| match err {
        TreeError::InvalidRecord { message, .. } => {
            TreeError::invalid_record(line_number, message)
        }
        other => other,
    })
}

fn parse_attribute(token: &str, line_number: usize) -> Result<(AttributeIndex, AttributeValue)> {
    let (index, value) = token.split_once(ATTRIBUTE_SEPARATOR).ok_or_else(|| {
        TreeError::invalid_record(
            line_number,
            format!("expected index{}value, found '{}'", ATTRIBUTE_SEPARATOR, token),
        )
    })?;

    let index: AttributeIndex = index.parse().map_err(|_| {
        TreeError::invalid_record(line_number, format!("invalid attribute index '{}'", index))
    })?;
    let value: AttributeValue = value.parse().map_err(|_| {
        TreeError::invalid_record(
            line_number,
            format!("attribute {} has non-numeric value '{}'", index, value),
        )
    })?;

    Ok((index, value))
}

/// Reads all records from a buffered reader, skipping blank lines.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut records = Vec::new();
    let mut line_numbers = Vec::new();

    for (position, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, position + 1)?);
        line_numbers.push(position + 1);
    }

    // Schema errors are reported against the record's position; map it back
    // to the line it came from.
    let dataset = Dataset::new(records).map_err(|err| match err {
        TreeError::InvalidRecord { line, message } => TreeError::invalid_record(
            line_numbers.get(line.wrapping_sub(1)).copied().unwrap_or(line),
            message,
        ),
        other => other,
    })?;

    log::info!(
        "Loaded {} record(s) with {} attribute(s) per record",
        dataset.len(),
        dataset.schema().len()
    );
    Ok(dataset)
}

/// Parses records from an in-memory string.
pub fn load_from_str(input: &str) -> Result<Dataset> {
    load_from_reader(input.as_bytes())
}

/// Reads records from a file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    log::debug!("Reading records from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Reads records from standard input until end of stream.
pub fn load_from_stdin() -> Result<Dataset> {
    log::debug!("Reading records from standard input");
    let stdin = io::stdin();
    load_from_reader(stdin.lock())
}
