//! CSV decoding into a [`Dataset`].
//!
//! The schema is derived from the header line with every column typed as
//! nullable Utf8, so no value is inferred into a numeric type at load time.
//! Empty cells match the null pattern and become the missing marker.

use std::io::Cursor;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow_array::RecordBatch;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dataset::Dataset;
use crate::errors::ValidateError;

const BATCH_SIZE: usize = 8192;

// Treat empty cells as missing, the way a text-typed load leaves blanks null.
static NULL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^$").unwrap());

/// Decode raw CSV bytes into a [`Dataset`], treating every cell as text.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<Dataset, ValidateError> {
    let schema = Arc::new(generate_schema(bytes)?);

    let reader = CsvReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_null_regex(NULL_PATTERN.clone())
        .with_batch_size(BATCH_SIZE)
        .build(Cursor::new(bytes))
        .map_err(|e| ValidateError::Decode(e.to_string()))?;

    let batches = reader
        .collect::<Result<Vec<RecordBatch>, _>>()
        .map_err(|e| ValidateError::Decode(e.to_string()))?;

    let batch = if batches.is_empty() {
        RecordBatch::new_empty(schema)
    } else {
        concat_batches(&schema, &batches)?
    };

    Ok(Dataset::new(batch))
}

/// Generate an all-Utf8 nullable schema from the CSV header line.
fn generate_schema(bytes: &[u8]) -> Result<Schema, ValidateError> {
    let header_end = bytes
        .iter()
        .position(|b| *b == b'\n')
        .unwrap_or(bytes.len());
    let header = std::str::from_utf8(&bytes[..header_end])
        .map_err(|_| ValidateError::Decode("header is not valid UTF-8".to_string()))?
        .trim_end_matches('\r');

    if header.is_empty() {
        return Err(ValidateError::Decode("CSV content is empty".to_string()));
    }

    let fields: Vec<Field> = header
        .split(',')
        .map(|c| Field::new(c.trim(), DataType::Utf8, true))
        .collect();
    Ok(Schema::new(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::Array;

    #[test]
    fn test_read_basic() {
        let csv = b"geoid,city\n101,loveland\n102,berthoud\n";
        let dataset = read_csv_bytes(csv).unwrap();
        assert_eq!(dataset.num_rows(), 2);
        assert_eq!(dataset.num_columns(), 2);
        assert_eq!(dataset.column_names(), vec!["geoid", "city"]);
    }

    #[test]
    fn test_read_all_columns_are_text() {
        let csv = b"geoid,lat\n101,45.0\n";
        let dataset = read_csv_bytes(csv).unwrap();
        // numeric-looking cells must stay text until coercion
        let lat = dataset.string_column("lat").unwrap();
        assert_eq!(lat.value(0), "45.0");
    }

    #[test]
    fn test_read_empty_cells_become_missing() {
        let csv = b"geoid,owner\n101,\n102,smith\n";
        let dataset = read_csv_bytes(csv).unwrap();
        let owner = dataset.string_column("owner").unwrap();
        assert!(owner.is_null(0));
        assert_eq!(owner.value(1), "smith");
    }

    #[test]
    fn test_read_header_only() {
        let csv = b"geoid,parcelnumb,city\n";
        let dataset = read_csv_bytes(csv).unwrap();
        assert_eq!(dataset.num_rows(), 0);
        assert_eq!(dataset.num_columns(), 3);
    }

    #[test]
    fn test_read_empty_input() {
        let result = read_csv_bytes(b"");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_crlf_header() {
        let csv = b"geoid,city\r\n101,loveland\r\n";
        let dataset = read_csv_bytes(csv).unwrap();
        assert_eq!(dataset.column_names(), vec!["geoid", "city"]);
    }
}
