use std::collections::HashSet;

use arrow::datatypes::DataType;
use arrow_array::{Array, ArrayRef, Float64Array, StringArray};
use xxhash_rust::xxh3::Xxh3;

use crate::checks::{Check, CheckResult};
use crate::dataset::Dataset;
use crate::utils::hasher::Xxh3Builder;

/// Fails when any row is an exact duplicate of another across every column
/// value, post-coercion values included. Rows are compared through a
/// per-row xxh3 hash, with null/value tags and length prefixes so cell
/// boundaries stay unambiguous.
pub struct DuplicateRowCheck;

impl DuplicateRowCheck {
    pub fn new() -> Self {
        Self
    }

    fn row_hash(columns: &[ArrayRef], row: usize) -> u64 {
        let mut hasher = Xxh3::new();
        for column in columns {
            hash_cell(&mut hasher, column, row);
        }
        hasher.digest()
    }
}

impl Default for DuplicateRowCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_cell(hasher: &mut Xxh3, column: &ArrayRef, row: usize) {
    if column.is_null(row) {
        hasher.update(&[0u8]);
        return;
    }
    hasher.update(&[1u8]);
    match column.data_type() {
        DataType::Utf8 => {
            // downcast cannot fail: the loader only produces Utf8 columns
            if let Some(array) = column.as_any().downcast_ref::<StringArray>() {
                let value = array.value(row).as_bytes();
                hasher.update(&(value.len() as u64).to_le_bytes());
                hasher.update(value);
            }
        }
        DataType::Float64 => {
            // only the coercion step introduces Float64
            if let Some(array) = column.as_any().downcast_ref::<Float64Array>() {
                hasher.update(&array.value(row).to_le_bytes());
            }
        }
        _ => {}
    }
}

impl Check for DuplicateRowCheck {
    fn name(&self) -> &'static str {
        "DuplicateRows"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let columns = dataset.columns();
        let mut seen: HashSet<u64, Xxh3Builder> = HashSet::with_hasher(Xxh3Builder);
        let mut duplicates = 0usize;

        for row in 0..dataset.num_rows() {
            if !seen.insert(Self::row_hash(columns, row)) {
                duplicates += 1;
            }
        }

        if duplicates == 0 {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(
                self.name(),
                format!("{} duplicate rows in the file", duplicates),
            )
        }
    }
}
