//! In-memory tabular dataset backed by a single Arrow RecordBatch.
//!
//! Every column starts as nullable Utf8 exactly as read from the source;
//! nulls are the missing marker, distinct from empty string content. The only
//! mutation a `Dataset` supports after load is the declared coercion step
//! (`coerce_float`), which rewrites one column to Float64 with
//! coerce-to-missing semantics.

use std::sync::Arc;

use arrow::compute;
use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow_array::{Array, ArrayRef, Float64Array, RecordBatch, StringArray};

use crate::errors::ValidateError;

pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    pub(crate) fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema_ref().column_with_name(name).is_some()
    }

    pub fn columns(&self) -> &[ArrayRef] {
        self.batch.columns()
    }

    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        let (index, _) = self.batch.schema_ref().column_with_name(name)?;
        Some(self.batch.column(index))
    }

    /// Borrow a column as text, when it still holds text.
    pub fn string_column(&self, name: &str) -> Option<&StringArray> {
        self.column(name)?.as_any().downcast_ref::<StringArray>()
    }

    /// Borrow a column as numeric, after it has been coerced.
    pub fn float_column(&self, name: &str) -> Option<&Float64Array> {
        self.column(name)?.as_any().downcast_ref::<Float64Array>()
    }

    /// Total count of missing values across every column.
    pub fn missing_count(&self) -> usize {
        self.batch.columns().iter().map(|c| c.null_count()).sum()
    }

    /// Rewrite a column from text to Float64 in place. Values that do not
    /// parse as a number become the missing marker instead of erroring
    /// (safe cast). Returns `false` when the column does not exist.
    pub fn coerce_float(&mut self, name: &str) -> Result<bool, ValidateError> {
        let Some((index, _)) = self.batch.schema_ref().column_with_name(name) else {
            return Ok(false);
        };

        let casted = compute::cast(self.batch.column(index), &DataType::Float64)?;

        let mut fields: Vec<FieldRef> = self.batch.schema_ref().fields().iter().cloned().collect();
        fields[index] = Arc::new(Field::new(name, DataType::Float64, true));
        let mut columns = self.batch.columns().to_vec();
        columns[index] = casted;

        self.batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::reader::read_csv_bytes;
    use arrow_array::Array;

    #[test]
    fn test_coerce_float_happy() {
        let csv = b"lat,city\n45.1,loveland\n-12.5,berthoud\n";
        let mut dataset = read_csv_bytes(csv).unwrap();

        assert!(dataset.coerce_float("lat").unwrap());
        let lat = dataset.float_column("lat").unwrap();
        assert_eq!(lat.value(0), 45.1);
        assert_eq!(lat.value(1), -12.5);
        // untouched column stays text
        assert!(dataset.string_column("city").is_some());
    }

    #[test]
    fn test_coerce_float_unparsable_becomes_missing() {
        let csv = b"lat\n45.1\nnot-a-number\n";
        let mut dataset = read_csv_bytes(csv).unwrap();

        dataset.coerce_float("lat").unwrap();
        let lat = dataset.float_column("lat").unwrap();
        assert!(!lat.is_null(0));
        assert!(lat.is_null(1));
    }

    #[test]
    fn test_coerce_float_absent_column() {
        let csv = b"city\nloveland\n";
        let mut dataset = read_csv_bytes(csv).unwrap();
        assert!(!dataset.coerce_float("lat").unwrap());
    }

    #[test]
    fn test_missing_count() {
        let csv = b"geoid,owner\n1,\n2,smith\n,\n";
        let dataset = read_csv_bytes(csv).unwrap();
        // row 1 owner, row 3 geoid and owner
        assert_eq!(dataset.missing_count(), 3);
    }
}
