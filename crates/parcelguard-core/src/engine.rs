//! ValidationEngine - executes the fixed check battery against one dataset.
//!
//! Independent of where the bytes came from: anything decoded into a
//! [`Dataset`] goes through the same ordered battery. One engine instance can
//! validate any number of datasets; no state crosses runs.

use crate::checks::{standard_checks, Check, CheckResult, CRITICAL_COLUMNS};
use crate::dataset::Dataset;
use crate::errors::ValidateError;
use crate::report::ValidationReport;

pub struct ValidationEngine {
    checks: Vec<Box<dyn Check>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(standard_checks())
    }
}

impl ValidationEngine {
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Run the battery and collect one result per check.
    ///
    /// An empty dataset (zero rows or zero columns) short-circuits into a
    /// single skipped result; nothing downstream assumes column presence on
    /// such files. Otherwise the coordinate columns are coerced to numbers
    /// in place, then every check runs in order regardless of earlier
    /// failures.
    pub fn validate(
        &self,
        dataset: &mut Dataset,
        source: &str,
    ) -> Result<ValidationReport, ValidateError> {
        let mut report = ValidationReport::new(source.to_string(), dataset.num_rows());

        if dataset.num_rows() == 0 || dataset.num_columns() == 0 {
            report.add_result(CheckResult::skipped(
                "EmptyDataset",
                "File has no rows or no columns; checks skipped".to_string(),
            ));
            return Ok(report);
        }

        for column in CRITICAL_COLUMNS {
            dataset.coerce_float(column)?;
        }

        for check in &self.checks {
            report.add_result(check.run(dataset));
        }

        Ok(report)
    }
}
