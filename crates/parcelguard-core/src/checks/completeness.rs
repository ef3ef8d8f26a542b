use arrow_array::Array;

use crate::checks::{Check, CheckResult, CRITICAL_COLUMNS};
use crate::dataset::Dataset;

/// Passes only when the dataset contains at least one missing value anywhere.
// TODO: confirm this polarity with the product owner. As written it asserts
// that some missing data IS present, not that none is.
pub struct EmptyDataCheck;

impl EmptyDataCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmptyDataCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for EmptyDataCheck {
    fn name(&self) -> &'static str {
        "EmptyData"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        if dataset.missing_count() > 0 {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(
                self.name(),
                "There is no empty data anywhere in the file".to_string(),
            )
        }
    }
}

/// Counts the missing values a critical column holds, or `None` when the
/// column itself is absent.
fn critical_column_nulls(dataset: &Dataset, column: &str) -> Option<usize> {
    dataset.column(column).map(|array| array.null_count())
}

fn describe_nulls(found: &[(&str, usize)]) -> String {
    found
        .iter()
        .map(|(column, count)| format!("{} ({} missing)", column, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fails when `lat` or `lon` still holds missing values after the numeric
/// coercion, i.e. rows where the text did not parse as a number.
pub struct CoercionCompletenessCheck;

impl CoercionCompletenessCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoercionCompletenessCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for CoercionCompletenessCheck {
    fn name(&self) -> &'static str {
        "CoercionCompleteness"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let mut absent: Vec<&str> = Vec::new();
        let mut with_nulls: Vec<(&str, usize)> = Vec::new();

        for column in CRITICAL_COLUMNS {
            match critical_column_nulls(dataset, column) {
                None => absent.push(column),
                Some(0) => {}
                Some(count) => with_nulls.push((column, count)),
            }
        }

        if !absent.is_empty() {
            return CheckResult::fail(
                self.name(),
                format!("Columns are not present: {}", absent.join(", ")),
            );
        }
        if !with_nulls.is_empty() {
            return CheckResult::fail(
                self.name(),
                format!(
                    "Missing values after conversion to numeric in: {}",
                    describe_nulls(&with_nulls)
                ),
            );
        }
        CheckResult::pass(self.name())
    }
}

/// Independent re-check that the critical columns carry no null values.
/// Same root cause as [`CoercionCompletenessCheck`], reported under its own
/// name for granularity.
pub struct CriticalColumnNullCheck;

impl CriticalColumnNullCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CriticalColumnNullCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for CriticalColumnNullCheck {
    fn name(&self) -> &'static str {
        "CriticalColumnNulls"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let mut absent: Vec<&str> = Vec::new();
        let mut with_nulls: Vec<(&str, usize)> = Vec::new();

        for column in CRITICAL_COLUMNS {
            match critical_column_nulls(dataset, column) {
                None => absent.push(column),
                Some(0) => {}
                Some(count) => with_nulls.push((column, count)),
            }
        }

        if !absent.is_empty() {
            return CheckResult::fail(
                self.name(),
                format!("Important columns are not present: {}", absent.join(", ")),
            );
        }
        if !with_nulls.is_empty() {
            return CheckResult::fail(
                self.name(),
                format!(
                    "Null values in important columns: {}",
                    describe_nulls(&with_nulls)
                ),
            );
        }
        CheckResult::pass(self.name())
    }
}
