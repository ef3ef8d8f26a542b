use crate::checks::{Check, CheckResult};
use crate::dataset::Dataset;
use crate::utils::date_parser::parse_date;

/// Only runs when a `Date` column is present; skipped otherwise. Missing
/// values count as invalid, matching a coerce-to-missing date conversion
/// followed by a not-null assertion.
pub struct DateFormatCheck;

impl DateFormatCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateFormatCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for DateFormatCheck {
    fn name(&self) -> &'static str {
        "DateFormat"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let Some(dates) = dataset.string_column("Date") else {
            return CheckResult::skipped(self.name(), "No 'Date' column in the file".to_string());
        };

        let invalid = dates
            .iter()
            .filter(|value| match value {
                Some(v) => parse_date(v).is_none(),
                None => true,
            })
            .count();

        if invalid == 0 {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(
                self.name(),
                format!("{} invalid date values in the 'Date' column", invalid),
            )
        }
    }
}
