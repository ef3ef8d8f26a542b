//! The fixed check battery.
//!
//! Each check is a stateless object taking the [`Dataset`] explicitly, so
//! every rule can be unit tested in isolation. Checks never abort the suite:
//! each one reports its own pass/fail/skip result and the engine runs all of
//! them in order.

pub mod completeness;
pub mod coordinates;
pub mod date;
pub mod duplicates;
pub mod schema;

use std::fmt;

use crate::dataset::Dataset;

pub use completeness::{CoercionCompletenessCheck, CriticalColumnNullCheck, EmptyDataCheck};
pub use coordinates::LatitudeRangeCheck;
pub use date::DateFormatCheck;
pub use duplicates::DuplicateRowCheck;
pub use schema::{ColumnFormatCheck, EXPECTED_COLUMNS};

/// Columns that must parse as numbers and must never be missing.
pub const CRITICAL_COLUMNS: [&str; 2] = ["lat", "lon"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Outcome of one check run against one dataset.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub check: String,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn pass(check: &str) -> Self {
        Self {
            check: check.to_string(),
            status: CheckStatus::Pass,
            message: String::new(),
        }
    }

    pub fn fail(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            status: CheckStatus::Fail,
            message,
        }
    }

    pub fn skipped(check: &str, message: String) -> Self {
        Self {
            check: check.to_string(),
            status: CheckStatus::Skipped,
            message,
        }
    }
}

pub trait Check: Send + Sync {
    /// Returns the name of the check.
    fn name(&self) -> &'static str;
    /// Runs the check against a loaded dataset.
    fn run(&self, dataset: &Dataset) -> CheckResult;
}

/// The full battery in its required order.
pub fn standard_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ColumnFormatCheck::new()),
        Box::new(EmptyDataCheck::new()),
        Box::new(LatitudeRangeCheck::new()),
        Box::new(CoercionCompletenessCheck::new()),
        Box::new(DuplicateRowCheck::new()),
        Box::new(CriticalColumnNullCheck::new()),
        Box::new(DateFormatCheck::new()),
    ]
}
