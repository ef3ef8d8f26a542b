use crate::checks::{Check, CheckResult};
use crate::dataset::Dataset;

/// The parcel record shape every file must carry. Extra columns are allowed.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    "geoid",
    "parcelnumb",
    "city",
    "path",
    "owner",
    "lat",
    "lon",
    "address",
];

pub struct ColumnFormatCheck;

impl ColumnFormatCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ColumnFormatCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ColumnFormatCheck {
    fn name(&self) -> &'static str {
        "ColumnFormat"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let missing: Vec<&str> = EXPECTED_COLUMNS
            .iter()
            .filter(|column| !dataset.has_column(column))
            .copied()
            .collect();

        if missing.is_empty() {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(
                self.name(),
                format!("Expected columns are missing: {}", missing.join(", ")),
            )
        }
    }
}
