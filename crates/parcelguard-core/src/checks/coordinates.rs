use crate::checks::{Check, CheckResult};
use crate::dataset::Dataset;

/// Bounds the coerced `lat` column to [-90, 90], boundaries inclusive.
/// Missing values are left to the completeness checks.
// TODO: decide whether `lon` should get the matching [-180, 180] bound;
// today only latitude is bounded.
pub struct LatitudeRangeCheck {
    min: f64,
    max: f64,
}

impl LatitudeRangeCheck {
    pub fn new() -> Self {
        Self {
            min: -90.0,
            max: 90.0,
        }
    }
}

impl Default for LatitudeRangeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for LatitudeRangeCheck {
    fn name(&self) -> &'static str {
        "LatitudeRange"
    }

    fn run(&self, dataset: &Dataset) -> CheckResult {
        let Some(lat) = dataset.float_column("lat") else {
            return CheckResult::fail(
                self.name(),
                "Column 'lat' is not present as a numeric column".to_string(),
            );
        };

        let out_of_range = lat
            .iter()
            .flatten()
            .filter(|value| *value < self.min || *value > self.max)
            .count();

        if out_of_range == 0 {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(
                self.name(),
                format!(
                    "{} latitude values outside the allowed range [{}, {}]",
                    out_of_range, self.min, self.max
                ),
            )
        }
    }
}
