pub mod checks;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod reader;
pub mod report;
pub mod utils;

pub use checks::{standard_checks, Check, CheckResult, CheckStatus, EXPECTED_COLUMNS};
pub use dataset::Dataset;
pub use engine::ValidationEngine;
pub use errors::ValidateError;
pub use reader::read_csv_bytes;
pub use report::ValidationReport;
