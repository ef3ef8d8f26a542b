pub mod formatters;
pub mod utils;

use parcelguard_core::ValidationReport;
pub use formatters::{html::HtmlFormatter, json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_listing(&self, total: usize);
    fn on_file_start(&self, current: usize, total: usize, key: &str);
    fn on_file_result(&mut self, report: &ValidationReport);
    fn on_file_error(&self, key: &str, message: &str);
    fn on_summary(&self, passed: usize, failed: usize, errored: usize);
}
