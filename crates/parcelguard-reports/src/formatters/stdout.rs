use parcelguard_core::ValidationReport;

use crate::{utils::numbers::format_count, Reporter};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("ParcelGuard v{} - Parcel Batch Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_listing(&self, total: usize) {
        println!("Found {} files to validate", total);
    }

    pub fn print_file_progress(&self, current: usize, total: usize, key: &str) {
        println!("  [{}/{}] {}", current, total, key);
    }

    pub fn print_file_result(&self, report: &ValidationReport) {
        let status = if report.is_passed() { "PASSED" } else { "FAILED" };
        let rows_formatted = format_count(report.total_rows);

        println!("\n{} ({} rows) - {}", report.source, rows_formatted, status);

        let max_len = report
            .results()
            .iter()
            .map(|r| r.check.len())
            .max()
            .unwrap_or(0);

        for result in report.results() {
            let dots = ".".repeat(max_len - result.check.len() + 10);
            if result.message.is_empty() {
                println!("    {} {} {}", result.check, dots, result.status);
            } else {
                println!(
                    "    {} {} {} ({})",
                    result.check, dots, result.status, result.message
                );
            }
        }
    }

    pub fn print_file_error(&self, key: &str, message: &str) {
        println!("  Error processing {}: {}", key, message);
    }

    pub fn print_summary(&self, passed: usize, failed: usize, errored: usize) {
        println!("\n===================================");
        if errored > 0 {
            println!(
                "Result: {} failed, {} passed, {} errored before validation",
                failed, passed, errored
            );
        } else {
            println!("Result: {} failed, {} passed", failed, passed);
        }
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let line = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", line);
    }

    fn on_listing(&self, total: usize) {
        self.print_listing(total);
    }

    fn on_file_start(&self, current: usize, total: usize, key: &str) {
        self.print_file_progress(current, total, key);
    }

    fn on_file_result(&mut self, report: &ValidationReport) {
        self.print_file_result(report);
    }

    fn on_file_error(&self, key: &str, message: &str) {
        self.print_file_error(key, message);
    }

    fn on_summary(&self, passed: usize, failed: usize, errored: usize) {
        self.print_summary(passed, failed, errored);
    }
}
