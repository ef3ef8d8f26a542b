use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use parcelguard_core::{CheckStatus, ValidationReport};

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    generated: String,
    files: Vec<FileFormatter>,
}

#[derive(Serialize, Deserialize)]
struct FileFormatter {
    source: String,
    rows: usize,
    timestamp: String,
    passed: bool,
    checks: Vec<CheckFormatter>,
}

#[derive(Serialize, Deserialize)]
struct CheckFormatter {
    name: String,
    status: String,
    message: String,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            generated,
            files: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "pass",
        CheckStatus::Fail => "fail",
        CheckStatus::Skipped => "skipped",
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_listing(&self, _total: usize) {}

    fn on_file_start(&self, _current: usize, _total: usize, _key: &str) {}

    fn on_file_result(&mut self, report: &ValidationReport) {
        let checks: Vec<CheckFormatter> = report
            .results()
            .iter()
            .map(|r| CheckFormatter {
                name: r.check.clone(),
                status: status_label(r.status).to_string(),
                message: r.message.clone(),
            })
            .collect();

        self.files.push(FileFormatter {
            source: report.source.clone(),
            rows: report.total_rows,
            timestamp: report.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            passed: report.is_passed(),
            checks,
        });
    }

    fn on_file_error(&self, _key: &str, _message: &str) {}

    fn on_summary(&self, _passed: usize, _failed: usize, _errored: usize) {}
}
