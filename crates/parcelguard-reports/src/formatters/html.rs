//! Self-contained HTML report, one document per validated source file.

use parcelguard_core::{CheckStatus, ValidationReport};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }\n\
h1 { font-size: 1.3em; }\n\
table { border-collapse: collapse; margin-top: 1em; }\n\
th, td { border: 1px solid #ccc; padding: 6px 12px; text-align: left; }\n\
th { background: #f0f0f0; }\n\
tr.pass td.status { color: #1a7f37; font-weight: bold; }\n\
tr.fail td.status { color: #b42318; font-weight: bold; }\n\
tr.skipped td.status { color: #8a6d00; font-weight: bold; }\n";

pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Render one report as a standalone HTML document.
    pub fn render(report: &ValidationReport) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!(
            "<title>Parcel validation - {}</title>\n",
            escape(&report.source)
        ));
        page.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));

        page.push_str(&format!(
            "<h1>Parcel validation report: {}</h1>\n",
            escape(&report.source)
        ));
        page.push_str(&format!(
            "<p>Generated {} &mdash; {} rows &mdash; {} passed, {} failed, {} skipped</p>\n",
            report.timestamp.format("%Y-%m-%d %H:%M:%S"),
            report.total_rows,
            report.passed_count(),
            report.failed_count(),
            report.skipped_count(),
        ));

        page.push_str("<table>\n<tr><th>Check</th><th>Status</th><th>Message</th></tr>\n");
        for result in report.results() {
            let class = match result.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Fail => "fail",
                CheckStatus::Skipped => "skipped",
            };
            page.push_str(&format!(
                "<tr class=\"{}\"><td>{}</td><td class=\"status\">{}</td><td>{}</td></tr>\n",
                class,
                escape(&result.check),
                result.status,
                escape(&result.message),
            ));
        }
        page.push_str("</table>\n</body>\n</html>\n");
        page
    }

    /// Artifact file name derived from the source key and the report
    /// timestamp, e.g. `PARCEL_TEST_parcels.csv_20240115093000.html`.
    pub fn file_name(report: &ValidationReport) -> String {
        let basename = report
            .source
            .rsplit('/')
            .next()
            .unwrap_or(report.source.as_str());
        format!("PARCEL_TEST_{}_{}.html", basename, report.timestamp_tag())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
