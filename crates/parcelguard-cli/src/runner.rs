use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use parcelguard_core::{read_csv_bytes, ValidationEngine};
use parcelguard_reports::{HtmlFormatter, JsonFormatter, Reporter, StdOutFormatter};

use crate::mover::move_csv_files;
use crate::parser::{parse_config, Config};
use crate::store::StoreClient;
use crate::writer::resolve_json_path;
use crate::{Args, OutputFormat};

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub processed: usize,
    pub passed: usize,
    pub failed: usize,
    /// Files that errored before producing a report (fetch/decode/validate)
    pub errored: usize,
}

pub fn run(args: &Args) -> Result<bool> {
    let config = parse_config(&args.config)?;
    // Missing credentials abort here, before any file is touched.
    let credentials = config.storage.credentials()?;
    let client = StoreClient::s3(&config.storage, &credentials)
        .context("Failed to build object-store client")?;

    relocate_local_files(&config);

    let outcome = run_batch(
        &client,
        &config.storage.prefix,
        &args.output,
        Path::new(config.report_dir()),
    )?;
    Ok(outcome.failed == 0 && outcome.errored == 0)
}

/// The unrelated-but-required local reorganization step. Failures here never
/// block the remote batch.
fn relocate_local_files(config: &Config) {
    let Some(local) = &config.local else {
        return;
    };
    match move_csv_files(Path::new(&local.source_dir), Path::new(&local.dest_dir)) {
        Ok(moved) => info!(
            moved,
            source = %local.source_dir,
            dest = %local.dest_dir,
            "local csv reorganization complete"
        ),
        Err(e) => warn!(error = %e, "local csv reorganization failed; continuing"),
    }
}

/// List the latest files under the prefix and run each one through the
/// validation engine. A failure on one file never aborts the batch: it is
/// logged, counted, and the loop moves on. Files that error before
/// validation produce no report artifact.
pub fn run_batch(
    client: &StoreClient,
    prefix: &str,
    output: &OutputFormat,
    report_dir: &Path,
) -> Result<BatchOutcome> {
    let version = env!("CARGO_PKG_VERSION");
    let mut stdout = StdOutFormatter::new(version.to_string());
    let mut json = match output {
        OutputFormat::Json => Some(JsonFormatter::new(version.to_string())),
        _ => None,
    };
    if matches!(output, OutputFormat::Html | OutputFormat::Json) {
        fs::create_dir_all(report_dir)
            .with_context(|| format!("Failed to create report dir: {}", report_dir.display()))?;
    }

    stdout.on_start();
    // Listing has no per-file scope yet, so a failure here is fatal.
    let keys = client.list_latest(prefix)?;
    stdout.on_listing(keys.len());

    let engine = ValidationEngine::default();
    let mut outcome = BatchOutcome::default();

    for (i, key) in keys.iter().enumerate() {
        stdout.on_file_start(i + 1, keys.len(), key);

        let bytes = match client.fetch(key) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(key = %key, error = %e, "failed to fetch file");
                stdout.on_file_error(key, &e.to_string());
                outcome.errored += 1;
                continue;
            }
        };

        let mut dataset = match read_csv_bytes(&bytes) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(key = %key, error = %e, "failed to decode file");
                stdout.on_file_error(key, &e.to_string());
                outcome.errored += 1;
                continue;
            }
        };

        let report = match engine.validate(&mut dataset, key) {
            Ok(report) => report,
            Err(e) => {
                error!(key = %key, error = %e, "validation errored");
                stdout.on_file_error(key, &e.to_string());
                outcome.errored += 1;
                continue;
            }
        };

        match output {
            OutputFormat::Stdout => stdout.on_file_result(&report),
            OutputFormat::Html => {
                let target = report_dir.join(HtmlFormatter::file_name(&report));
                fs::write(&target, HtmlFormatter::render(&report))
                    .with_context(|| format!("Failed to write report: {}", target.display()))?;
                info!(report = %target.display(), "wrote report");
            }
            OutputFormat::Json => {
                if let Some(json) = json.as_mut() {
                    json.on_file_result(&report);
                }
            }
        }

        outcome.processed += 1;
        if report.is_passed() {
            outcome.passed += 1;
        } else {
            outcome.failed += 1;
        }
    }

    if let Some(json) = json {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
        let target = resolve_json_path(
            report_dir.to_str().unwrap_or("reports"),
            &timestamp,
        )?;
        fs::write(&target, json.to_json()?)
            .with_context(|| format!("Failed to write summary: {}", target.display()))?;
        info!(report = %target.display(), "wrote batch summary");
    }

    stdout.on_summary(outcome.passed, outcome.failed, outcome.errored);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use object_store::memory::InMemory;
    use object_store::path::Path as ObjectPath;
    use object_store::{ObjectStore, PutPayload};
    use tempfile::tempdir;

    const GOOD_CSV: &[u8] = b"geoid,parcelnumb,city,path,owner,lat,lon,address\n\
        1,p1,loveland,a,smith,45.0,-105.0,main st\n\
        2,p2,berthoud,b,,44.0,-104.0,oak st\n";

    fn client_with(objects: &[(&str, &[u8])]) -> StoreClient {
        let store = Arc::new(InMemory::new());
        for (key, content) in objects {
            futures::executor::block_on(
                store.put(&ObjectPath::from(*key), PutPayload::from(content.to_vec())),
            )
            .unwrap();
        }
        StoreClient::new(store).unwrap()
    }

    #[test]
    fn test_batch_writes_one_html_report_per_file() {
        let dir = tempdir().unwrap();
        let client = client_with(&[
            ("wkt/a.csv", GOOD_CSV),
            ("wkt/b.csv", GOOD_CSV),
        ]);

        let outcome = run_batch(&client, "wkt", &OutputFormat::Html, dir.path()).unwrap();
        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.errored, 0);

        let reports: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|name| name.ends_with(".html")));
        assert!(reports.iter().any(|name| name.contains("a.csv")));
    }

    #[test]
    fn test_batch_continues_past_undecodable_file() {
        let dir = tempdir().unwrap();
        let client = client_with(&[
            ("wkt/bad.csv", b""),
            ("wkt/good.csv", GOOD_CSV),
        ]);

        let outcome = run_batch(&client, "wkt", &OutputFormat::Html, dir.path()).unwrap();
        assert_eq!(outcome.errored, 1);
        assert_eq!(outcome.processed, 1);

        // the errored file contributed no report artifact
        let reports: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_batch_json_summary() {
        let dir = tempdir().unwrap();
        let client = client_with(&[("wkt/a.csv", GOOD_CSV)]);

        let outcome = run_batch(&client, "wkt", &OutputFormat::Json, dir.path()).unwrap();
        assert_eq!(outcome.processed, 1);

        let summary = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .find(|p| p.extension().is_some_and(|ext| ext == "json"))
            .unwrap();
        let content = fs::read_to_string(summary).unwrap();
        assert!(content.contains("wkt/a.csv"));
    }

    #[test]
    fn test_batch_empty_prefix() {
        let dir = tempdir().unwrap();
        let client = client_with(&[]);

        let outcome = run_batch(&client, "wkt", &OutputFormat::Stdout, dir.path()).unwrap();
        assert_eq!(outcome.processed, 0);
        assert_eq!(outcome.errored, 0);
    }

    #[test]
    fn test_batch_counts_failed_reports() {
        let dir = tempdir().unwrap();
        // lat way out of range, and a duplicate row
        let bad: &[u8] = b"geoid,parcelnumb,city,path,owner,lat,lon,address\n\
            1,p1,loveland,a,smith,99.0,-105.0,main st\n\
            1,p1,loveland,a,smith,99.0,-105.0,main st\n";
        let client = client_with(&[("wkt/bad.csv", bad)]);

        let outcome = run_batch(&client, "wkt", &OutputFormat::Stdout, dir.path()).unwrap();
        assert_eq!(outcome.processed, 1);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.passed, 0);
    }
}
