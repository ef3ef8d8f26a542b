use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub local: Option<LocalConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub prefix: String,
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalConfig {
    pub source_dir: String,
    pub dest_dir: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReportConfig {
    pub dir: Option<String>,
}

/// Resolved access keys, passed explicitly into the store client. No
/// ambient process-wide credential state.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StorageConfig {
    /// Resolve credentials from the config file, falling back to the
    /// conventional environment variables. Absence of either key is fatal
    /// before any file is processed.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let access_key_id = self
            .access_key_id
            .clone()
            .or_else(|| std::env::var("AWS_ACCESS_KEY_ID").ok())
            .filter(|v| !v.is_empty());
        let secret_access_key = self
            .secret_access_key
            .clone()
            .or_else(|| std::env::var("AWS_SECRET_ACCESS_KEY").ok())
            .filter(|v| !v.is_empty());

        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Credentials {
                access_key_id,
                secret_access_key,
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

impl Config {
    pub fn report_dir(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.dir.as_deref())
            .unwrap_or("reports")
    }
}

pub fn parse_config(path: &str) -> Result<Config, ConfigError> {
    if !Path::new(path).exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[storage]
bucket = "rgc-labstorage"
prefix = "Parcels/loveland/wkt/"
access_key_id = "AKIA_TEST"
secret_access_key = "secret"

[local]
source_dir = "loveland/wkt"
dest_dir = "wkt1"

[report]
dir = "out/reports"
"#;

    #[test]
    fn test_parse_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = parse_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.storage.bucket, "rgc-labstorage");
        assert_eq!(config.storage.prefix, "Parcels/loveland/wkt/");
        assert_eq!(config.local.as_ref().unwrap().dest_dir, "wkt1");
        assert_eq!(config.report_dir(), "out/reports");
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[storage]\nbucket = \"b\"\nprefix = \"p/\"\n"
        )
        .unwrap();

        let config = parse_config(file.path().to_str().unwrap()).unwrap();
        assert!(config.local.is_none());
        assert_eq!(config.report_dir(), "reports");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_config("no/such/config.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_inline_credentials_resolve() {
        let storage = StorageConfig {
            bucket: "b".to_string(),
            prefix: "p/".to_string(),
            region: None,
            endpoint: None,
            access_key_id: Some("AKIA_TEST".to_string()),
            secret_access_key: Some("secret".to_string()),
        };
        let credentials = storage.credentials().unwrap();
        assert_eq!(credentials.access_key_id, "AKIA_TEST");
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let storage = StorageConfig {
            bucket: "b".to_string(),
            prefix: "p/".to_string(),
            region: None,
            endpoint: None,
            access_key_id: Some("AKIA_TEST".to_string()),
            secret_access_key: None,
        };
        // only meaningful when the env fallback is absent too
        if std::env::var("AWS_SECRET_ACCESS_KEY").is_err() {
            assert!(matches!(
                storage.credentials(),
                Err(ConfigError::MissingCredentials)
            ));
        }
    }
}
