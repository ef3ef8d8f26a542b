//! Synchronous object-store client.
//!
//! Wraps any `object_store` backend behind a blocking `list`/`fetch` facade:
//! files are processed one at a time, so the async runtime stays a private
//! detail of this module (a current-thread runtime owned by the client).

use std::sync::Arc;

use futures::TryStreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectMeta, ObjectStore};

use crate::errors::StoreError;
use crate::parser::{Credentials, StorageConfig};

pub struct StoreClient {
    store: Arc<dyn ObjectStore>,
    runtime: tokio::runtime::Runtime,
}

impl StoreClient {
    /// Wrap an already-built backend. Tests hand in the in-memory store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Access(format!("Failed to start runtime: {}", e)))?;
        Ok(Self { store, runtime })
    }

    /// Build an S3 client from the storage section and resolved credentials.
    pub fn s3(config: &StorageConfig, credentials: &Credentials) -> Result<Self, StoreError> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_access_key_id(&credentials.access_key_id)
            .with_secret_access_key(&credentials.secret_access_key);

        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| StoreError::Access(format!("Failed to create S3 client: {}", e)))?;
        Self::new(Arc::new(store))
    }

    /// List object keys under a prefix, most recently modified first.
    pub fn list_latest(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let prefix = ObjectPath::from(prefix);
        let stream = self.store.list(Some(&prefix));
        let mut objects: Vec<ObjectMeta> = self
            .runtime
            .block_on(stream.try_collect())
            .map_err(StoreError::from)?;

        sort_most_recent_first(&mut objects);
        Ok(objects.into_iter().map(|m| m.location.to_string()).collect())
    }

    /// Fetch the raw bytes of one object.
    pub fn fetch(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let location = ObjectPath::from(key);
        let bytes = self
            .runtime
            .block_on(async {
                let result = self.store.get(&location).await?;
                result.bytes().await
            })
            .map_err(StoreError::from)?;
        Ok(bytes.to_vec())
    }
}

fn sort_most_recent_first(objects: &mut [ObjectMeta]) {
    objects.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}
