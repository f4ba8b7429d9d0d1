use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;

/// A flat key/value object store holding serialized documents.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn get_object(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Keys under `prefix`, in ascending key order.
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// [`ObjectStore`] backed by a single S3 bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        objects::put_object(&self.client, &self.bucket, key, body, content_type).await
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        objects::get_object(&self.client, &self.bucket, key).await
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        objects::list_objects(&self.client, &self.bucket, prefix).await
    }
}
