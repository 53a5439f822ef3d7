//! Object store client
//!
//! Single-object uploads to an S3 bucket.

use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as AwsS3Client;

/// Request for a single-object upload
#[derive(Debug, Clone)]
pub struct PutObjectRequest {
    /// Name of the target bucket
    pub bucket: String,

    /// Object key
    pub key: String,

    /// Encoded object payload
    pub body: Vec<u8>,
}

/// Object store client interface for facade operations
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Uploads a single object, no multipart
    async fn put_object(&self, request: PutObjectRequest) -> Result<()>;
}

/// Standard object store client implementation using AWS SDK v2
pub struct StandardS3Client {
    /// AWS SDK S3 client
    client: AwsS3Client,
}

impl StandardS3Client {
    /// Creates a new StandardS3Client
    pub fn new(client: AwsS3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStoreClient for StandardS3Client {
    async fn put_object(&self, request: PutObjectRequest) -> Result<()> {
        self.client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .body(ByteStream::from(request.body))
            .send()
            .await
            .map_err(|e| Error::ObjectStore(format!("S3 put_object error: {}", e)))?;

        Ok(())
    }
}
