//! Stream client
//!
//! Single-record appends and shard listing against a Kinesis stream.

use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::Client as AwsKinesisClient;

/// Request for a single-record stream append
#[derive(Debug, Clone)]
pub struct PutRecordRequest {
    /// Name of the target stream
    pub stream_name: String,

    /// Partition key the record is routed by
    pub partition_key: String,

    /// Encoded record payload
    pub data: Vec<u8>,
}

/// Shard metadata returned by a listing
#[derive(Debug, Clone)]
pub struct ShardInfo {
    /// Identifier of the shard
    pub shard_id: String,

    /// Identifier of the parent shard, if the shard was split or merged
    pub parent_shard_id: Option<String>,
}

/// Stream client interface for facade operations
#[async_trait]
pub trait KinesisClient: Send + Sync {
    /// Appends a single record to a stream
    async fn put_record(&self, request: PutRecordRequest) -> Result<()>;

    /// Lists shard metadata for a named stream
    async fn list_shards(&self, stream_name: &str) -> Result<Vec<ShardInfo>>;
}

/// Standard stream client implementation using AWS SDK v2
pub struct StandardKinesisClient {
    /// AWS SDK Kinesis client
    client: AwsKinesisClient,
}

impl StandardKinesisClient {
    /// Creates a new StandardKinesisClient
    pub fn new(client: AwsKinesisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KinesisClient for StandardKinesisClient {
    async fn put_record(&self, request: PutRecordRequest) -> Result<()> {
        self.client
            .put_record()
            .stream_name(request.stream_name)
            .partition_key(request.partition_key)
            .data(Blob::new(request.data))
            .send()
            .await
            .map_err(|e| Error::Stream(format!("Kinesis put_record error: {}", e)))?;

        Ok(())
    }

    async fn list_shards(&self, stream_name: &str) -> Result<Vec<ShardInfo>> {
        let result = self
            .client
            .list_shards()
            .stream_name(stream_name)
            .send()
            .await
            .map_err(|e| Error::Stream(format!("Kinesis list_shards error: {}", e)))?;

        let mut shards = Vec::new();

        if let Some(listed) = result.shards() {
            for shard in listed {
                shards.push(ShardInfo {
                    shard_id: shard.shard_id().unwrap_or_default().to_string(),
                    parent_shard_id: shard.parent_shard_id().map(str::to_string),
                });
            }
        }

        Ok(shards)
    }
}
