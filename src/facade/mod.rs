//! Service facade over the five provider clients
//!
//! `AwsFacade` holds one long-lived handle per external service plus the
//! configured identifiers, all immutable after construction. Every operation
//! is an independent, stateless request/response round trip: build one
//! request, dispatch it once, return the collaborator's error unchanged. No
//! retries, no batching, no pagination.
//!
//! Construction goes through [`AwsFacadeBuilder`], which resolves ambient
//! AWS configuration and accepts injected client handles for testing.

mod builder;


pub use builder::{new_aws_facade, AwsFacadeBuilder};

use std::sync::Arc;

use crate::clients::dynamodb::{
    DynamoDbClient, GetItemRequest, QueryRequest, QueryResult, TableItem, INDEX_PARTITION_KEY,
    INDEX_SORT_KEY, ITEM_PARTITION_KEY, QUERY_INDEX_NAME,
};
use crate::clients::kinesis::{KinesisClient, PutRecordRequest, ShardInfo};
use crate::clients::s3::{ObjectStoreClient, PutObjectRequest};
use crate::clients::sns::{PublishRequest, TopicClient};
use crate::clients::sqs::{QueueClient, QueueMessage, ReceiveRequest};
use crate::config::FacadeConfig;
use crate::error::Result;
use crate::payload::{StorageObject, StreamRecord};
use crate::timer;

/// Partition key applied to every stream record
///
/// All records share this key and land on a single shard; ordering is FIFO
/// within that shard and nothing more.
pub const STREAM_PARTITION_KEY: &str = "1";

/// Body published by every topic publish
pub const NOTIFICATION_MESSAGE: &str = "message";

/// Maximum messages drained per receive call
pub const RECEIVE_MAX_MESSAGES: i32 = 10;

/// Visibility timeout applied to received messages, in seconds
pub const RECEIVE_VISIBILITY_TIMEOUT_SECS: i32 = 20;

/// Long-poll wait per receive call, in seconds
pub const RECEIVE_WAIT_TIME_SECS: i32 = 30;

/// Message attributes requested with every receive call
pub const RECEIVE_MESSAGE_ATTRIBUTES: [&str; 2] = ["ID", "COUNTRY"];

/// Facade over the five provider service clients
pub struct AwsFacade {
    /// Configured service identifiers
    config: FacadeConfig,

    /// Stream client handle
    kinesis: Arc<dyn KinesisClient>,

    /// Table client handle
    dynamodb: Arc<dyn DynamoDbClient>,

    /// Object store client handle
    object_store: Arc<dyn ObjectStoreClient>,

    /// Queue client handle
    queue: Arc<dyn QueueClient>,

    /// Topic client handle
    topic: Arc<dyn TopicClient>,
}

impl AwsFacade {
    pub(crate) fn new(
        config: FacadeConfig,
        kinesis: Arc<dyn KinesisClient>,
        dynamodb: Arc<dyn DynamoDbClient>,
        object_store: Arc<dyn ObjectStoreClient>,
        queue: Arc<dyn QueueClient>,
        topic: Arc<dyn TopicClient>,
    ) -> Self {
        Self {
            config,
            kinesis,
            dynamodb,
            object_store,
            queue,
            topic,
        }
    }

    /// Returns the configured service identifiers
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    /// Encodes a record and appends it to the configured stream
    ///
    /// The partition key is always [`STREAM_PARTITION_KEY`].
    pub async fn put_record(&self, record: &StreamRecord) -> Result<()> {
        let _timer = timer!("awsfacade.stream.putrecord");

        let data = serde_json::to_vec(record)?;
        log::debug!(
            "sending {} byte record to stream {}",
            data.len(),
            self.config.stream_name
        );

        let request = PutRecordRequest {
            stream_name: self.config.stream_name.clone(),
            partition_key: STREAM_PARTITION_KEY.to_string(),
            data,
        };

        self.kinesis.put_record(request).await
    }

    /// Lists shard metadata for a named stream
    pub async fn list_shards(&self, stream_name: &str) -> Result<Vec<ShardInfo>> {
        let _timer = timer!("awsfacade.stream.listshards");

        self.kinesis.list_shards(stream_name).await
    }

    /// Gets an item from the configured table by partition key
    ///
    /// Returns `Ok(None)` when no item exists under the key.
    pub async fn get_item(&self, key: &str) -> Result<Option<TableItem>> {
        let _timer = timer!("awsfacade.table.getitem");

        let request = GetItemRequest {
            table_name: self.config.table_name.clone(),
            partition_key_attribute: ITEM_PARTITION_KEY.to_string(),
            partition_key: key.to_string(),
        };

        self.dynamodb.get_item(request).await
    }

    /// Queries the fixed secondary index by exact key and sort-key prefix
    ///
    /// Strong consistency and consumed-capacity totals are always requested.
    pub async fn query_table(&self, key: &str, prefix: &str) -> Result<QueryResult> {
        let _timer = timer!("awsfacade.table.query");

        let request = query_request(&self.config.table_name, key, prefix);

        self.dynamodb.query(request).await
    }

    /// Encodes an object and uploads it under the configured bucket
    pub async fn put_object(&self, key: &str, object: &StorageObject) -> Result<()> {
        let _timer = timer!("awsfacade.object.putobject");

        let body = serde_json::to_vec(object)?;

        let request = put_object_request(&self.config.bucket_name, key, body);

        self.object_store.put_object(request).await
    }

    /// Long-polls the configured queue once
    ///
    /// Always requests [`RECEIVE_MAX_MESSAGES`] messages, a
    /// [`RECEIVE_VISIBILITY_TIMEOUT_SECS`] second visibility timeout, a
    /// [`RECEIVE_WAIT_TIME_SECS`] second wait, all system attributes, and the
    /// [`RECEIVE_MESSAGE_ATTRIBUTES`] message attributes.
    pub async fn receive_messages(&self) -> Result<Vec<QueueMessage>> {
        let _timer = timer!("awsfacade.queue.receive");

        let request = ReceiveRequest {
            queue_url: self.config.queue_url.clone(),
            max_messages: RECEIVE_MAX_MESSAGES,
            visibility_timeout: RECEIVE_VISIBILITY_TIMEOUT_SECS,
            wait_time_seconds: RECEIVE_WAIT_TIME_SECS,
            message_attribute_names: RECEIVE_MESSAGE_ATTRIBUTES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            all_system_attributes: true,
        };

        self.queue.receive_messages(request).await
    }

    /// Publishes the constant notification body to the configured topic
    ///
    /// The topic ARN is attached only when one is configured; no default is
    /// assumed.
    pub async fn publish_message(&self) -> Result<Option<String>> {
        let _timer = timer!("awsfacade.topic.publish");

        let request = PublishRequest {
            topic_arn: self.config.topic_arn.clone(),
            message: NOTIFICATION_MESSAGE.to_string(),
        };

        self.topic.publish(request).await
    }
}

/// Builds an index query request from the table name and the two key inputs
fn query_request(table_name: &str, key: &str, prefix: &str) -> QueryRequest {
    QueryRequest {
        table_name: table_name.to_string(),
        index_name: QUERY_INDEX_NAME.to_string(),
        partition_key_attribute: INDEX_PARTITION_KEY.to_string(),
        partition_key: key.to_string(),
        sort_key_attribute: INDEX_SORT_KEY.to_string(),
        sort_key_prefix: prefix.to_string(),
        consistent_read: true,
        return_consumed_capacity: true,
    }
}

/// Builds an upload request from the bucket, key, and encoded body
fn put_object_request(bucket: &str, key: &str, body: Vec<u8>) -> PutObjectRequest {
    PutObjectRequest {
        bucket: bucket.to_string(),
        key: key.to_string(),
        body,
    }
}
