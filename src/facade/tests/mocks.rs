//! In-memory mock clients for facade tests
//!
//! Each mock captures the requests it receives and can be switched into a
//! failing mode to test error propagation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::clients::dynamodb::{
    DynamoDbClient, GetItemRequest, QueryRequest, QueryResult, TableItem,
};
use crate::clients::kinesis::{KinesisClient, PutRecordRequest, ShardInfo};
use crate::clients::s3::{ObjectStoreClient, PutObjectRequest};
use crate::clients::sns::{PublishRequest, TopicClient};
use crate::clients::sqs::{QueueClient, QueueMessage, ReceiveRequest};
use crate::config::FacadeConfig;
use crate::error::{Error, Result};
use crate::facade::{AwsFacade, AwsFacadeBuilder};

pub(crate) fn test_config() -> FacadeConfig {
    FacadeConfig::new("S", "T", "B", "Q")
}

#[derive(Default)]
pub(crate) struct MockKinesisClient {
    pub put_requests: Mutex<Vec<PutRecordRequest>>,
    pub list_requests: Mutex<Vec<String>>,
    pub shards: Vec<ShardInfo>,
    pub fail: bool,
}

impl MockKinesisClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shards(mut self, shards: Vec<ShardInfo>) -> Self {
        self.shards = shards;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl KinesisClient for MockKinesisClient {
    async fn put_record(&self, request: PutRecordRequest) -> Result<()> {
        self.put_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::Stream("stream unavailable".into()));
        }

        Ok(())
    }

    async fn list_shards(&self, stream_name: &str) -> Result<Vec<ShardInfo>> {
        self.list_requests.lock().unwrap().push(stream_name.to_string());

        if self.fail {
            return Err(Error::Stream("stream unavailable".into()));
        }

        Ok(self.shards.clone())
    }
}

#[derive(Default)]
pub(crate) struct MockDynamoDbClient {
    pub get_requests: Mutex<Vec<GetItemRequest>>,
    pub query_requests: Mutex<Vec<QueryRequest>>,
    pub items: HashMap<String, TableItem>,
    pub query_items: Vec<TableItem>,
    pub consumed_capacity_units: Option<f64>,
    pub fail: bool,
}

impl MockDynamoDbClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: impl Into<String>, item: TableItem) -> Self {
        self.items.insert(key.into(), item);
        self
    }

    pub fn with_query_result(mut self, items: Vec<TableItem>, capacity: Option<f64>) -> Self {
        self.query_items = items;
        self.consumed_capacity_units = capacity;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl DynamoDbClient for MockDynamoDbClient {
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<TableItem>> {
        let key = request.partition_key.clone();
        self.get_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::Table("table unavailable".into()));
        }

        Ok(self.items.get(&key).cloned())
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResult> {
        self.query_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::Table("table unavailable".into()));
        }

        Ok(QueryResult {
            items: self.query_items.clone(),
            consumed_capacity_units: self.consumed_capacity_units,
        })
    }
}

#[derive(Default)]
pub(crate) struct MockObjectStoreClient {
    pub put_requests: Mutex<Vec<PutObjectRequest>>,
    pub fail: bool,
}

impl MockObjectStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl ObjectStoreClient for MockObjectStoreClient {
    async fn put_object(&self, request: PutObjectRequest) -> Result<()> {
        self.put_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::ObjectStore("bucket unavailable".into()));
        }

        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockQueueClient {
    pub receive_requests: Mutex<Vec<ReceiveRequest>>,
    pub messages: Vec<QueueMessage>,
    pub fail: bool,
}

impl MockQueueClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(mut self, messages: Vec<QueueMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl QueueClient for MockQueueClient {
    async fn receive_messages(&self, request: ReceiveRequest) -> Result<Vec<QueueMessage>> {
        self.receive_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::Queue("queue unavailable".into()));
        }

        Ok(self.messages.clone())
    }
}

#[derive(Default)]
pub(crate) struct MockTopicClient {
    pub publish_requests: Mutex<Vec<PublishRequest>>,
    pub message_id: Option<String>,
    pub fail: bool,
}

impl MockTopicClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl TopicClient for MockTopicClient {
    async fn publish(&self, request: PublishRequest) -> Result<Option<String>> {
        self.publish_requests.lock().unwrap().push(request);

        if self.fail {
            return Err(Error::Topic("topic unavailable".into()));
        }

        Ok(self.message_id.clone())
    }
}

/// The five mock handles plus a facade wired to them
pub(crate) struct MockSet {
    pub kinesis: Arc<MockKinesisClient>,
    pub dynamodb: Arc<MockDynamoDbClient>,
    pub object_store: Arc<MockObjectStoreClient>,
    pub queue: Arc<MockQueueClient>,
    pub topic: Arc<MockTopicClient>,
}

impl Default for MockSet {
    fn default() -> Self {
        Self {
            kinesis: Arc::new(MockKinesisClient::new()),
            dynamodb: Arc::new(MockDynamoDbClient::new()),
            object_store: Arc::new(MockObjectStoreClient::new()),
            queue: Arc::new(MockQueueClient::new()),
            topic: Arc::new(MockTopicClient::new()),
        }
    }
}

impl MockSet {
    pub async fn facade(&self, config: FacadeConfig) -> AwsFacade {
        AwsFacadeBuilder::new(config)
            .with_kinesis_client(self.kinesis.clone())
            .with_dynamodb_client(self.dynamodb.clone())
            .with_object_store_client(self.object_store.clone())
            .with_queue_client(self.queue.clone())
            .with_topic_client(self.topic.clone())
            .build()
            .await
            .expect("facade should build from injected clients")
    }
}
