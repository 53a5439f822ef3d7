//! Topic client
//!
//! Message publication to an SNS topic.

use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_sns::Client as AwsSnsClient;

/// Request for one publish call
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// ARN of the target topic; the call is issued without a target when unset
    pub topic_arn: Option<String>,

    /// Message body
    pub message: String,
}

/// Topic client interface for facade operations
#[async_trait]
pub trait TopicClient: Send + Sync {
    /// Publishes one message, returning the provider message id when issued
    async fn publish(&self, request: PublishRequest) -> Result<Option<String>>;
}

/// Standard topic client implementation using AWS SDK v2
pub struct StandardSnsClient {
    /// AWS SDK SNS client
    client: AwsSnsClient,
}

impl StandardSnsClient {
    /// Creates a new StandardSnsClient
    pub fn new(client: AwsSnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TopicClient for StandardSnsClient {
    async fn publish(&self, request: PublishRequest) -> Result<Option<String>> {
        let mut publish = self.client.publish().message(&request.message);

        if let Some(topic_arn) = &request.topic_arn {
            publish = publish.topic_arn(topic_arn);
        }

        let result = publish
            .send()
            .await
            .map_err(|e| Error::Topic(format!("SNS publish error: {}", e)))?;

        Ok(result.message_id().map(str::to_string))
    }
}
