//! Queue client
//!
//! Long-polled message receipt from an SQS queue.

use std::collections::HashMap;

use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client as AwsSqsClient;

/// Request for one long-polled receive call
#[derive(Debug, Clone)]
pub struct ReceiveRequest {
    /// URL of the queue
    pub queue_url: String,

    /// Maximum number of messages returned by the call
    pub max_messages: i32,

    /// Visibility timeout applied to received messages, in seconds
    pub visibility_timeout: i32,

    /// Long-poll wait, in seconds
    pub wait_time_seconds: i32,

    /// Named message attributes requested with each message
    pub message_attribute_names: Vec<String>,

    /// Whether all system attributes are requested
    pub all_system_attributes: bool,
}

/// Message returned by a receive call
#[derive(Debug, Clone, Default)]
pub struct QueueMessage {
    /// Provider-assigned message identifier
    pub message_id: Option<String>,

    /// Receipt handle for later deletion or visibility changes
    pub receipt_handle: Option<String>,

    /// Message body
    pub body: Option<String>,

    /// String-valued message attributes
    pub message_attributes: HashMap<String, String>,
}

/// Queue client interface for facade operations
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Long-polls the queue once and returns the received messages
    async fn receive_messages(&self, request: ReceiveRequest) -> Result<Vec<QueueMessage>>;
}

/// Standard queue client implementation using AWS SDK v2
pub struct StandardSqsClient {
    /// AWS SDK SQS client
    client: AwsSqsClient,
}

impl StandardSqsClient {
    /// Creates a new StandardSqsClient
    pub fn new(client: AwsSqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueClient for StandardSqsClient {
    async fn receive_messages(&self, request: ReceiveRequest) -> Result<Vec<QueueMessage>> {
        let mut receive = self
            .client
            .receive_message()
            .queue_url(&request.queue_url)
            .max_number_of_messages(request.max_messages)
            .visibility_timeout(request.visibility_timeout)
            .wait_time_seconds(request.wait_time_seconds);

        if request.all_system_attributes {
            receive = receive.attribute_names(QueueAttributeName::All);
        }

        for name in &request.message_attribute_names {
            receive = receive.message_attribute_names(name);
        }

        let result = receive
            .send()
            .await
            .map_err(|e| Error::Queue(format!("SQS receive_message error: {}", e)))?;

        let mut messages = Vec::new();

        if let Some(received) = result.messages() {
            for message in received {
                let mut message_attributes = HashMap::new();

                if let Some(attributes) = message.message_attributes() {
                    for (name, value) in attributes {
                        if let Some(text) = value.string_value() {
                            message_attributes.insert(name.clone(), text.to_string());
                        }
                    }
                }

                messages.push(QueueMessage {
                    message_id: message.message_id().map(str::to_string),
                    receipt_handle: message.receipt_handle().map(str::to_string),
                    body: message.body().map(str::to_string),
                    message_attributes,
                });
            }
        }

        log::debug!(
            "received {} message(s) from {}",
            messages.len(),
            request.queue_url
        );

        Ok(messages)
    }
}
