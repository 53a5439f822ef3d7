//! Configuration for the facade
//!
//! The facade is configured with four service identifiers, read once from the
//! environment at startup. The table name is a fixed constant rather than an
//! environment value. An optional topic ARN selects the target for publish
//! operations; no default topic is ever assumed.

use std::env;

use crate::error::{Error, Result};

/// Default table name for the key-value table operations
pub const DEFAULT_TABLE_NAME: &str = "dynamodb_table";

/// Environment variable holding the stream name
pub const STREAM_NAME_VAR: &str = "KINESIS_STREAM_NAME";

/// Environment variable holding the bucket name
pub const BUCKET_NAME_VAR: &str = "S3_BUCKET";

/// Environment variable holding the queue URL
pub const QUEUE_URL_VAR: &str = "SQS_URL";

/// Environment variable holding the optional topic ARN
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Service identifiers used by the facade, immutable after construction
#[derive(Debug, Clone)]
pub struct FacadeConfig {
    /// Name of the stream records are sent to
    pub stream_name: String,

    /// Name of the key-value table
    pub table_name: String,

    /// Name of the bucket objects are uploaded to
    pub bucket_name: String,

    /// URL of the queue messages are received from
    pub queue_url: String,

    /// ARN of the topic messages are published to, if one is configured
    pub topic_arn: Option<String>,
}

impl FacadeConfig {
    /// Creates a configuration from explicit identifiers
    pub fn new(
        stream_name: impl Into<String>,
        table_name: impl Into<String>,
        bucket_name: impl Into<String>,
        queue_url: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            table_name: table_name.into(),
            bucket_name: bucket_name.into(),
            queue_url: queue_url.into(),
            topic_arn: None,
        }
    }

    /// Sets the topic ARN used by publish operations
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Reads the configuration from the process environment
    ///
    /// The stream name, bucket name, and queue URL are required; the table
    /// name is the `DEFAULT_TABLE_NAME` constant and the topic ARN is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the first missing required
    /// variable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            required_var(STREAM_NAME_VAR)?,
            DEFAULT_TABLE_NAME,
            required_var(BUCKET_NAME_VAR)?,
            required_var(QUEUE_URL_VAR)?,
        );

        if let Ok(topic_arn) = env::var(TOPIC_ARN_VAR) {
            config = config.with_topic_arn(topic_arn);
        }

        Ok(config)
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Configuration(format!("{} is not set", name)))
}
