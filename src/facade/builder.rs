use std::sync::Arc;

use aws_config::SdkConfig;
use aws_types::region::Region;

use crate::clients::dynamodb::{DynamoDbClient, StandardDynamoDbClient};
use crate::clients::kinesis::{KinesisClient, StandardKinesisClient};
use crate::clients::s3::{ObjectStoreClient, StandardS3Client};
use crate::clients::sns::{StandardSnsClient, TopicClient};
use crate::clients::sqs::{QueueClient, StandardSqsClient};
use crate::config::FacadeConfig;
use crate::error::{Error, Result};
use crate::facade::AwsFacade;

/// Builder for the service facade
///
/// Resolves ambient AWS credential/region configuration once and constructs
/// all five client handles from it, mirroring the single configuration load
/// the facade is specified to perform. Any subset of the handles can be
/// injected instead, which is how the facade is tested without network or
/// credential access; when every handle is injected, no ambient resolution
/// happens at all.
///
/// # Examples
///
/// ```no_run
/// use awsfacade::{AwsFacadeBuilder, FacadeConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = FacadeConfig::from_env()?;
///
///     let facade = AwsFacadeBuilder::new(config)
///         .with_region("us-west-2")
///         .build()
///         .await?;
///
///     Ok(())
/// }
/// ```
pub struct AwsFacadeBuilder {
    /// Service identifiers for the facade
    config: FacadeConfig,

    /// Custom AWS SDK configuration
    sdk_config: Option<SdkConfig>,

    /// Region override for ambient resolution
    region: Option<String>,

    /// Injected stream client
    kinesis: Option<Arc<dyn KinesisClient>>,

    /// Injected table client
    dynamodb: Option<Arc<dyn DynamoDbClient>>,

    /// Injected object store client
    object_store: Option<Arc<dyn ObjectStoreClient>>,

    /// Injected queue client
    queue: Option<Arc<dyn QueueClient>>,

    /// Injected topic client
    topic: Option<Arc<dyn TopicClient>>,
}

impl AwsFacadeBuilder {
    /// Creates a new builder with the given service identifiers
    pub fn new(config: FacadeConfig) -> Self {
        Self {
            config,
            sdk_config: None,
            region: None,
            kinesis: None,
            dynamodb: None,
            object_store: None,
            queue: None,
            topic: None,
        }
    }

    /// Sets the region used during ambient resolution
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets a fully-resolved AWS SDK configuration
    ///
    /// When set, ambient environment discovery is skipped entirely.
    pub fn with_aws_config(mut self, config: SdkConfig) -> Self {
        self.sdk_config = Some(config);
        self
    }

    /// Sets the stream client, primarily to inject mocks in tests
    pub fn with_kinesis_client(mut self, client: Arc<dyn KinesisClient>) -> Self {
        self.kinesis = Some(client);
        self
    }

    /// Sets the table client, primarily to inject mocks in tests
    pub fn with_dynamodb_client(mut self, client: Arc<dyn DynamoDbClient>) -> Self {
        self.dynamodb = Some(client);
        self
    }

    /// Sets the object store client, primarily to inject mocks in tests
    pub fn with_object_store_client(mut self, client: Arc<dyn ObjectStoreClient>) -> Self {
        self.object_store = Some(client);
        self
    }

    /// Sets the queue client, primarily to inject mocks in tests
    pub fn with_queue_client(mut self, client: Arc<dyn QueueClient>) -> Self {
        self.queue = Some(client);
        self
    }

    /// Sets the topic client, primarily to inject mocks in tests
    pub fn with_topic_client(mut self, client: Arc<dyn TopicClient>) -> Self {
        self.topic = Some(client);
        self
    }

    /// Builds the facade
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when a real client is needed and no
    /// region can be resolved from the injected configuration, the builder
    /// override, or the ambient environment. The configuration load itself is
    /// infallible in the SDK; an unresolved region is the observable
    /// discovery failure, and credential problems surface on first use as the
    /// operation's error.
    pub async fn build(self) -> Result<AwsFacade> {
        let Self {
            config,
            sdk_config,
            region,
            kinesis,
            dynamodb,
            object_store,
            queue,
            topic,
        } = self;

        let facade = match (kinesis, dynamodb, object_store, queue, topic) {
            (Some(kinesis), Some(dynamodb), Some(object_store), Some(queue), Some(topic)) => {
                AwsFacade::new(config, kinesis, dynamodb, object_store, queue, topic)
            }
            (kinesis, dynamodb, object_store, queue, topic) => {
                let sdk_config = match sdk_config {
                    Some(resolved) => resolved,
                    None => {
                        let mut loader = aws_config::from_env();

                        if let Some(region) = region {
                            loader = loader.region(Region::new(region));
                        }

                        loader.load().await
                    }
                };

                if sdk_config.region().is_none() {
                    return Err(Error::Configuration(
                        "no AWS region resolved; set AWS_REGION or use with_region".into(),
                    ));
                }

                AwsFacade::new(
                    config,
                    kinesis.unwrap_or_else(|| {
                        Arc::new(StandardKinesisClient::new(aws_sdk_kinesis::Client::new(
                            &sdk_config,
                        )))
                    }),
                    dynamodb.unwrap_or_else(|| {
                        Arc::new(StandardDynamoDbClient::new(aws_sdk_dynamodb::Client::new(
                            &sdk_config,
                        )))
                    }),
                    object_store.unwrap_or_else(|| {
                        Arc::new(StandardS3Client::new(aws_sdk_s3::Client::new(&sdk_config)))
                    }),
                    queue.unwrap_or_else(|| {
                        Arc::new(StandardSqsClient::new(aws_sdk_sqs::Client::new(
                            &sdk_config,
                        )))
                    }),
                    topic.unwrap_or_else(|| {
                        Arc::new(StandardSnsClient::new(aws_sdk_sns::Client::new(
                            &sdk_config,
                        )))
                    }),
                )
            }
        };

        Ok(facade)
    }
}

/// Convenience function to create a facade with ambient configuration
///
/// Equivalent to using the builder without overrides.
///
/// # Errors
///
/// Returns a `Configuration` error when no region can be resolved from the
/// ambient environment.
pub async fn new_aws_facade(config: FacadeConfig) -> Result<AwsFacade> {
    AwsFacadeBuilder::new(config).build().await
}
