use std::sync::Arc;

use aws_types::region::Region;
use aws_types::sdk_config::SdkConfig;

use super::mocks::{test_config, MockKinesisClient, MockSet};
use crate::error::Error;
use crate::facade::AwsFacadeBuilder;

#[tokio::test]
async fn build_fails_when_no_region_is_resolved() {
    // An injected configuration without a region models failed ambient
    // discovery without touching the process environment.
    let result = AwsFacadeBuilder::new(test_config())
        .with_aws_config(SdkConfig::builder().build())
        .build()
        .await;

    match result {
        Err(Error::Configuration(message)) => {
            assert!(message.contains("region"), "unexpected message: {}", message);
        }
        Ok(_) => panic!("expected construction to fail without a region"),
        Err(other) => panic!("expected a configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn build_constructs_standard_clients_from_resolved_config() {
    let sdk_config = SdkConfig::builder()
        .region(Region::new("us-west-2"))
        .build();

    let facade = AwsFacadeBuilder::new(test_config())
        .with_aws_config(sdk_config)
        .build()
        .await
        .expect("construction should succeed with a resolved region");

    let config = facade.config();
    assert_eq!(config.stream_name, "S");
    assert_eq!(config.table_name, "T");
    assert_eq!(config.bucket_name, "B");
    assert_eq!(config.queue_url, "Q");
}

#[tokio::test]
async fn build_with_all_clients_injected_skips_ambient_resolution() {
    let mocks = MockSet::default();

    // No SDK configuration, no region override, no environment lookup.
    let facade = AwsFacadeBuilder::new(test_config())
        .with_kinesis_client(mocks.kinesis.clone())
        .with_dynamodb_client(mocks.dynamodb.clone())
        .with_object_store_client(mocks.object_store.clone())
        .with_queue_client(mocks.queue.clone())
        .with_topic_client(mocks.topic.clone())
        .build()
        .await
        .expect("construction should succeed with injected clients");

    assert_eq!(facade.config().queue_url, "Q");
}

#[tokio::test]
async fn build_fills_in_uninjected_clients_from_resolved_config() {
    let kinesis = Arc::new(MockKinesisClient::new());
    let sdk_config = SdkConfig::builder()
        .region(Region::new("us-west-2"))
        .build();

    let facade = AwsFacadeBuilder::new(test_config())
        .with_kinesis_client(kinesis.clone())
        .with_aws_config(sdk_config)
        .build()
        .await
        .expect("construction should succeed");

    // The injected handle is the one dispatched to.
    facade
        .list_shards("S")
        .await
        .expect("mock list_shards should succeed");
    assert_eq!(kinesis.list_requests.lock().unwrap().len(), 1);
}
