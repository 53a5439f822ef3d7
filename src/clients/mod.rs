//! Provider service clients
//!
//! One module per external service. Each module defines a narrow async trait
//! the facade dispatches through, domain request/response types that carry no
//! SDK types, and a `Standard*` implementation wrapping the corresponding AWS
//! SDK v2 client. The traits are the seam used to test the facade without
//! network or credential access.

pub mod dynamodb;
pub mod kinesis;
pub mod s3;
pub mod sns;
pub mod sqs;

pub use dynamodb::{
    DynamoDbClient, GetItemRequest, QueryRequest, QueryResult, StandardDynamoDbClient, TableItem,
};
pub use kinesis::{KinesisClient, PutRecordRequest, ShardInfo, StandardKinesisClient};
pub use s3::{ObjectStoreClient, PutObjectRequest, StandardS3Client};
pub use sns::{PublishRequest, StandardSnsClient, TopicClient};
pub use sqs::{QueueClient, QueueMessage, ReceiveRequest, StandardSqsClient};
