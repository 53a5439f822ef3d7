//! # AWS Service Facade
//!
//! A facade over five AWS managed-service clients: Kinesis, DynamoDB, S3,
//! SQS, and SNS.
//!
//! `awsfacade` holds one long-lived client handle per service plus the
//! configured service identifiers, initialized once from ambient
//! credential/region configuration and reused for the process lifetime. Each
//! operation is an independent, stateless request/response round trip; the
//! facade performs no retries, no batching, and no pagination, and returns
//! each collaborator's error unchanged.
//!
//! The library uses:
//! - The AWS SDK v2 crates for the wire protocols
//! - Narrow per-service client traits as the seam for mock-based testing
//! - Tokio for async execution
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use awsfacade::{AwsFacadeBuilder, FacadeConfig, StorageObject, StreamRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Identifiers come from the environment; AWS credentials and region
//!     // are resolved by the builder.
//!     let config = FacadeConfig::from_env()?;
//!     let facade = AwsFacadeBuilder::new(config).build().await?;
//!
//!     facade.put_record(&StreamRecord::new("Record Name")).await?;
//!     facade
//!         .put_object("s3_file.json", &StorageObject::new("Object Name"))
//!         .await?;
//!
//!     let messages = facade.receive_messages().await?;
//!     println!("received {} messages", messages.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Testing Without AWS Access
//!
//! Every client handle can be injected through the builder, so the facade is
//! testable against in-memory implementations of the client traits:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use awsfacade::clients::KinesisClient;
//! use awsfacade::{AwsFacadeBuilder, FacadeConfig};
//!
//! # async fn example(kinesis: Arc<dyn KinesisClient>) -> awsfacade::Result<()> {
//! let config = FacadeConfig::new("stream", "table", "bucket", "queue-url");
//! let facade = AwsFacadeBuilder::new(config)
//!     .with_kinesis_client(kinesis)
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod facade;
pub mod metrics;
pub mod payload;

// Re-export key types
pub use crate::config::{FacadeConfig, DEFAULT_TABLE_NAME};
pub use crate::error::{Error, Result};
pub use crate::facade::{new_aws_facade, AwsFacade, AwsFacadeBuilder};
pub use crate::metrics::{
    disable_metrics, metrics_enabled, set_metrics_provider, MetricsProvider,
};
pub use crate::payload::{StorageObject, StreamRecord};
