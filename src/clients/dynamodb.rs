//! Table client
//!
//! Point lookups and index queries against a DynamoDB table.

use std::collections::HashMap;

use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnConsumedCapacity};
use aws_sdk_dynamodb::Client as AwsDynamoDbClient;

/// Attribute name of the table partition key
pub const ITEM_PARTITION_KEY: &str = "PK";

/// Name of the secondary index queries are issued against
pub const QUERY_INDEX_NAME: &str = "GSI1";

/// Attribute name of the index partition key
pub const INDEX_PARTITION_KEY: &str = "SK";

/// Attribute name of the index sort key
pub const INDEX_SORT_KEY: &str = "GSI1SK";

/// Request for a point lookup by partition key
#[derive(Debug, Clone)]
pub struct GetItemRequest {
    /// Name of the table
    pub table_name: String,

    /// Attribute name of the partition key
    pub partition_key_attribute: String,

    /// Partition key value
    pub partition_key: String,
}

/// Request for an index query by exact partition key and sort-key prefix
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Name of the table
    pub table_name: String,

    /// Name of the secondary index
    pub index_name: String,

    /// Attribute name of the index partition key
    pub partition_key_attribute: String,

    /// Partition key value, matched exactly
    pub partition_key: String,

    /// Attribute name of the index sort key
    pub sort_key_attribute: String,

    /// Sort key prefix, matched with `begins_with`
    pub sort_key_prefix: String,

    /// Whether strong consistency is requested
    pub consistent_read: bool,

    /// Whether consumed-capacity totals are requested
    pub return_consumed_capacity: bool,
}

/// Item returned by a lookup or query
///
/// Scalar string and number attributes are kept; attribute types the facade
/// has no use for are skipped during decoding.
#[derive(Debug, Clone, Default)]
pub struct TableItem {
    /// Attribute name to rendered value
    pub attributes: HashMap<String, String>,
}

/// Result of an index query
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Matched items
    pub items: Vec<TableItem>,

    /// Consumed capacity units, when reporting was requested
    pub consumed_capacity_units: Option<f64>,
}

/// Table client interface for facade operations
#[async_trait]
pub trait DynamoDbClient: Send + Sync {
    /// Gets an item by partition key; absence is `Ok(None)`, not an error
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<TableItem>>;

    /// Queries a secondary index by partition key and sort-key prefix
    async fn query(&self, request: QueryRequest) -> Result<QueryResult>;
}

/// Standard table client implementation using AWS SDK v2
pub struct StandardDynamoDbClient {
    /// AWS SDK DynamoDB client
    client: AwsDynamoDbClient,
}

impl StandardDynamoDbClient {
    /// Creates a new StandardDynamoDbClient
    pub fn new(client: AwsDynamoDbClient) -> Self {
        Self { client }
    }

    /// Converts a raw item into a TableItem
    fn decode_item(item: &HashMap<String, AttributeValue>) -> TableItem {
        let mut attributes = HashMap::new();

        for (name, value) in item {
            match value {
                AttributeValue::S(text) => {
                    attributes.insert(name.clone(), text.clone());
                }
                AttributeValue::N(number) => {
                    attributes.insert(name.clone(), number.clone());
                }
                _ => {}
            }
        }

        TableItem { attributes }
    }
}

#[async_trait]
impl DynamoDbClient for StandardDynamoDbClient {
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<TableItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&request.table_name)
            .key(
                &request.partition_key_attribute,
                AttributeValue::S(request.partition_key.clone()),
            )
            .send()
            .await
            .map_err(|e| Error::Table(format!("DynamoDB get_item error: {}", e)))?;

        Ok(result.item().map(Self::decode_item))
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResult> {
        let mut query = self
            .client
            .query()
            .table_name(&request.table_name)
            .index_name(&request.index_name)
            .consistent_read(request.consistent_read)
            .key_condition_expression("#pk = :pk AND begins_with(#sk, :sk)")
            .expression_attribute_names("#pk", &request.partition_key_attribute)
            .expression_attribute_names("#sk", &request.sort_key_attribute)
            .expression_attribute_values(":pk", AttributeValue::S(request.partition_key.clone()))
            .expression_attribute_values(":sk", AttributeValue::S(request.sort_key_prefix.clone()));

        if request.return_consumed_capacity {
            query = query.return_consumed_capacity(ReturnConsumedCapacity::Total);
        }

        let result = query
            .send()
            .await
            .map_err(|e| Error::Table(format!("DynamoDB query error: {}", e)))?;

        let mut items = Vec::new();

        if let Some(found) = result.items() {
            for item in found {
                items.push(Self::decode_item(item));
            }
        }

        Ok(QueryResult {
            items,
            consumed_capacity_units: result.consumed_capacity().and_then(|c| c.capacity_units()),
        })
    }
}
