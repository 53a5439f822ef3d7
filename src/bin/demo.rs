//! Demonstration driver for the AWS service facade
//!
//! Runs every facade operation once, in a fixed order, against the services
//! named by the environment. Each step logs its outcome; the process exits
//! non-zero if configuration, construction, or any attempted step failed.
//! By default the first failure stops the run; `--keep-going` attempts the
//! remaining steps instead, which is sound because no step depends on
//! another's result.

use std::process::ExitCode;

use clap::Parser;

use awsfacade::{AwsFacade, AwsFacadeBuilder, FacadeConfig, StorageObject, StreamRecord};

#[derive(Parser)]
#[command(author, version, about = "Runs each AWS facade operation once, in order")]
struct Cli {
    /// Attempt every step even if an earlier one fails
    #[arg(long)]
    keep_going: bool,

    /// AWS region override
    #[arg(long)]
    region: Option<String>,

    /// Name carried by the stream record
    #[arg(long, default_value = "Record Name")]
    record_name: String,

    /// Key used for the table point lookup
    #[arg(long, default_value = "item_id")]
    item_key: String,

    /// Partition key used for the index query
    #[arg(long, default_value = "ID")]
    query_key: String,

    /// Sort-key prefix used for the index query
    #[arg(long, default_value = "PREFIX")]
    query_prefix: String,

    /// Key used for the object upload
    #[arg(long, default_value = "s3_file.json")]
    object_key: String,

    /// Name carried by the uploaded object
    #[arg(long, default_value = "Object Name")]
    object_name: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let config = match FacadeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut builder = AwsFacadeBuilder::new(config);
    if let Some(region) = cli.region.clone() {
        builder = builder.with_region(region);
    }

    let facade = match builder.build().await {
        Ok(facade) => facade,
        Err(e) => {
            log::error!("construction: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let failures = run_steps(&facade, &cli).await;
    if failures > 0 {
        log::error!("{} step(s) failed", failures);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Runs the step sequence and returns the number of failures
///
/// Stops at the first failure unless `--keep-going` is set.
async fn run_steps(facade: &AwsFacade, cli: &Cli) -> usize {
    let mut failures = 0;
    let stream_name = facade.config().stream_name.clone();

    let outcome = facade
        .put_record(&StreamRecord::new(cli.record_name.clone()))
        .await
        .map(|()| "record sent".to_string());
    if !step("put_record", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade
        .list_shards(&stream_name)
        .await
        .map(|shards| format!("{} shard(s)", shards.len()));
    if !step("list_shards", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade.get_item(&cli.item_key).await.map(|item| {
        if item.is_some() {
            "item found".to_string()
        } else {
            "no item under key".to_string()
        }
    });
    if !step("get_item", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade
        .query_table(&cli.query_key, &cli.query_prefix)
        .await
        .map(|result| {
            format!(
                "{} item(s), {:?} capacity units",
                result.items.len(),
                result.consumed_capacity_units
            )
        });
    if !step("query_table", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade
        .put_object(&cli.object_key, &StorageObject::new(cli.object_name.clone()))
        .await
        .map(|()| "object uploaded".to_string());
    if !step("put_object", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade
        .receive_messages()
        .await
        .map(|messages| format!("{} message(s)", messages.len()));
    if !step("receive_messages", outcome, &mut failures) && !cli.keep_going {
        return failures;
    }

    let outcome = facade.publish_message().await.map(|message_id| {
        message_id.map_or_else(|| "published".to_string(), |id| format!("published {}", id))
    });
    step("publish_message", outcome, &mut failures);

    failures
}

/// Logs one step outcome; returns whether the step succeeded
fn step(name: &str, outcome: awsfacade::Result<String>, failures: &mut usize) -> bool {
    match outcome {
        Ok(summary) => {
            log::info!("{}: {}", name, summary);
            true
        }
        Err(e) => {
            log::error!("{}: {}", name, e);
            *failures += 1;
            false
        }
    }
}
