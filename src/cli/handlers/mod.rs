mod init;
mod mutate;
mod query;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::storage::{EntityStore, SharedStore};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub store: SharedStore,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        let store = if config.store.seed {
            EntityStore::seeded()
        } else {
            EntityStore::new()
        };
        Self {
            config,
            store: store.into_shared(),
        }
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(self.store.clone())
    }
}

/// Parse `--variables` JSON, defaulting to no variables.
fn parse_variables(variables: Option<String>) -> anyhow::Result<async_graphql::Variables> {
    use anyhow::Context;

    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run one document and print the JSON response. Returns `true` if it succeeded without errors.
fn execute_and_print(schema: &BookshelfSchema, request: async_graphql::Request) -> anyhow::Result<bool> {
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    let failed = response.is_err();
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(!failed)
}
