use anyhow::{Context, Result};

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let schema = ctx.schema();
    let settings = &ctx.config.server;
    let url = format!("http://{}{}", settings.address(), settings.path);

    println!("Starting GraphQL server on {}", url);
    if settings.graphiql {
        println!("GraphiQL: {}", url);
    }

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, settings))
        .with_context(|| format!("Server on {} failed", settings.address()))?;
    Ok(())
}
