use anyhow::Result;

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema();
    let vars = parse_variables(variables)?;

    let request = async_graphql::Request::new(query).variables(vars);
    if !execute_and_print(&schema, request)? {
        anyhow::bail!("Query returned errors");
    }
    Ok(())
}
