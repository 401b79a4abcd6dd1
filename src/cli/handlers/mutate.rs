use anyhow::Result;

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let request = async_graphql::Request::new(query).variables(vars);
    if !execute_and_print(&schema, request)? {
        anyhow::bail!("Mutation returned errors");
    }
    Ok(())
}
