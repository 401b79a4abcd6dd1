use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    bookshelf::logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Serve { host, port } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_serve(ctx, host, port)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_mutate(ctx, mutation, variables)
        }
    }
}

fn load_context(config_path: Option<&str>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::discover(config_path.map(Path::new), &cwd)
        .context("Failed to load config")?;
    Ok(CommandContext::new(config))
}
