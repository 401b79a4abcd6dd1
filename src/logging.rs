use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// `RUST_LOG` wins over `verbose` when set. Stderr gets compact human output;
/// `log_file`, if given, receives daily-rotated JSON lines.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let directory = prepare_log_dir(&log_path);
        let file_name = log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("bookshelf.log"));
        let file_appender = tracing_appender::rolling::daily(directory, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::new(format!("bookshelf={}", level))
}

/// Ensure the parent directory of `log_path` exists and return it.
fn prepare_log_dir(log_path: &Path) -> &Path {
    let directory = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if let Err(e) = std::fs::create_dir_all(directory) {
        eprintln!("Warning: could not create log directory {}: {}", directory.display(), e);
    }
    directory
}
