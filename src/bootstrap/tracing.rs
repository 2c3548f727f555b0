//! Tracing configuration for Folio
//!
//! ## Behavior / 行为
//!
//! - stdout layer always on, file layer when `logging.dir` is configured
//! - `RUST_LOG` overrides the built-in directives

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "folio.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for the workspace crates
/// - **Production**: info for the workspace crates
/// - HTTP client internals stay at warn
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![
        "info".to_string(),
        "hyper=warn".to_string(),
        "reqwest=warn".to_string(),
    ];
    directives.extend(
        ["folio", "folio_lib", "pf_core", "pf_app", "pf_infra"]
            .iter()
            .map(|target| format!("{target}={app_level}")),
    );
    directives
}

/// Initialize the tracing subscriber
///
/// Call once in `main` after the config is loaded, before anything logs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
/// A log directory that cannot be created is reported on stderr and
/// logging continues on stdout only.
pub fn init_tracing_subscriber(log_dir: &Path) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // The interactive shell owns stdout; logs go to stderr.
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"pf_app=debug".to_string()));
        assert!(dev_directives.contains(&"reqwest=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"pf_app=info".to_string()));
        assert!(prod_directives.contains(&"pf_infra=info".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let joined = build_filter_directives(true).join(",");

        assert!(tracing_subscriber::EnvFilter::try_new(joined).is_ok());
    }
}
