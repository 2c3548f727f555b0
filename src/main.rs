use anyhow::Context;
use folio_lib::bootstrap::{
    init_tracing_subscriber, load_config_or_empty, resolve_config_path, wire_dependencies,
};
use folio_lib::{AppContext, Session, ShellDefaults};
use pf_core::config::AppConfig;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The subscriber is not up yet; a missing file is reported again below.
    let config_path = resolve_config_path();
    let config = match &config_path {
        Some(path) => load_config_or_empty(path)?,
        None => AppConfig::empty(),
    };

    init_tracing_subscriber(&config.log_dir).context("Failed to initialize tracing")?;
    match &config_path {
        Some(path) if path.exists() => info!(path = %path.display(), "Configuration loaded"),
        _ => info!("No configuration file, using built-in defaults"),
    }

    let defaults = ShellDefaults::from_config(&config);
    let deps = wire_dependencies(&defaults)?;
    let ctx = AppContext::new(deps, &defaults)?;

    let mut session = Session::new(ctx);
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
