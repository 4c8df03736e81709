//! Entry point for the `trustgate` simulator console.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use trustgate_console::{
    settings::{load_scoring_config, CONFIG_ENV},
    Console,
};
use trustgate_core::SessionScope;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = match load_scoring_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load scoring config");
            std::process::exit(1);
        }
    };

    let mut scope = match SessionScope::with_config(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid scoring config");
            std::process::exit(1);
        }
    };
    let session = scope.mount().session_id();
    info!(%session, "trustgate console ready");

    let mut console = Console::new(scope);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = console.run(stdin.lock(), stdout.lock()) {
        tracing::error!(error = %e, "console stopped");
        std::process::exit(1);
    }
}
