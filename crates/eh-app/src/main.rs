use eh_app::{AppContext, LogNavigator, logger, nav_items};

use std::error::Error;
use std::sync::Arc;

use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = eh_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = AppContext::bootstrap(config, Arc::new(LogNavigator))?;
    let session = app.session();
    let preferences = app.preferences().preferences();

    info!(
        "Session: {} (theme {}, low-data {})",
        session.role(),
        preferences.theme,
        preferences.low_data_mode
    );
    for item in nav_items(&session) {
        info!("  {} -> {}", item.label, item.href);
    }

    app.router().navigate(eh_core::HOME_PATH, |route| {
        info!("Rendering {route}");
    });

    Ok(())
}
