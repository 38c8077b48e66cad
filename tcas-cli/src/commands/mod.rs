//! CLI command implementations

pub mod demo;
pub mod detail;
pub mod list;
pub mod logs;
pub mod session;
pub mod shell;
pub mod status;
pub mod submit;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tcas_core::{EntryPoint, LogEvent, LoggingService, TcasContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    let app_dir = get_app_dir().ok()?;
    std::fs::create_dir_all(&app_dir).ok()?;
    LoggingService::new(&app_dir, entry_point, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the app directory from TCAS_DIR or default to ~/.tcas
pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TCAS_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".tcas"))
        .context("Could not find home directory; set TCAS_DIR")
}

/// Create the application state for one session
pub fn get_context(force_demo: bool) -> Result<TcasContext> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create app directory: {:?}", app_dir))?;

    let mut config = tcas_core::config::Config::load(&app_dir)
        .context("Failed to load settings")?;
    if force_demo {
        config.enable_demo_mode();
    }

    TcasContext::with_config(config).context("Failed to initialize portfolio directory")
}

/// True when stdin is a terminal we can prompt on
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}
