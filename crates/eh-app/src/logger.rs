use crate::error::{AppError, Result as AppErrorResult};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: eh_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match log_file {
        Some(ref log_path) => file_dispatch(log_path)?,
        None if colored => colored_dispatch(),
        None => plain_dispatch().chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={level_filter:?}, file={}",
            path.display()
        ),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}

fn file_dispatch(log_path: &Path) -> AppErrorResult<Dispatch> {
    if let Some(dir) = log_path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| AppError::Logger {
            message: format!("Failed to create log directory {}: {e}", dir.display()),
        })?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| AppError::Logger {
            message: format!("Failed to open log file {}: {e}", log_path.display()),
        })?;

    Ok(plain_dispatch().chain(file))
}

fn plain_dispatch() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = record.level(),
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}

fn colored_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stdout())
}
