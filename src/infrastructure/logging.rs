use super::settings::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a file-backed tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `Ok(true)`
/// only when the subscriber was installed: no configured log file, or a
/// global subscriber already in place, both give `Ok(false)`.
pub fn init_logging(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let installed = fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}
