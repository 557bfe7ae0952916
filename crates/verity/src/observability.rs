//! Logging setup: human-readable stderr output plus an optional JSONL file.
//!
//! The file sink is resolved from (highest first) `VERITY_LOG_PATH`,
//! `VERITY_LOG_DIR`, the configured `log_dir`, and the platform data
//! directory. If none of these is writable, only stderr logging is set up.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "VERITY_LOG_PATH";
const ENV_LOG_DIR: &str = "VERITY_LOG_DIR";
const LOG_FILE_NAME: &str = "verity.jsonl";

/// Where (if anywhere) structured logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: Option<PathBuf>,
    /// File name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log destination from the environment, falling back to
    /// `config_log_dir` and then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
            verity_core::config::user_data_dir().map(|dir| dir.join("logs").into_std_path_buf()),
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name()
        {
            return Self {
                log_dir: Some(
                    path.parent()
                        .filter(|p| !p.as_os_str().is_empty())
                        .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                ),
                file_name: name.to_string_lossy().into_owned(),
            };
        }
        Self {
            log_dir: env_dir.or(config_dir).or(default_dir),
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set. Otherwise `-q` forces `error`, `-v` gives
/// `debug`, `-vv` and beyond give `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(directive(quiet, verbose, config_level))
}

fn directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it for the life
/// of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_dir.as_deref().and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        Some(dir)
    }) {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_path_splits_into_dir_and_name() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/verity/run.jsonl")),
            Some(PathBuf::from("/ignored")),
            None,
            None,
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/verity")));
        assert_eq!(cfg.file_name, "run.jsonl");
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("run.jsonl")), None, None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
            Some(PathBuf::from("/default")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/env")));
        assert_eq!(cfg.file_name, LOG_FILE_NAME);
    }

    #[test]
    fn config_dir_beats_default() {
        let cfg = ObservabilityConfig::resolve(
            None,
            None,
            Some(PathBuf::from("/config")),
            Some(PathBuf::from("/default")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/config")));
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(directive(true, 2, "info"), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(directive(false, 0, "warn"), "warn");
        assert_eq!(directive(false, 1, "warn"), "debug");
        assert_eq!(directive(false, 3, "warn"), "trace");
    }
}
