//! `flatkit_log` v1:
//! Tracing subscriber setup shared by flatkit binaries.
//!
//! Environment:
//! - `RUST_LOG`           : full filter directives, wins over everything
//! - `FLATKIT_LOG_LEVEL`  : default level when `RUST_LOG` is unset
//! - `FLATKIT_LOG_FORMAT` : `human` (default) or `json`
//! - `FLATKIT_LOG_FILE`   : also write events to this file, rolled daily
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, prelude::*};

pub const C_ENV_LOG_LEVEL: &str = "FLATKIT_LOG_LEVEL";
pub const C_ENV_LOG_FORMAT: &str = "FLATKIT_LOG_FORMAT";
pub const C_ENV_LOG_FILE: &str = "FLATKIT_LOG_FILE";

////////////////////////////////////////////////////////////////////////////////
// #region LogSpecification

/// Event rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogFormat {
    #[default]
    Human,
    Json,
}

impl EnumLogFormat {
    /// Unknown values fall back to `Human`.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Human,
        }
    }
}

/// Resolved subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    pub format: EnumLogFormat,
    /// Optional log file; events go to stderr either way.
    pub path_file: Option<PathBuf>,
}

impl SpecLogConfig {
    /// Settings from the `FLATKIT_LOG_*` variables; `n_verbose` raises the default level.
    pub fn from_env(n_verbose: u8) -> Self {
        Self::from_vars(
            n_verbose,
            env::var(C_ENV_LOG_LEVEL).ok(),
            env::var(C_ENV_LOG_FORMAT).ok(),
            env::var(C_ENV_LOG_FILE).ok(),
        )
    }

    pub fn from_vars(
        n_verbose: u8,
        level: Option<String>,
        format: Option<String>,
        path_file: Option<String>,
    ) -> Self {
        let level = level
            .map(|c_level| c_level.trim().to_string())
            .filter(|c_level| !c_level.is_empty())
            .unwrap_or_else(|| derive_default_level(n_verbose).to_string());
        let format = format
            .as_deref()
            .map(EnumLogFormat::parse_lossy)
            .unwrap_or_default();
        let path_file = path_file
            .filter(|c_path| !c_path.trim().is_empty())
            .map(PathBuf::from);
        Self {
            level,
            format,
            path_file,
        }
    }
}

/// `info`, then one level per `-v`.
pub fn derive_default_level(n_verbose: u8) -> &'static str {
    match n_verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Subscriber setup failures.
#[derive(Debug)]
pub enum LogError {
    /// Filter directives could not be parsed.
    InvalidFilter(String),
    /// A global subscriber is already installed.
    AlreadySet(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "Invalid log filter: {msg}"),
            Self::AlreadySet(msg) => write!(f, "Logging already initialised: {msg}"),
        }
    }
}

impl std::error::Error for LogError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Subscriber

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber from the environment.
///
/// Hold the returned guard until exit so buffered file output is flushed.
pub fn init_subscriber(n_verbose: u8) -> Result<Option<WorkerGuard>, LogError> {
    init_subscriber_with(&SpecLogConfig::from_env(n_verbose))
}

pub fn init_subscriber_with(config: &SpecLogConfig) -> Result<Option<WorkerGuard>, LogError> {
    let env_filter = match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(c_directives) => EnvFilter::try_new(c_directives),
        Err(_) => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| LogError::InvalidFilter(e.to_string()))?;

    let mut l_layers: Vec<BoxedLayer> = Vec::new();
    l_layers.push(match config.format {
        EnumLogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        EnumLogFormat::Human => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    });

    let mut guard = None;
    if let Some(path_file) = &config.path_file {
        let dir_log = path_file
            .parent()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let c_file_name = path_file
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "flatkit.log".into());
        let appender = tracing_appender::rolling::daily(dir_log, c_file_name);
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        l_layers.push(match config.format {
            EnumLogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .boxed(),
            EnumLogFormat::Human => tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        });
    }

    tracing_subscriber::registry()
        .with(l_layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| LogError::AlreadySet(e.to_string()))?;

    Ok(guard)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
