//! Tracing subscriber for harnesses that embed the waits.
//!
//! The wait crates only emit `tracing` events. A test harness calls
//! [`init_tracing`] once to see them: on stderr by default, or appended to the
//! file named by `LOCATOR_WAIT_LOG`. `LOCATOR_WAIT_LOG_FORMAT=json` switches to
//! JSON lines that carry the enclosing spans, so a race worker's events show
//! the candidate index and locator it was polling.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_ENV: &str = "LOCATOR_WAIT_LOG";
const LOG_FORMAT_ENV: &str = "LOCATOR_WAIT_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unknown log format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
    #[error("A global tracing subscriber is already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, TelemetryError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(TelemetryError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OutputSettings {
    format: LogFormat,
    file: Option<PathBuf>,
}

impl OutputSettings {
    fn from_env() -> Result<Self, TelemetryError> {
        let format = match env::var(LOG_FORMAT_ENV) {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) => LogFormat::Text,
        };
        let file = env::var_os(LOG_FILE_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Ok(Self { format, file })
    }
}

/// Flushes the log file on drop. Hold it for as long as logging is wanted.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug)]
pub struct TelemetryGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) -> Result<TelemetryGuard, TelemetryError> {
    let output = OutputSettings::from_env()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, file_writer, ansi) = match &output.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| TelemetryError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None => (
            BoxMakeWriter::new(io::stderr),
            None,
            io::stderr().is_terminal(),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_thread_names(true);

    let installed = match output.format {
        LogFormat::Text => builder.with_ansi(ansi).try_init(),
        LogFormat::Json => builder
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .try_init(),
    };
    installed.map_err(|_| TelemetryError::AlreadyInstalled)?;

    Ok(TelemetryGuard {
        _file_writer: file_writer,
    })
}
