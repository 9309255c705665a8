//! Request logging.
//!
//! One log entry per completed request, written to stdout or an
//! append-mode file in either a plain or a JSON line format. The format
//! and destination are fixed at startup.

use crate::config::LogConfig;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Failure to open the configured log destination. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One completed request. Built by the dispatcher on every exit path and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestLogEntry {
    pub timestamp: String,
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    pub status_code: u16,
    pub response_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    pub remote_addr: String,
    pub content_length: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Plain,
    Json,
}

impl LogFormat {
    fn from_name(name: &str) -> Self {
        if name == "json" {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

/// Shared request log writer. Concurrent handlers serialize their writes
/// through the sink mutex; a disabled logger drops every entry.
pub struct RequestLogger {
    sink: Option<Mutex<Box<dyn Write + Send>>>,
    format: LogFormat,
}

impl RequestLogger {
    /// Open the configured destination. Disabled logging yields a no-op
    /// logger; an unopenable log file aborts startup.
    pub fn from_config(config: &LogConfig) -> Result<Self, LoggerError> {
        if !config.enabled {
            return Ok(RequestLogger {
                sink: None,
                format: LogFormat::Plain,
            });
        }

        let sink: Box<dyn Write + Send> = if config.output == "stdout" {
            Box::new(std::io::stdout())
        } else {
            let path = PathBuf::from(&config.output);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggerError::Open { path, source })?;
            Box::new(file)
        };

        Ok(RequestLogger {
            sink: Some(Mutex::new(sink)),
            format: LogFormat::from_name(&config.format),
        })
    }

    /// True when entries actually go somewhere.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Write one entry. Never fails from the caller's point of view;
    /// serialization and write errors drop the entry.
    pub fn log(&self, entry: &RequestLogEntry) {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return,
        };

        let line = match self.format {
            LogFormat::Json => match serde_json::to_string(entry) {
                Ok(line) => line,
                Err(_) => return,
            },
            LogFormat::Plain => plain_line(entry),
        };

        if let Ok(mut sink) = sink.lock() {
            let _ = writeln!(sink, "{}", line);
            let _ = sink.flush();
        }
    }
}

fn plain_line(entry: &RequestLogEntry) -> String {
    let query = if entry.query.is_empty() {
        String::new()
    } else {
        format!("?{}", entry.query)
    };
    let auth = if entry.auth_type.is_empty() {
        String::new()
    } else {
        format!(" - Auth: {} ({})", entry.auth_type, entry.auth_result)
    };

    format!(
        "[{}] {} {}{} - {} - {} - {} - {} bytes{}",
        entry.timestamp,
        entry.method,
        entry.path,
        query,
        entry.status_code,
        entry.response_time,
        entry.remote_addr,
        entry.content_length,
        auth
    )
}
