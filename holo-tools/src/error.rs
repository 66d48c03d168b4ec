//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::error;

// Replay tool errors.
#[derive(Debug)]
pub enum Error {
    // Configuration
    ConfigRead(String, std::io::Error),
    ConfigParse(String, toml::de::Error),
    // Record file input
    RecordRead(String, std::io::Error),
    RecordParse { line: usize, error: serde_json::Error },
    // Output
    OutputWrite(std::io::Error),
}

// ===== impl Error =====

impl Error {
    pub(crate) fn log(&self) {
        match self {
            Error::ConfigRead(path, error) | Error::RecordRead(path, error) => {
                error!(%path, error = %with_source(error), "{}", self);
            }
            Error::ConfigParse(path, error) => {
                error!(%path, error = %with_source(error), "{}", self);
            }
            Error::RecordParse { line, error } => {
                error!(%line, error = %with_source(error), "{}", self);
            }
            Error::OutputWrite(error) => {
                error!(error = %with_source(error), "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConfigRead(path, ..) => {
                write!(f, "failed to read configuration file {}", path)
            }
            Error::ConfigParse(path, ..) => {
                write!(f, "failed to parse configuration file {}", path)
            }
            Error::RecordRead(path, ..) => {
                write!(f, "failed to read record file {}", path)
            }
            Error::RecordParse { line, .. } => {
                write!(f, "failed to parse frame record at line {}", line)
            }
            Error::OutputWrite(..) => {
                write!(f, "failed to write output")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigRead(_, error) | Error::RecordRead(_, error) => {
                Some(error)
            }
            Error::ConfigParse(_, error) => Some(error),
            Error::RecordParse { error, .. } => Some(error),
            Error::OutputWrite(error) => Some(error),
        }
    }
}

// ===== global functions =====

pub(crate) fn with_source<E: std::error::Error>(error: E) -> String {
    if let Some(source) = error.source() {
        format!("{} ({})", error, with_source(source))
    } else {
        error.to_string()
    }
}
