use crate::conf::validation::ListenerErrors;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("failed to evaluate listener block in {path}\n\n{source}")]
    Evaluate {
        path: PathBuf,
        #[source]
        source: hcl::eval::Error,
    },

    //-------------------------------------------------------------------------
    // Listeners
    //-------------------------------------------------------------------------
    #[error("{0}")]
    Listeners(#[from] ListenerErrors),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn evaluate(path: impl Into<PathBuf>, source: hcl::eval::Error) -> Self {
        Self::Evaluate {
            path: path.into(),
            source,
        }
    }
}
