use std::path::PathBuf;

use bf_stat::StatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Stat(#[from] StatError),
}

pub type ConfResult<T> = Result<T, ConfError>;
