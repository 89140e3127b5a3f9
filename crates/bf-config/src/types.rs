use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::LevelFilter;
use serde_derive::{Deserialize, Serialize};

use crate::error::{ConfError, ConfResult};

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfError::Invalid(format!(
                "unknown output format '{}' (expect table|json)",
                other
            ))),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct LogConf {
    /// error | warn | info | debug | trace | off
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConf {
    pub fn level_filter(&self) -> ConfResult<LevelFilter> {
        parse_level(&self.level)
    }
}

pub fn parse_level(level: &str) -> ConfResult<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| ConfError::Invalid(format!("unknown log level '{}'", level)))
}

pub fn default_log_level() -> String {
    "warn".to_string()
}
