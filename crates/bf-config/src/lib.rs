//! Benford engine configuration (`benford.toml`).

pub mod analysis;
pub mod error;
pub mod types;

pub use analysis::{BenfordConf, DEFAULT_CONF_FILE, InputConf, OutputConf, TestConf};
pub use error::{ConfError, ConfResult};
pub use types::{LogConf, OutputFormat, parse_level};
