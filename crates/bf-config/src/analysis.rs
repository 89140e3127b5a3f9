use std::path::Path;

use bf_stat::{DEFAULT_SIGNIFICANCE, GoodnessOfFitConfig};
use serde_derive::{Deserialize, Serialize};

use crate::error::{ConfError, ConfResult};
use crate::types::{LogConf, OutputFormat};

pub const DEFAULT_CONF_FILE: &str = "benford.toml";

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct TestConf {
    /// 显著性水平，需有对应的临界值表项
    #[serde(default = "default_significance")]
    pub significance: f64,
}

impl Default for TestConf {
    fn default() -> Self {
        Self {
            significance: default_significance(),
        }
    }
}

impl TestConf {
    pub fn gof_config(&self) -> ConfResult<GoodnessOfFitConfig> {
        Ok(GoodnessOfFitConfig::at_significance(self.significance)?)
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct InputConf {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub has_headers: bool,
    /// 去除单元格首尾空白
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl Default for InputConf {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: true,
            trim: true,
        }
    }
}

impl InputConf {
    pub fn delimiter_byte(&self) -> ConfResult<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ConfError::Invalid(format!(
                "input.delimiter must be a single ASCII character (got '{}')",
                self.delimiter
            ))),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct OutputConf {
    #[serde(default)]
    pub format: OutputFormat,
    /// 是否输出观测/期望分布对比图
    #[serde(default = "default_true")]
    pub show_chart: bool,
}

impl Default for OutputConf {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_chart: true,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct BenfordConf {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    test: TestConf,
    #[serde(default)]
    input: InputConf,
    #[serde(default)]
    output: OutputConf,
    #[serde(default)]
    log_conf: LogConf,
}

// Default values and helper functions
pub fn default_version() -> String {
    "1.0".to_string()
}

pub fn default_significance() -> f64 {
    DEFAULT_SIGNIFICANCE
}

pub fn default_delimiter() -> String {
    ",".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BenfordConf {
    fn default() -> Self {
        Self {
            version: default_version(),
            test: TestConf::default(),
            input: InputConf::default(),
            output: OutputConf::default(),
            log_conf: LogConf::default(),
        }
    }
}

impl BenfordConf {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn test(&self) -> &TestConf {
        &self.test
    }

    pub fn input(&self) -> &InputConf {
        &self.input
    }

    pub fn output(&self) -> &OutputConf {
        &self.output
    }

    pub fn log_conf(&self) -> &LogConf {
        &self.log_conf
    }

    /// Parse and validate TOML content; `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> ConfResult<Self> {
        let conf: BenfordConf = toml::from_str(content).map_err(|source| ConfError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn load_from_path(path: &Path) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let conf = Self::from_toml_str(&content, &path.display().to_string())?;
        log::info!("loaded config {}", path.display());
        Ok(conf)
    }

    /// Load `path` when it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> ConfResult<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            log::debug!("config {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> ConfResult<()> {
        let alpha = self.test.significance;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfError::Invalid(format!(
                "test.significance must be in (0, 1) (got {})",
                alpha
            )));
        }
        self.test.gof_config()?;
        self.input.delimiter_byte()?;
        self.log_conf.level_filter()?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> ConfResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn set_significance(&mut self, significance: f64) {
        self.test.significance = significance;
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.output.format = format;
    }

    pub fn set_show_chart(&mut self, show: bool) {
        self.output.show_chart = show;
    }

    pub fn set_log_level(&mut self, level: &str) {
        self.log_conf.level = level.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_stat::StatError;
    use log::LevelFilter;

    #[test]
    fn empty_document_gives_defaults() {
        let conf = BenfordConf::from_toml_str("", "inline").unwrap();
        assert_eq!(conf, BenfordConf::default());
        assert_eq!(conf.version(), "1.0");
        assert_eq!(*conf.test().gof_config().unwrap().critical_value(), 15.51);
        assert_eq!(conf.input().delimiter_byte().unwrap(), b',');
        assert_eq!(conf.output().format, OutputFormat::Table);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let conf = BenfordConf::from_toml_str(
            r#"
[input]
delimiter = ";"

[output]
format = "json"

[log_conf]
level = "debug"
"#,
            "inline",
        )
        .unwrap();
        assert_eq!(conf.input().delimiter_byte().unwrap(), b';');
        assert!(conf.input().has_headers);
        assert_eq!(conf.output().format, OutputFormat::Json);
        assert!(conf.output().show_chart);
        assert_eq!(conf.log_conf().level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn unsupported_significance_fails_validation() {
        let err = BenfordConf::from_toml_str("[test]\nsignificance = 0.01\n", "inline").unwrap_err();
        assert!(matches!(
            err,
            ConfError::Stat(StatError::UnsupportedSignificance(_))
        ));
        let err = BenfordConf::from_toml_str("[test]\nsignificance = 1.5\n", "inline").unwrap_err();
        assert!(matches!(err, ConfError::Invalid(_)));
    }

    #[test]
    fn bad_delimiter_and_syntax_are_reported() {
        let err = BenfordConf::from_toml_str("[input]\ndelimiter = \"::\"\n", "inline").unwrap_err();
        assert!(err.to_string().contains("delimiter"));
        let err = BenfordConf::from_toml_str("[input\n", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = BenfordConf::default().to_toml_string().unwrap();
        assert!(text.contains("significance"));
        let back = BenfordConf::from_toml_str(&text, "generated").unwrap();
        assert_eq!(back, BenfordConf::default());
    }

    #[test]
    fn setters_override_sections() {
        let mut conf = BenfordConf::default();
        conf.set_format(OutputFormat::Json);
        conf.set_show_chart(false);
        conf.set_log_level("trace");
        assert_eq!(conf.output().format, OutputFormat::Json);
        assert!(!conf.output().show_chart);
        assert_eq!(conf.log_conf().level_filter().unwrap(), LevelFilter::Trace);
    }
}
