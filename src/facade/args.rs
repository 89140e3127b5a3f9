use std::path::{Path, PathBuf};

use bf_conf::{BenfordConf, ConfResult, DEFAULT_CONF_FILE, OutputFormat};
use clap::{Args, Parser};

#[derive(Parser, Debug)]
// `-V/--version` prints version
// `-V/--version` 打印版本号
#[command(
    name = "benford",
    version,
    about = "Benford's Law first-digit checker/本福特定律首位数字检验"
)]
pub enum BenfordCLI {
    /// Check one CSV column against Benford's Law/检验 CSV 中某一列是否符合本福特定律
    #[command(name = "check")]
    Check(CheckArgs),

    /// Print Benford-expected digit counts for a sample size/输出给定样本量下的期望首位数字计数
    #[command(name = "expected")]
    Expected(ExpectedArgs),

    /// Write a default benford.toml/生成默认配置文件 benford.toml
    #[command(name = "init")]
    Init(InitArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Input CSV file/输入 CSV 文件
    pub file: PathBuf,
    /// Column name; zero-based index when headers are disabled/列名；无表头时为从 0 开始的列序号
    #[clap(short, long)]
    pub column: String,
    /// Config file; ./benford.toml is used when present/配置文件；默认读取当前目录下的 benford.toml（若存在）
    #[clap(long)]
    pub conf: Option<PathBuf>,
    /// Output format: table, json (override [output].format)/输出格式：table、json（覆盖 [output].format）
    #[clap(short, long)]
    pub format: Option<OutputFormat>,
    /// Significance level (override [test].significance)/显著性水平（覆盖 [test].significance）
    #[clap(long)]
    pub significance: Option<f64>,
    /// Do not print the distribution chart/不输出分布对比图
    #[clap(long = "no-chart", default_value = "false")]
    pub no_chart: bool,
    /// Save the observed/expected line chart as PNG/将观测与期望计数折线图保存为 PNG
    #[clap(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,
    /// Log level: error/warn/info/debug/trace (override [log_conf].level)/日志级别（覆盖 [log_conf].level）
    #[clap(long = "log-level")]
    pub log_level: Option<String>,
}

impl CheckArgs {
    /// Load the config file, then apply command line overrides.
    pub fn load_conf(&self) -> ConfResult<BenfordConf> {
        let base = match &self.conf {
            Some(path) => BenfordConf::load_from_path(path)?,
            None => BenfordConf::load_or_default(Path::new(DEFAULT_CONF_FILE))?,
        };
        self.completion_from(base)
    }

    pub fn completion_from(&self, mut conf: BenfordConf) -> ConfResult<BenfordConf> {
        if let Some(format) = self.format {
            conf.set_format(format);
        }
        if self.no_chart {
            conf.set_show_chart(false);
        }
        if let Some(alpha) = self.significance {
            conf.set_significance(alpha);
        }
        if let Some(level) = &self.log_level {
            conf.set_log_level(level);
        }
        // CLI 覆盖后重新校验
        conf.validate()?;
        Ok(conf)
    }
}

#[derive(Args, Debug, Default)]
pub struct ExpectedArgs {
    /// Sample size (number of leading digits)/样本量（首位数字个数）
    pub sample_size: u64,
    /// Output format: table, json/输出格式：table、json
    #[clap(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Target path/目标路径
    #[clap(long, default_value = DEFAULT_CONF_FILE)]
    pub path: PathBuf,
    /// Overwrite an existing file/覆盖已存在的文件
    #[clap(long, default_value = "false")]
    pub force: bool,
}
