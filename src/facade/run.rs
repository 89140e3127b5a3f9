use std::process::ExitCode;

use anyhow::{Context, bail};
use bf_cli_core::{
    expected_table, load_column, print_report_json, print_report_table, render_chart_png,
};
use bf_conf::{BenfordConf, OutputFormat};
use bf_stat::{BenfordAnalyzer, build_expected};
use log::LevelFilter;

use super::args::{BenfordCLI, CheckArgs, ExpectedArgs, InitArgs};

/// Smallest sample whose expected counts are all non-zero.
const MIN_TESTABLE_SAMPLE: u64 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Column is consistent with Benford's Law.
    Validated,
    /// Chi-square statistic reached the critical value.
    Rejected,
    Done,
}

impl RunOutcome {
    /// 0 validated / done, 1 rejected. Errors exit with 2 (see `main`).
    pub fn code(&self) -> u8 {
        match self {
            RunOutcome::Validated | RunOutcome::Done => 0,
            RunOutcome::Rejected => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

pub fn run(cli: BenfordCLI) -> anyhow::Result<RunOutcome> {
    match cli {
        BenfordCLI::Check(args) => run_check(&args),
        BenfordCLI::Expected(args) => run_expected(&args),
        BenfordCLI::Init(args) => run_init(&args),
    }
}

/// One-line stderr message with the whole context chain.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Install the env_logger backend once; `RUST_LOG` still refines the level.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_check(args: &CheckArgs) -> anyhow::Result<RunOutcome> {
    let conf = args.load_conf().context("load config")?;
    init_logging(conf.log_conf().level_filter()?);

    let values = load_column(&args.file, &args.column, conf.input())?;
    let analyzer = BenfordAnalyzer::new(conf.test().gof_config()?);
    let report = analyzer.analyze(&values).with_context(|| {
        format!(
            "analyze column '{}' of {}",
            args.column,
            args.file.display()
        )
    })?;

    match conf.output().format {
        OutputFormat::Table => {
            print_report_table(&report, &args.column, conf.output().show_chart)
        }
        OutputFormat::Json => print_report_json(&report, &args.column)?,
    }
    if let Some(path) = &args.chart {
        render_chart_png(&report, path)
            .with_context(|| format!("write chart {}", path.display()))?;
    }

    Ok(if report.validates() {
        RunOutcome::Validated
    } else {
        RunOutcome::Rejected
    })
}

fn run_expected(args: &ExpectedArgs) -> anyhow::Result<RunOutcome> {
    init_logging(LevelFilter::Warn);
    if args.sample_size < MIN_TESTABLE_SAMPLE {
        log::warn!(
            "sample size {} has zero expected counts; a chi-square test needs at least {}",
            args.sample_size,
            MIN_TESTABLE_SAMPLE
        );
    }
    let expected = build_expected(args.sample_size);
    match args.format.unwrap_or_default() {
        OutputFormat::Table => println!("{}", expected_table(&expected)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&expected)?),
    }
    Ok(RunOutcome::Done)
}

fn run_init(args: &InitArgs) -> anyhow::Result<RunOutcome> {
    init_logging(LevelFilter::Warn);
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    let text = BenfordConf::default().to_toml_string()?;
    std::fs::write(&args.path, text)
        .with_context(|| format!("write config {}", args.path.display()))?;
    println!("✓ Wrote default config: {}", args.path.display());
    Ok(RunOutcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fmt::Write;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const BENFORD_1000: [u64; 9] = [301, 176, 125, 97, 79, 67, 58, 51, 46];

    /// Work dir holding `data.csv` whose `total` leading digits follow `counts`
    fn create_work_env(counts: &[u64; 9]) -> (TempDir, PathBuf) {
        let temp = tempfile::tempdir().unwrap();
        let csv = temp.path().join("data.csv");
        let mut body = String::from("invoice;total\n");
        for (i, n) in counts.iter().enumerate() {
            for k in 0..*n {
                let _ = writeln!(body, "INV-{};{}{}", k, i + 1, k % 1000);
            }
        }
        fs::write(&csv, body).unwrap();
        fs::write(
            temp.path().join("benford.toml"),
            "[input]\ndelimiter = \";\"\n\n[log_conf]\nlevel = \"off\"\n",
        )
        .unwrap();
        (temp, csv)
    }

    fn check(csv: &Path, column: &str, extra: &[&str]) -> anyhow::Result<RunOutcome> {
        let conf = csv.with_file_name("benford.toml");
        let mut argv = vec![
            "benford".to_string(),
            "check".to_string(),
            csv.display().to_string(),
            "--column".to_string(),
            column.to_string(),
            "--conf".to_string(),
            conf.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        run(BenfordCLI::try_parse_from(argv).unwrap())
    }

    #[test]
    fn exit_codes() {
        assert_eq!(RunOutcome::Validated.code(), 0);
        assert_eq!(RunOutcome::Done.code(), 0);
        assert_eq!(RunOutcome::Rejected.code(), 1);
    }

    #[test]
    fn min_testable_sample_matches_expected_table() {
        assert!(
            build_expected(MIN_TESTABLE_SAMPLE)
                .iter()
                .all(|(_, c)| c > 0)
        );
        assert!(
            build_expected(MIN_TESTABLE_SAMPLE - 1)
                .iter()
                .any(|(_, c)| c == 0)
        );
    }

    #[test]
    fn benford_data_validates() {
        let (_temp, csv) = create_work_env(&BENFORD_1000);
        let outcome = check(&csv, "total", &[]).unwrap();
        assert_eq!(outcome, RunOutcome::Validated);
        assert_eq!(outcome.code(), 0);
    }

    #[test]
    fn uniform_data_is_rejected() {
        let (_temp, csv) = create_work_env(&[100; 9]);
        let outcome = check(&csv, "total", &["--format", "json"]).unwrap();
        assert_eq!(outcome, RunOutcome::Rejected);
        assert_eq!(outcome.code(), 1);
    }

    #[test]
    fn bad_input_is_an_error_not_a_verdict() {
        let (_temp, csv) = create_work_env(&[100; 9]);

        let err = check(&csv, "total", &["--significance", "0.01"]).unwrap_err();
        assert!(format!("{:#}", err).contains("significance"));

        let err = check(&csv, "invoice", &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("empty input"));
    }

    #[test]
    fn tiny_sample_reports_degenerate_distribution() {
        let (_temp, csv) = create_work_env(&[3, 1, 1, 1, 1, 1, 1, 1, 0]);
        let err = check(&csv, "total", &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("degenerate"));
    }

    #[test]
    fn error_message_is_a_single_line_with_context() {
        let (_temp, csv) = create_work_env(&[100; 9]);
        let err = check(&csv, "price", &[]).unwrap_err();
        let msg = error_message(&err);
        assert!(msg.starts_with("Error: "));
        assert!(msg.contains("price"));
        assert!(msg.contains("data.csv"));
        assert_eq!(msg.lines().count(), 1);
    }

    #[test]
    fn chart_into_missing_directory_fails() {
        let (temp, csv) = create_work_env(&BENFORD_1000);
        let target = temp.path().join("missing").join("chart.png");
        let target_s = target.display().to_string();
        let err = check(&csv, "total", &["--no-chart", "--chart", target_s.as_str()]).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("write chart"));
        assert!(msg.contains("does not exist"));
        assert!(!target.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn chart_is_written_next_to_data() {
        let (temp, csv) = create_work_env(&BENFORD_1000);
        let target = temp.path().join("chart.png");
        let target_s = target.display().to_string();
        let outcome = check(&csv, "total", &["--chart", target_s.as_str()]).unwrap();
        assert_eq!(outcome, RunOutcome::Validated);
        assert!(target.exists());
    }

    #[test]
    fn init_writes_loadable_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("benford.toml");
        let path_s = path.display().to_string();

        let cli =
            BenfordCLI::try_parse_from(["benford", "init", "--path", path_s.as_str()]).unwrap();
        assert_eq!(run(cli).unwrap(), RunOutcome::Done);
        assert!(BenfordConf::load_from_path(&path).is_ok());

        let again =
            BenfordCLI::try_parse_from(["benford", "init", "--path", path_s.as_str()]).unwrap();
        assert!(run(again).is_err());

        let forced =
            BenfordCLI::try_parse_from(["benford", "init", "--path", path_s.as_str(), "--force"])
                .unwrap();
        assert_eq!(run(forced).unwrap(), RunOutcome::Done);
    }

    #[test]
    fn expected_prints_for_any_size() {
        for n in ["0", "5", "900"] {
            let cli = BenfordCLI::try_parse_from(["benford", "expected", n, "-f", "json"]).unwrap();
            assert_eq!(run(cli).unwrap(), RunOutcome::Done);
        }
    }
}
