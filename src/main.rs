use std::process::ExitCode;

use bf_engine::facade::{BenfordCLI, error_message, run};
use clap::Parser;

/// Exit code for bad input, configuration or I/O errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = BenfordCLI::parse();
    match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            // 仅输出一次；日志后端此时可能尚未初始化
            eprintln!("{}", error_message(&e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
