pub mod args;
pub mod run;

pub use args::{BenfordCLI, CheckArgs, ExpectedArgs, InitArgs};
pub use run::{RunOutcome, error_message, init_logging, run};
