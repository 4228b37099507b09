// src/main.rs
use clap::Parser;
use exdemo::{CatchPolicy, Console, Demo, Exception, RunConfig, demos};
use std::io::{self, Write};
use std::process::ExitCode;

/// Walk through raise/catch behavior, printing what a script would print.
#[derive(Parser, Debug)]
#[command(name = "exdemo", version)]
struct Cli {
    /// Which demo to run
    #[arg(value_enum)]
    demo: Demo,

    /// What handlers do after logging the caught value
    #[arg(long, value_enum)]
    policy: Option<CatchPolicy>,

    /// Shorthand for `--policy swallow`
    #[arg(long, conflicts_with = "policy")]
    swallow: bool,

    /// Pass a real `{x, y}` record to the propagation demo
    #[arg(long)]
    valid_data: bool,

    /// Numerator for the division demo
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    dividend: f64,

    /// Denominator for the division demo
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    divisor: f64,

    /// Diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> RunConfig {
        let policy = if self.swallow {
            Some(CatchPolicy::from_swallow_flag(true))
        } else {
            self.policy
        };
        RunConfig {
            policy,
            valid_data: self.valid_data,
            dividend: self.dividend,
            divisor: self.divisor,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut console = Console::stdout();
    match demos::run(cli.demo, &cli.config(), &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error @ Exception::Thrown(_)) => {
            // stderr may be gone too; the exit status still reports the failure
            let _ = writeln!(io::stderr(), "{}", error);
            ExitCode::FAILURE
        }
        Err(error @ Exception::Io(_)) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
