// src/main.rs
// Calculadora - interactive calculator with a persistent operation log

use anyhow::{Context, Result};
use calculadora::config::{EnvConfig, FileConfig, Settings};
use calculadora::db::Database;
use calculadora::log_id::LocalClock;
use calculadora::ui::Terminal;
use calculadora::{CalcError, app};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit code for a wrong number of positional arguments
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "calculadora")]
#[command(about = "Four-operation calculator that keeps a history of every operation")]
#[command(version)]
struct Cli {
    /// TOML config file (default: ~/.calculadora/config.toml)
    #[arg(long, env = "CALCULADORA_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// [LOG_DIR] or [LOG_DIR OPERAND1 OPERATOR OPERAND2].
    /// Negative comma-decimal operands (`-3,5`) go after `--`.
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    args: Vec<String>,
}

fn run() -> Result<ExitCode> {
    // Load .env files (per-user first, then current directory)
    let _ = dotenvy::from_path(FileConfig::config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let settings = Settings::resolve(FileConfig::load(cli.config.as_deref()), EnvConfig::from_env())
        .context("Invalid configuration")?;

    // Quiet by default: stdout belongs to the console protocol
    let log_level = if cli.verbose { Level::DEBUG } else { settings.log_level };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mode = settings.connection_mode;
    let outcome = app::launch(&cli.args, Terminal::stdio(), LocalClock, |log_dir| {
        Database::open(&settings.database_path(log_dir), mode)
    });

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CalcError::InvalidArgumentCount(_)) => Ok(ExitCode::from(USAGE_EXIT_CODE)),
        Err(e) => Err(e).context("Calculator session failed"),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
