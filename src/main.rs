use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use counter_store::{open_log_appender, OutputFormat, Session, SessionError};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Headless counter screen: every OP is one button tap.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Taps to apply in order (increment|inc|+, decrement|dec|-, reset|0).
    /// Read one per line from stdin when omitted.
    #[arg(value_name = "OP")]
    ops: Vec<String>,

    /// Print each update as a JSON line instead of plain text.
    #[arg(long)]
    json: bool,

    /// Directory for the rolling trace log.
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("counterctl: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SessionError> {
    let _guard = init_tracing(&args.log_dir)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = io::stdout();
    let mut session = Session::start(stdout.lock(), format)?;

    let result = if args.ops.is_empty() {
        session.run_lines(io::stdin().lock())
    } else {
        session.run_ops(&args.ops)
    };

    match &result {
        Ok(()) => tracing::info!(value = session.current_value(), "Session finished"),
        Err(e) => tracing::error!(error = %e, "Session aborted"),
    }
    result
}

fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, SessionError> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = open_log_appender(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
