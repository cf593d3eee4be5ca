mod args;
mod commands;
mod config;
mod diagnostics;
mod global;
mod handlers;

use args::Commands;
use clap::Parser;
use diagnostics::Reporter;
use global::GlobalArgs;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "base-pack")]
#[command(version)]
#[command(about = "Bit-packing base32 and URL-safe base64 encoder with short GUID and int64 forms", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.global.no_color, cli.global.quiet);

    match dispatch(cli.command, &cli.global, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(e.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: Commands,
    global: &GlobalArgs,
    reporter: &Reporter,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Encode(args) => {
            let config = config::load_registry(global, reporter)?;
            handlers::encode::handle(args, global, &config, reporter)
        }
        Commands::Decode(args) => {
            let config = config::load_registry(global, reporter)?;
            handlers::decode::handle(args, global, &config, reporter)
        }
        Commands::Guid { action } => handlers::guid::handle(action),
        Commands::Int64 { action } => handlers::int64::handle(action),
        Commands::Config { action } => {
            let config = config::load_registry(global, reporter)?;
            handlers::config::handle(action, &config)
        }
    }
}
