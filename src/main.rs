use std::process::ExitCode;

use clap::Parser;
use printdirtree::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match printdirtree::app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("printdirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}
