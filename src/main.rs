use std::process::ExitCode;

use clap::Parser;
use strict_semver::cli::{self, Command};
use strict_semver::{config, logging};

#[derive(Parser)]
#[command(name = "strict-semver")]
#[command(version, about = "Parse, validate and compare Semantic Versioning 2.0.0 versions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&config::log_filter())?;

    let mut stdout = std::io::stdout().lock();
    let succeeded = cli::execute(&cli.command, &mut stdout)?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
