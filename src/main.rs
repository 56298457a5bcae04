use francekultur::cli::{self, Args};
use francekultur::config::Settings;
use francekultur::download::Wget;
use francekultur::interrupt::Interrupt;
use francekultur::page::HttpFetcher;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        if let Err(err) = Args::command().print_help() {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let args = Args::parse();
    cli::init_logger(args.verbose);
    log::info!("{args:?}");

    match run(Settings::from(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> Result<()> {
    let interrupt = Interrupt::install().context("Unable to set the Ctrl-C handler")?;

    let fetcher = HttpFetcher::new(&settings)?;
    let podcast = francekultur::get_podcast_from_page(&settings.url, &fetcher, &interrupt)?;

    if settings.dry_run {
        println!("{}", serde_json::to_string_pretty(&podcast)?);
        return Ok(());
    }

    francekultur::download_podcast(&podcast, &Wget::new(settings.downloader), &interrupt)?;

    Ok(())
}
