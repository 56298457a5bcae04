use clap::Parser;
use log::LevelFilter;

/// Utility to download France Culture podcasts
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Define console verbosity, up to -vvv
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the podcast found on the page as JSON instead of downloading it
    #[clap(long)]
    pub dry_run: bool,

    /// wget-compatible program used to download the podcast
    #[clap(long, default_value = crate::download::DEFAULT_PROGRAM)]
    pub downloader: String,

    /// URL of the page where the podcast can be streamed
    pub url: String,
}

pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Console logger at the verbosity level, refined by `RUST_LOG` when set.
pub fn init_logger(verbose: u8) {
    pretty_env_logger::formatted_builder()
        .filter(None, level_filter(verbose))
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_default())
        .init();
}
