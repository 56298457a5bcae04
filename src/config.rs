use crate::cli::Args;
use crate::{MAX_REDIRECTS, TIMEOUT};

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub downloader: String,
    pub dry_run: bool,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            url: args.url,
            downloader: args.downloader,
            dry_run: args.dry_run,
            timeout: TIMEOUT,
            max_redirects: MAX_REDIRECTS,
        }
    }
}
