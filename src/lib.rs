pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod interrupt;
pub mod page;

pub use error::{Error, Result};

use std::time::Duration;

use serde::Serialize;

use crate::download::Downloader;
use crate::interrupt::Interrupt;
use crate::page::PageFetcher;

pub const TIMEOUT: Duration = Duration::from_secs(5);
pub const MAX_REDIRECTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Podcast {
    pub title: String,
    pub link: String,
}

impl Podcast {
    pub fn file_name(&self) -> String {
        format!("{}.mp3", self.title)
    }
}

/// Validates `url`, fetches the show page and extracts its primary podcast.
///
/// Nothing is fetched when the URL isn't a franceculture show page.
pub fn get_podcast_from_page(
    url: &str,
    fetcher: &impl PageFetcher,
    interrupt: &Interrupt,
) -> Result<Podcast> {
    let url = page::validate_page_url(url)?;

    let body = fetcher.fetch(&url);
    if interrupt.is_set() {
        return Err(Error::Interrupted("Program"));
    }

    extract::extract_podcast(&body?)
}

pub fn download_podcast(
    podcast: &Podcast,
    downloader: &impl Downloader,
    interrupt: &Interrupt,
) -> Result<()> {
    if interrupt.is_set() {
        return Err(Error::Interrupted("Program"));
    }

    let file_name = podcast.file_name();
    println!("{file_name}");

    downloader.download(&podcast.link, &file_name, interrupt)
}
