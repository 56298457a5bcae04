use crate::config::Settings;
use crate::{Error, Result};

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use url::Url;

const SHOW_PREFIX: &str = "https://www.franceculture.fr/emissions/";

pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .redirect(Policy::limited(settings.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        log::debug!("Fetching {url}");
        let body = self
            .client
            .get(url.clone())
            .send()?
            .error_for_status()?
            .text()?;

        Ok(body)
    }
}

/// Only show pages under `https://www.franceculture.fr/emissions/` are accepted.
pub fn validate_page_url(url: &str) -> Result<Url> {
    match url.strip_prefix(SHOW_PREFIX) {
        Some(rest) if !rest.is_empty() => {
            Url::parse(url).map_err(|_| Error::InvalidPageUrl(url.to_string()))
        }
        _ => Err(Error::InvalidPageUrl(url.to_string())),
    }
}
