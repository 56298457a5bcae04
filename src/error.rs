use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Well, `{0}` is not a valid HTTPS franceculture URL...")]
    InvalidPageUrl(String),

    #[error("Http error: {0}")]
    HttpStatus(reqwest::Error),

    #[error("Error connecting: {0}")]
    Connect(reqwest::Error),

    #[error("Timeout error: {0}")]
    Timeout(reqwest::Error),

    #[error("Exception when fetching page content: {0}")]
    Request(reqwest::Error),

    #[error("Invalid selector `{0}`")]
    Selector(&'static str),

    #[error("Could not find primary podcast")]
    PodcastNotFound,

    #[error("This podcast is not playable on the site")]
    NotPlayable,

    #[error("Could not find attribute `{0}` on the replay button")]
    MissingAttribute(&'static str),

    #[error("Could not validate mp3 link `{0}`")]
    InvalidMp3Link(String),

    #[error("Could not find `{0}`, please install it")]
    ToolNotFound(String),

    #[error("Some unknown issue occurred with `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` terminated with {status}")]
    ToolFailed { program: String, status: ExitStatus },

    #[error("{0} was interrupted by user")]
    Interrupted(&'static str),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            Error::HttpStatus(err)
        } else if err.is_timeout() {
            Error::Timeout(err)
        } else if err.is_connect() {
            Error::Connect(err)
        } else {
            Error::Request(err)
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
