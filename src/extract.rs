use crate::{Error, Podcast, Result};

use scraper::{ElementRef, Html, Selector};

pub const MAX_TITLE_LEN: usize = 255;

const PLAYER_ZONE: &str = ".heading-zone-player-button";
const REPLAY_BUTTON: &str = "button.replay-button";
const ASSET_SOURCE: &str = "data-asset-source";
const TITLE_LINK: &str = "data-title-link";

/// An mp3 link split as `https://{path}/{technical_name}.mp3`.
#[derive(Debug, PartialEq, Eq)]
pub struct Mp3Link<'a> {
    pub path: &'a str,
    pub technical_name: &'a str,
}

pub fn extract_podcast(html: &str) -> Result<Podcast> {
    let document = Html::parse_document(html);

    match page_title(&document)? {
        Some(title) => log::info!("Parsing page: {title}"),
        None => log::warn!("Page has no title, this might indicate further problems"),
    }

    let button = find_replay_button(&document)?;
    let element = button.value();

    if element.attr("disabled").is_some() {
        return Err(Error::NotPlayable);
    }

    let link = element
        .attr(ASSET_SOURCE)
        .ok_or(Error::MissingAttribute(ASSET_SOURCE))?;
    let mp3 = parse_mp3_link(link).ok_or_else(|| Error::InvalidMp3Link(link.to_string()))?;

    let title_link = element
        .attr(TITLE_LINK)
        .ok_or(Error::MissingAttribute(TITLE_LINK))?;
    let title = podcast_title(title_link, mp3.technical_name);

    log::info!("Found primary podcast link: {link} for {title}");

    Ok(Podcast {
        title,
        link: link.to_string(),
    })
}

pub fn parse_mp3_link(link: &str) -> Option<Mp3Link<'_>> {
    let (path, technical_name) = link
        .strip_prefix("https://")?
        .strip_suffix(".mp3")?
        .rsplit_once('/')?;

    if path.is_empty() || technical_name.is_empty() {
        return None;
    }

    Some(Mp3Link {
        path,
        technical_name,
    })
}

/// Last segment of the title link, or the technical name when that segment
/// is empty or longer than [`MAX_TITLE_LEN`] characters.
pub fn podcast_title(title_link: &str, technical_name: &str) -> String {
    let title = title_link.rsplit('/').next().unwrap_or_default();

    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        log::debug!("Unusable title `{title}`, falling back to `{technical_name}`");
        technical_name.to_string()
    } else {
        title.to_string()
    }
}

fn find_replay_button(document: &Html) -> Result<ElementRef<'_>> {
    let zone = selector(PLAYER_ZONE)?;
    let button = selector(REPLAY_BUTTON)?;

    document
        .select(&zone)
        .next()
        .and_then(|zone| zone.select(&button).next())
        .ok_or(Error::PodcastNotFound)
}

fn page_title(document: &Html) -> Result<Option<String>> {
    let title = selector("title")?;

    Ok(document
        .select(&title)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty()))
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(css))
}
