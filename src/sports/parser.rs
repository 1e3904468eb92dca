//! Sports navigation parser.
//!
//! The navigation document has one container holding a block per season.
//! Each block has a header naming the season and a list of sport links
//! (or plain text spans). Link texts look like `"Soccer - Men"`, so the
//! gender is read from the text and the suffix stripped from the name.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::gender_resolver::GenderResolver;
use super::models::{Gender, Season, Sport};
use crate::constants::selectors as css;
use crate::error::AppError;

struct ParsedEntry {
    name: String,
    gender: Gender,
    url: Option<String>,
}

struct Selectors {
    nav: Selector,
    season: Selector,
    header: Selector,
    sport: Selector,
}

impl Selectors {
    fn new() -> Result<Self, AppError> {
        Ok(Self {
            nav: selector(css::SPORTS_NAV)?,
            season: selector(css::SEASON)?,
            header: selector(css::SEASON_HEADER)?,
            sport: selector(css::SPORT_LINK)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::html_parse(format!("Invalid selector '{css}': {e:?}")))
}

/// Reads the gender from display text. "women" is checked first because
/// it contains "men".
pub fn extract_gender(raw_name: &str) -> Gender {
    let lower = raw_name.to_lowercase();
    if lower.contains("women") {
        Gender::Women
    } else if lower.contains("men") {
        Gender::Men
    } else {
        Gender::Unspecified
    }
}

/// Strips a trailing `" - Men"` / `" - Women"` (any case) for a known gender.
pub fn normalize_sport_name(raw_name: &str, gender: Gender) -> String {
    if gender == Gender::Unspecified {
        return raw_name.to_string();
    }

    let suffix = format!(" - {gender}");
    let Some(split) = raw_name.len().checked_sub(suffix.len()) else {
        return raw_name.to_string();
    };
    if raw_name.is_char_boundary(split) && raw_name[split..].eq_ignore_ascii_case(&suffix) {
        raw_name[..split].trim_end().to_string()
    } else {
        raw_name.to_string()
    }
}

/// Maps a season header to a [`Season`]. Unknown labels are an error.
pub fn map_season(season_name: &str) -> Result<Season, AppError> {
    let lower = season_name.to_lowercase();
    if lower.contains("fall") {
        Ok(Season::Fall)
    } else if lower.contains("winter") {
        Ok(Season::Winter)
    } else if lower.contains("spring") {
        Ok(Season::Spring)
    } else {
        Err(AppError::html_parse(format!(
            "Unknown season name: '{season_name}'"
        )))
    }
}

/// Text of every descendant text node, each trimmed, joined without separator.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

fn season_name(block: ElementRef<'_>, selectors: &Selectors) -> Option<String> {
    let header = block.select(&selectors.header).next()?;
    let text = stripped_text(header);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

fn resolve_href(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            warn!("Ignoring unresolvable link '{href}': {e}");
            None
        }
    }
}

fn parse_entry(
    element: ElementRef<'_>,
    raw_name: &str,
    base: &Url,
    resolver: &dyn GenderResolver,
) -> ParsedEntry {
    let text_gender = extract_gender(raw_name);
    let name = normalize_sport_name(raw_name, text_gender);
    let gender = resolver.resolve(&name, text_gender);
    let url = element
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .and_then(|href| resolve_href(base, href));

    ParsedEntry { name, gender, url }
}

/// Groups by name, keeping the order in which names first appear.
fn group_by_name(entries: Vec<ParsedEntry>) -> Vec<(String, Vec<ParsedEntry>)> {
    let mut groups: Vec<(String, Vec<ParsedEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(name, _)| *name == entry.name) {
            Some((_, group)) => group.push(entry),
            None => groups.push((entry.name.clone(), vec![entry])),
        }
    }
    groups
}

fn parse_season_block(
    block: ElementRef<'_>,
    selectors: &Selectors,
    base: &Url,
    resolver: &dyn GenderResolver,
) -> Result<Vec<Sport>, AppError> {
    let Some(raw_season) = season_name(block, selectors) else {
        debug!("Skipping season block without a header");
        return Ok(Vec::new());
    };
    let season = map_season(&raw_season)?;

    let entries: Vec<ParsedEntry> = block
        .select(&selectors.sport)
        .filter_map(|element| {
            let raw_name = stripped_text(element);
            (!raw_name.is_empty()).then(|| parse_entry(element, &raw_name, base, resolver))
        })
        .collect();

    let mut sports = Vec::new();
    for (name, group) in group_by_name(entries) {
        // An unqualified entry next to gendered ones is the parent link for both
        let has_specific = group.iter().any(|e| e.gender.is_specific());
        for entry in group {
            if has_specific && entry.gender == Gender::Unspecified {
                continue;
            }
            sports.push(Sport {
                name: name.clone(),
                season,
                gender: entry.gender,
                url: entry.url,
            });
        }
    }
    Ok(sports)
}

/// Parses the sports navigation into [`Sport`] records.
///
/// Relative links are resolved against `base_url`. Fails if the navigation
/// container is missing or a season header is not recognized. Blocks with
/// no header and entries with no text are skipped.
pub fn parse_sports(
    html: &str,
    base_url: &str,
    resolver: &dyn GenderResolver,
) -> Result<Vec<Sport>, AppError> {
    let base = Url::parse(base_url)
        .map_err(|e| AppError::config_error(format!("Invalid base URL '{base_url}': {e}")))?;
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let nav = document.select(&selectors.nav).next().ok_or_else(|| {
        AppError::html_parse(format!(
            "Could not find '{}' in the provided HTML",
            css::SPORTS_NAV
        ))
    })?;

    let mut sports = Vec::new();
    for block in nav.select(&selectors.season) {
        sports.extend(parse_season_block(block, &selectors, &base, resolver)?);
    }
    debug!("Parsed {} sports", sports.len());
    Ok(sports)
}
