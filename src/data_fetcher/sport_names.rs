//! Vocabulary used to address the casablanca endpoints.

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Division {
    #[default]
    #[value(name = "d1")]
    D1,
    #[value(name = "d2")]
    D2,
    #[value(name = "d3")]
    D3,
}

impl Division {
    pub fn as_str(self) -> &'static str {
        match self {
            Division::D1 => "d1",
            Division::D2 => "d2",
            Division::D3 => "d3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SportName {
    Basketball,
    Football,
    Soccer,
    Baseball,
    Softball,
    Volleyball,
}

impl SportName {
    pub fn as_str(self) -> &'static str {
        match self {
            SportName::Basketball => "basketball",
            SportName::Football => "football",
            SportName::Soccer => "soccer",
            SportName::Baseball => "baseball",
            SportName::Softball => "softball",
            SportName::Volleyball => "volleyball",
        }
    }
}

/// Gender segment of a sport slug (`basketball-men`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum GenderLabel {
    Men,
    Women,
}

impl GenderLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            GenderLabel::Men => "men",
            GenderLabel::Women => "women",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Division, SportName, GenderLabel);

/// `"{base}-{gender}"`, e.g. `basketball-women`
pub fn build_sport_name(base: &str, gender: &str) -> String {
    format!("{base}-{gender}")
}

pub fn basketball(gender: &str) -> String {
    build_sport_name(SportName::Basketball.as_str(), gender)
}

pub fn soccer(gender: &str) -> String {
    build_sport_name(SportName::Soccer.as_str(), gender)
}

/// Football has no gendered slug.
pub fn football() -> String {
    SportName::Football.as_str().to_string()
}

pub fn build(sport: &str, gender: Option<&str>) -> String {
    match gender {
        Some(gender) if !gender.is_empty() => build_sport_name(sport, gender),
        _ => sport.to_string(),
    }
}
