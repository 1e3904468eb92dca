use std::collections::HashMap;

use super::models::Gender;

pub trait GenderResolver: Send + Sync {
    /// A gender found in the display text always wins. Only `Unspecified`
    /// is replaced, and only when the sport has a known default.
    fn resolve(&self, sport_name: &str, text_gender: Gender) -> Gender;
}

/// Resolver seeded with the sports that are single-gender or coed by default.
#[derive(Debug, Clone)]
pub struct DefaultGenderResolver {
    defaults: HashMap<String, Gender>,
}

impl Default for DefaultGenderResolver {
    fn default() -> Self {
        let defaults = [
            ("softball", Gender::Women),
            ("baseball", Gender::Men),
            ("field hockey", Gender::Women),
            ("rowing", Gender::Women),
            ("bowling", Gender::Women),
            ("beach volleyball", Gender::Women),
            ("rifle", Gender::Coed),
            ("skiing", Gender::Coed),
            ("football", Gender::Men),
            ("fencing", Gender::Coed),
        ]
        .into_iter()
        .map(|(name, gender)| (name.to_string(), gender))
        .collect();

        Self { defaults }
    }
}

impl DefaultGenderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the default for one sport on this instance only.
    pub fn register_default(&mut self, sport_name: &str, gender: Gender) {
        self.defaults.insert(normalize_key(sport_name), gender);
    }
}

fn normalize_key(sport_name: &str) -> String {
    sport_name.trim().to_lowercase()
}

impl GenderResolver for DefaultGenderResolver {
    fn resolve(&self, sport_name: &str, text_gender: Gender) -> Gender {
        if text_gender != Gender::Unspecified {
            return text_gender;
        }
        self.defaults
            .get(&normalize_key(sport_name))
            .copied()
            .unwrap_or(text_gender)
    }
}
