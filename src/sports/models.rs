use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Ordered the way the athletic year runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Fall,
    Winter,
    Spring,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Coed,
    Unspecified,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Coed => "Coed",
            Gender::Unspecified => "Unspecified",
        }
    }

    /// Men or Women
    pub fn is_specific(self) -> bool {
        matches!(self, Gender::Men | Gender::Women)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            _ => Err(AppError::config_error(format!(
                "Unknown season '{s}'. Expected Fall, Winter or Spring"
            ))),
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "coed" => Ok(Gender::Coed),
            "unspecified" => Ok(Gender::Unspecified),
            _ => Err(AppError::config_error(format!(
                "Unknown gender '{s}'. Expected Men, Women or Coed"
            ))),
        }
    }
}

/// One entry of the sports navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub name: String,
    pub season: Season,
    pub gender: Gender,
    /// Absolute link, absent for plain text entries
    pub url: Option<String>,
}
