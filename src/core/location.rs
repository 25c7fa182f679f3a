// src/core/location.rs
use crate::config::LocationConfig;
use std::collections::BTreeMap;

pub const REMOTE: &str = "Remote";
pub const WORLDWIDE: &str = "Worldwide";

/// Countries and regions accepted out of the box, in addition to the sentinels.
pub const ACCEPTED_LOCATIONS: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Bulgaria", "Canada", "Chile",
    "China", "Colombia", "Croatia", "Czech Republic", "Denmark", "Egypt", "Estonia", "Finland",
    "France", "Germany", "Greece", "Hong Kong", "Hungary", "India", "Indonesia", "Ireland",
    "Israel", "Italy", "Japan", "Kenya", "Latvia", "Lithuania", "Luxembourg", "Malaysia",
    "Mexico", "Morocco", "Netherlands", "New Zealand", "Nigeria", "Norway", "Pakistan", "Peru",
    "Philippines", "Poland", "Portugal", "Romania", "Saudi Arabia", "Serbia", "Singapore",
    "Slovakia", "Slovenia", "South Africa", "South Korea", "Spain", "Sweden", "Switzerland",
    "Taiwan", "Thailand", "Turkey", "Ukraine", "United Arab Emirates", "United Kingdom",
    "United States", "USA", "UK", "Uruguay", "Vietnam", "Africa", "Asia", "APAC", "Europe",
    "EMEA", "European Union", "Latin America", "LATAM", "Middle East", "North America",
    "Oceania", "South America",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationCheck {
    Accepted(String),
    /// Carries the caller's input exactly as supplied.
    Rejected(String),
}

impl LocationCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LocationCheck::Accepted(_))
    }

    pub fn location(&self) -> &str {
        match self {
            LocationCheck::Accepted(l) | LocationCheck::Rejected(l) => l,
        }
    }
}

/// Checks a location against a fixed, case-insensitive accepted set.
#[derive(Debug, Clone)]
pub struct LocationValidator {
    /// lowercase key -> display form
    accepted: BTreeMap<String, String>,
}

impl LocationValidator {
    pub fn new(config: &LocationConfig) -> Self {
        let mut accepted = BTreeMap::new();
        for sentinel in [REMOTE, WORLDWIDE] {
            accepted.insert(sentinel.to_lowercase(), sentinel.to_string());
        }

        if !config.sentinels_only {
            let extra = config.extra.iter().map(String::as_str);
            for location in ACCEPTED_LOCATIONS.iter().copied().chain(extra) {
                let location = location.trim();
                if !location.is_empty() {
                    accepted.insert(location.to_lowercase(), location.to_string());
                }
            }
        }

        Self { accepted }
    }

    pub fn validate(&self, location: &str) -> LocationCheck {
        let key = location.trim().to_lowercase();
        match self.accepted.get(&key) {
            Some(_) if key == "remote" => LocationCheck::Accepted(REMOTE.to_string()),
            Some(_) if key == "worldwide" => LocationCheck::Accepted(WORLDWIDE.to_string()),
            Some(_) => LocationCheck::Accepted(location.trim().to_string()),
            None => LocationCheck::Rejected(location.to_string()),
        }
    }

    /// Accepted locations in display form, sorted.
    pub fn valid_locations(&self) -> Vec<String> {
        let mut all: Vec<String> = self.accepted.values().cloned().collect();
        all.sort();
        all
    }
}

impl Default for LocationValidator {
    fn default() -> Self {
        Self::new(&LocationConfig::default())
    }
}
