use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://opensheet.elk.sh";
pub const DEFAULT_SHEET_ID: &str = "1kAP9bnfqRofpeuWM-BKnYxvaIX84-v0iQsOk_BhQ0cQ";
pub const DEFAULT_ADS_SHEET: &str = "Ads";
pub const DEFAULT_TICKER_SEPARATOR: &str = "    ||    ";

/// Menu tabs in display order. Each name is also the sheet it is fetched from.
pub const DEFAULT_TABS: [&str; 10] = [
    "SOUP",
    "STARTERS",
    "RICE AND NOODLES",
    "CURRY",
    "INDIAN BREADS",
    "SALADS",
    "SNACKS",
    "SANDWICH",
    "BEVERAGES",
    "DESSERTS",
];

const DEFAULT_SPLASH_MIN_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("spreadsheet id must not be empty")]
    EmptySheetId,

    #[error("api base url must not be empty")]
    EmptyApiBase,

    #[error("at least one menu tab is required")]
    NoTabs,

    #[error("menu tab listed twice: {0}")]
    DuplicateTab(String),
}

/// Immutable settings for one menu board session.
///
/// Built once at start-up and shared read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub api_base: String,
    pub sheet_id: String,
    pub tabs: Vec<String>,
    pub ads_sheet: String,
    pub splash_min: Duration,
    pub restaurant: String,
    pub tagline: String,
    pub currency: String,
    pub ticker_separator: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            tabs: DEFAULT_TABS.iter().map(ToString::to_string).collect(),
            ads_sheet: DEFAULT_ADS_SHEET.to_string(),
            splash_min: Duration::from_millis(DEFAULT_SPLASH_MIN_MS),
            restaurant: "Meridin Hill Top".to_string(),
            tagline: "Thai Aroma".to_string(),
            currency: "₹".to_string(),
            ticker_separator: DEFAULT_TICKER_SEPARATOR.to_string(),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sheet_id.trim().is_empty() {
            return Err(ConfigError::EmptySheetId);
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }

        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.as_str()) {
                return Err(ConfigError::DuplicateTab(tab.clone()));
            }
        }

        Ok(())
    }

    /// Resolves a tab by exact name, then case-insensitively.
    pub fn find_tab(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.tabs
            .iter()
            .find(|tab| tab.as_str() == name)
            .or_else(|| self.tabs.iter().find(|tab| tab.eq_ignore_ascii_case(name)))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MenuConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tabs.len(), 10);
        assert_eq!(config.tabs[0], "SOUP");
        assert_eq!(config.splash_min, Duration::from_millis(1000));
    }

    #[test]
    fn rejects_duplicate_tabs() {
        let config = MenuConfig {
            tabs: vec!["SOUP".to_string(), "CURRY".to_string(), "SOUP".to_string()],
            ..MenuConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateTab("SOUP".to_string()))
        );
    }

    #[test]
    fn rejects_empty_sheet_id_and_tabs() {
        let blank_id = MenuConfig {
            sheet_id: "  ".to_string(),
            ..MenuConfig::default()
        };
        assert_eq!(blank_id.validate(), Err(ConfigError::EmptySheetId));

        let no_tabs = MenuConfig {
            tabs: Vec::new(),
            ..MenuConfig::default()
        };
        assert_eq!(no_tabs.validate(), Err(ConfigError::NoTabs));
    }

    #[test]
    fn find_tab_falls_back_to_case_insensitive_match() {
        let config = MenuConfig::default();
        assert_eq!(config.find_tab("CURRY"), Some("CURRY"));
        assert_eq!(config.find_tab(" rice and noodles "), Some("RICE AND NOODLES"));
        assert_eq!(config.find_tab("PIZZA"), None);
    }
}
