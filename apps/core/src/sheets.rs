use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use thiserror::Error;

use crate::config::MenuConfig;

/// Everything `encodeURIComponent` escapes.
const SHEET_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Sheet not found (HTTP {status})")]
    NotFound { status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Response body is not JSON: {0}")]
    Body(String),
}

/// Read-only access to the spreadsheet API.
///
/// Implementations return the decoded JSON body as-is. Whether that body is
/// usable rows is for the caller to decide.
#[allow(async_fn_in_trait)]
pub trait SheetSource {
    async fn fetch_sheet(&self, sheet: &str) -> Result<Value, SheetError>;
}

pub fn encode_sheet_name(sheet: &str) -> String {
    utf8_percent_encode(sheet, SHEET_SEGMENT).to_string()
}

/// `<api_base>/<sheet_id>/<encoded sheet>`.
pub fn sheet_url(config: &MenuConfig, sheet: &str) -> String {
    format!(
        "{}/{}/{}",
        config.api_base.trim_end_matches('/'),
        config.sheet_id,
        encode_sheet_name(sheet)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_sheet_name("RICE AND NOODLES"), "RICE%20AND%20NOODLES");
        assert_eq!(encode_sheet_name("A/B&C"), "A%2FB%26C");
        assert_eq!(encode_sheet_name("it's-(ok)_~.*!"), "it's-(ok)_~.*!");
        assert_eq!(encode_sheet_name("Café"), "Caf%C3%A9");
    }

    #[test]
    fn builds_url_from_config() {
        let config = MenuConfig {
            api_base: "http://localhost:9000/".to_string(),
            sheet_id: "sheet-1".to_string(),
            ..MenuConfig::default()
        };
        assert_eq!(
            sheet_url(&config, "INDIAN BREADS"),
            "http://localhost:9000/sheet-1/INDIAN%20BREADS"
        );
    }

    #[test]
    fn default_url_points_at_opensheet() {
        let url = sheet_url(&MenuConfig::default(), "Ads");
        assert_eq!(
            url,
            "https://opensheet.elk.sh/1kAP9bnfqRofpeuWM-BKnYxvaIX84-v0iQsOk_BhQ0cQ/Ads"
        );
    }
}
