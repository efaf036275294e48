use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One spreadsheet row of a menu tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MenuRow {
    #[serde(rename = "Category", default, deserialize_with = "text")]
    pub category: Option<String>,

    #[serde(rename = "Item Name", default, deserialize_with = "required_text")]
    pub item_name: String,

    #[serde(rename = "Description", default, deserialize_with = "text")]
    pub description: Option<String>,

    #[serde(rename = "Price", default)]
    pub price: Option<Price>,
}

impl MenuRow {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Description with surrounding whitespace removed, or `None` when blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// A price cell. Sheets hand these back as strings, hand-built JSON often as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text.trim()),
        }
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One row of the `Ads` sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AdRow {
    #[serde(rename = "Ads", default, deserialize_with = "ad_text")]
    pub ads: Option<String>,
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a text cell, found {other}"
        ))),
    }
}

/// Like `text`, but blank strings, `false` and zero count as no ad.
fn ad_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(ad)) if ad.is_empty() => Ok(None),
        cell => {
            text(cell.unwrap_or(Value::Null)).map_err(<D::Error as serde::de::Error>::custom)
        }
    }
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_sheet_row_with_string_cells() -> Result<(), serde_json::Error> {
        let row: MenuRow = serde_json::from_value(json!({
            "Category": "Veg",
            "Item Name": "Tom Yum",
            "Description": "Hot and sour",
            "Price": "180"
        }))?;

        assert_eq!(row.category.as_deref(), Some("Veg"));
        assert_eq!(row.item_name, "Tom Yum");
        assert_eq!(row.description(), Some("Hot and sour"));
        assert_eq!(row.price, Some(Price::Text("180".to_string())));
        Ok(())
    }

    #[test]
    fn missing_columns_default() -> Result<(), serde_json::Error> {
        let row: MenuRow = serde_json::from_value(json!({ "Price": 95 }))?;

        assert_eq!(row.category, None);
        assert_eq!(row.item_name, "");
        assert_eq!(row.description(), None);
        assert_eq!(row.price.map(|price| price.to_string()), Some("95".to_string()));
        Ok(())
    }

    #[test]
    fn blank_description_is_treated_as_absent() {
        let row = MenuRow::new("Lassi").with_description("   ");
        assert_eq!(row.description(), None);
    }

    #[test]
    fn price_display_trims_text() {
        assert_eq!(Price::from(" 120 ").to_string(), "120");
        assert_eq!(Price::from(45_u32).to_string(), "45");
    }

    #[test]
    fn nested_object_cell_is_rejected() {
        let result = serde_json::from_value::<MenuRow>(json!({ "Item Name": { "x": 1 } }));
        assert!(result.is_err());
    }

    #[test]
    fn ad_row_drops_false_zero_and_blank_cells() -> Result<(), serde_json::Error> {
        let rows: Vec<AdRow> = serde_json::from_value(json!([
            { "Ads": false },
            { "Ads": 0 },
            { "Ads": 0.0 },
            { "Ads": "" },
            { "Ads": null },
            {},
            { "Ads": true },
            { "Ads": 2 }
        ]))?;

        let ads: Vec<_> = rows.iter().map(|row| row.ads.as_deref()).collect();
        assert_eq!(
            ads,
            [None, None, None, None, None, None, Some("true"), Some("2")]
        );
        Ok(())
    }

    #[test]
    fn ad_row_ignores_other_columns() -> Result<(), serde_json::Error> {
        let ad: AdRow = serde_json::from_value(json!({ "Ads": "Happy hour", "Notes": "x" }))?;
        assert_eq!(ad.ads.as_deref(), Some("Happy hour"));
        Ok(())
    }
}
