use serde::Serialize;

use crate::domain::MenuRow;
use crate::grouping::{group, Bucket};
use crate::loader::LoadState;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// `None` for the uncategorized section.
    pub heading: Option<String>,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Error(String),
    Loading,
    Sections(Vec<SectionView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip<'a> {
    pub titles: &'a [String],
    pub selected: usize,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView<'a> {
    Splash {
        title: &'a str,
        tagline: &'a str,
    },
    Menu {
        tabs: TabStrip<'a>,
        content: ContentView,
        ticker: Option<&'a str>,
    },
}

/// `₹120`. An empty price still carries the currency symbol.
pub fn price_label(currency: &str, row: &MenuRow) -> String {
    row.price
        .as_ref()
        .map_or_else(|| currency.to_string(), |price| format!("{currency}{price}"))
}

pub fn item_view(currency: &str, row: &MenuRow) -> ItemView {
    ItemView {
        name: row.item_name.clone(),
        description: row.description().map(ToString::to_string),
        price: price_label(currency, row),
    }
}

pub fn sections(rows: &[MenuRow], currency: &str) -> Vec<SectionView> {
    group(rows)
        .into_iter()
        .map(|(bucket, items)| SectionView {
            heading: match bucket {
                Bucket::Named(name) => Some(name),
                Bucket::Uncategorized => None,
            },
            items: items.iter().map(|row| item_view(currency, row)).collect(),
        })
        .collect()
}

/// Blank columns between a left and a right label on a `width`-wide row.
/// Always at least one so the labels never touch.
pub fn gap_between(left: &str, right: &str, width: usize) -> usize {
    width
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(1)
}

/// Rows for the ads bar. It disappears entirely when there is nothing to show.
pub const fn ticker_height(ticker: Option<&str>) -> u16 {
    match ticker {
        Some(_) => 1,
        None => 0,
    }
}

/// Error wins over loading, loading over the list.
pub fn content_view(state: &LoadState, currency: &str) -> ContentView {
    match state {
        LoadState::Error(message) => ContentView::Error(message.clone()),
        LoadState::Idle | LoadState::Loading => ContentView::Loading,
        LoadState::Ready(rows) => ContentView::Sections(sections(rows, currency)),
    }
}
