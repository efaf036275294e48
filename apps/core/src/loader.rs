use std::fmt;

use log::{debug, error};
use serde_json::Value;

use crate::domain::MenuRow;
use crate::sheets::{SheetError, SheetSource};

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format from sheet";

pub fn load_error_message(tab: &str) -> String {
    format!("Error loading data for \"{tab}\"")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<MenuRow>),
    Error(String),
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Ready(rows) => write!(f, "Ready({} rows)", rows.len()),
            Self::Error(message) => write!(f, "Error({message})"),
        }
    }
}

/// Identifies one fetch cycle. Only the latest ticket is allowed to land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    tab: String,
}

impl FetchTicket {
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Fetch lifecycle for the active tab.
#[derive(Debug, Default)]
pub struct MenuLoader {
    seq: u64,
    active_tab: String,
    state: LoadState,
    first_cycle_done: bool,
}

impl MenuLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle for `tab`. Previous rows and errors are dropped
    /// straight away, so nothing from the old tab stays on screen.
    pub fn begin(&mut self, tab: &str) -> FetchTicket {
        self.seq += 1;
        self.active_tab = tab.to_string();
        self.state = LoadState::Loading;
        debug!("menu fetch #{} started for {tab:?}", self.seq);

        FetchTicket {
            seq: self.seq,
            tab: self.active_tab.clone(),
        }
    }

    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Value, SheetError>,
    ) -> Resolution {
        if ticket.seq != self.seq {
            debug!(
                "dropping menu fetch #{} for {:?}; #{} for {:?} is current",
                ticket.seq, ticket.tab, self.seq, self.active_tab
            );
            return Resolution::Stale;
        }

        self.state = classify(&ticket.tab, result);
        self.first_cycle_done = true;
        debug!("menu fetch #{} finished: {}", ticket.seq, self.state);
        Resolution::Applied
    }

    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn rows(&self) -> &[MenuRow] {
        match &self.state {
            LoadState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// True once any authoritative cycle has finished, success or not.
    pub const fn first_cycle_done(&self) -> bool {
        self.first_cycle_done
    }
}

/// Turns a gateway result into the state shown for `tab`.
pub fn classify(tab: &str, result: Result<Value, SheetError>) -> LoadState {
    match result {
        Ok(value @ Value::Array(_)) => match serde_json::from_value::<Vec<MenuRow>>(value) {
            Ok(rows) => LoadState::Ready(rows),
            Err(err) => {
                error!("rows for {tab:?} are not menu items: {err}");
                LoadState::Error(INVALID_FORMAT_MESSAGE.to_string())
            }
        },
        Ok(other) => {
            error!("sheet {tab:?} returned {} instead of an array", kind(&other));
            LoadState::Error(INVALID_FORMAT_MESSAGE.to_string())
        }
        Err(err) => {
            error!("Fetch error for {tab:?}: {err}");
            LoadState::Error(load_error_message(tab))
        }
    }
}

/// Runs one fetch cycle against `source` and hands back the raw result.
pub async fn fetch_menu<S: SheetSource>(
    source: &S,
    ticket: &FetchTicket,
) -> Result<Value, SheetError> {
    source.fetch_sheet(ticket.tab()).await
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn menu_json() -> Value {
        json!([
            { "Category": "Veg", "Item Name": "Tom Yum", "Price": "180" },
            { "Item Name": "Papad", "Price": "30" }
        ])
    }

    #[test]
    fn begin_clears_previous_state() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin("SOUP");
        loader.resolve(&ticket, Ok(menu_json()));
        assert_eq!(loader.rows().len(), 2);

        loader.begin("CURRY");
        assert!(loader.is_loading());
        assert!(loader.rows().is_empty());
        assert_eq!(loader.error(), None);
        assert_eq!(loader.active_tab(), "CURRY");
    }

    #[test]
    fn array_resolves_to_ready() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin("SOUP");

        assert_eq!(loader.resolve(&ticket, Ok(menu_json())), Resolution::Applied);
        assert!(!loader.is_loading());
        assert_eq!(loader.rows()[0].item_name, "Tom Yum");
        assert!(loader.first_cycle_done());
    }

    #[test]
    fn non_array_is_invalid_format() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin("SOUP");

        loader.resolve(&ticket, Ok(json!({ "error": "nope" })));

        assert_eq!(loader.error(), Some("Invalid data format from sheet"));
        assert!(loader.rows().is_empty());
        assert!(!loader.is_loading());
    }

    #[test]
    fn array_of_scalars_is_invalid_format() {
        let state = classify("SOUP", Ok(json!([1, 2, 3])));
        assert_eq!(state, LoadState::Error(INVALID_FORMAT_MESSAGE.to_string()));
    }

    #[test]
    fn http_failure_names_the_tab() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin("CURRY");

        loader.resolve(&ticket, Err(SheetError::NotFound { status: 404 }));

        assert_eq!(loader.error(), Some("Error loading data for \"CURRY\""));
        assert!(loader.first_cycle_done());
    }

    #[test]
    fn transport_detail_is_not_shown() {
        let state = classify(
            "SNACKS",
            Err(SheetError::Transport("connection reset by peer".to_string())),
        );
        assert_eq!(
            state,
            LoadState::Error("Error loading data for \"SNACKS\"".to_string())
        );
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut loader = MenuLoader::new();
        let soup = loader.begin("SOUP");
        let curry = loader.begin("CURRY");

        assert_eq!(
            loader.resolve(&curry, Ok(json!([{ "Item Name": "Green Curry" }]))),
            Resolution::Applied
        );
        assert_eq!(
            loader.resolve(&soup, Ok(json!([{ "Item Name": "Tom Yum" }]))),
            Resolution::Stale
        );

        assert_eq!(loader.active_tab(), "CURRY");
        assert_eq!(loader.rows().len(), 1);
        assert_eq!(loader.rows()[0].item_name, "Green Curry");
    }

    #[test]
    fn stale_result_does_not_end_loading() {
        let mut loader = MenuLoader::new();
        let soup = loader.begin("SOUP");
        let _curry = loader.begin("CURRY");

        assert_eq!(loader.resolve(&soup, Ok(menu_json())), Resolution::Stale);
        assert!(loader.is_loading());
        assert!(!loader.first_cycle_done());
    }

    #[test]
    fn reselecting_same_tab_issues_new_ticket() {
        let mut loader = MenuLoader::new();
        let first = loader.begin("SOUP");
        loader.resolve(&first, Ok(menu_json()));

        let second = loader.begin("SOUP");
        assert_ne!(first.seq(), second.seq());
        assert!(loader.rows().is_empty());

        loader.resolve(&second, Ok(menu_json()));
        assert_eq!(loader.rows().len(), 2);
    }
}
