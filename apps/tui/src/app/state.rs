use menu_core::loader::Resolution;
use menu_core::tabs::TabCommand;
use menu_core::{FetchTicket, MenuBoard, MenuConfig, SheetError};
use serde_json::Value;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

const THROBBER_STEP: Duration = Duration::from_millis(120);

/// A finished fetch, sent back to the event loop by a worker task.
#[derive(Debug)]
pub enum SheetEvent {
    Menu {
        ticket: FetchTicket,
        result: Result<Value, SheetError>,
    },
    Ads(Result<Value, SheetError>),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub board: MenuBoard,
    pub started: Instant,
    pub last_throbber_step: Instant,
    pub throbber: ThrobberState,
    pub row_offset: u16,
    pub show_help: bool,
}

impl App {
    pub fn new(config: MenuConfig) -> Self {
        let now = Instant::now();
        Self {
            running: true,
            board: MenuBoard::new(config),
            started: now,
            last_throbber_step: now,
            throbber: ThrobberState::default(),
            row_offset: 0,
            show_help: false,
        }
    }

    /// Opens on `tab` when it names a known tab.
    pub fn preselect(&mut self, tab: &str) {
        if !self.board.preselect(tab) {
            info!(tab, "unknown start tab, opening the first tab");
        }
    }

    pub fn mount(&mut self) -> FetchTicket {
        self.started = Instant::now();
        self.board.mount()
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.board.tick(now.duration_since(self.started));

        if now.duration_since(self.last_throbber_step) >= THROBBER_STEP {
            self.throbber.calc_next();
            self.last_throbber_step = now;
        }
    }

    pub fn select(&mut self, command: TabCommand) -> Option<FetchTicket> {
        let ticket = self.board.command(command)?;
        self.row_offset = 0;
        debug!(tab = ticket.tab(), seq = ticket.seq(), "tab selected");
        Some(ticket)
    }

    pub fn apply(&mut self, event: SheetEvent) {
        match event {
            SheetEvent::Menu { ticket, result } => {
                if self.board.resolve_menu(&ticket, result) == Resolution::Stale {
                    debug!(tab = ticket.tab(), "ignored superseded menu result");
                }
            }
            SheetEvent::Ads(result) => self.board.resolve_ads(result),
        }
    }

    pub fn scroll_down(&mut self) {
        self.row_offset = (self.row_offset + 1).min(2000);
    }

    pub fn scroll_up(&mut self) {
        self.row_offset = self.row_offset.saturating_sub(1);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::LoadState;
    use serde_json::json;

    #[test]
    fn select_resets_scroll() {
        let mut app = App::new(MenuConfig::default());
        app.mount();
        app.row_offset = 7;

        let ticket = app.select(TabCommand::Next);

        assert_eq!(ticket.map(|t| t.tab().to_string()).as_deref(), Some("STARTERS"));
        assert_eq!(app.row_offset, 0);
    }

    #[test]
    fn superseded_menu_event_is_dropped() {
        let mut app = App::new(MenuConfig::default());
        let soup = app.mount();
        let Some(curry) = app.select(TabCommand::Index(3)) else {
            panic!("CURRY is the fourth tab");
        };

        app.apply(SheetEvent::Menu {
            ticket: curry,
            result: Ok(json!([{ "Item Name": "Green Curry" }])),
        });
        app.apply(SheetEvent::Menu {
            ticket: soup,
            result: Ok(json!([{ "Item Name": "Tom Yum" }])),
        });

        let LoadState::Ready(rows) = app.board.load_state() else {
            panic!("menu should be ready");
        };
        assert_eq!(rows[0].item_name, "Green Curry");
    }

    #[test]
    fn scroll_is_bounded() {
        let mut app = App::new(MenuConfig::default());
        app.scroll_up();
        assert_eq!(app.row_offset, 0);
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.row_offset, 2);
    }
}
