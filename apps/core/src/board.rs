use std::time::Duration;

use serde_json::Value;

use crate::config::MenuConfig;
use crate::loader::{FetchTicket, LoadState, MenuLoader, Resolution};
use crate::sheets::SheetError;
use crate::splash::SplashGate;
use crate::tabs::{TabCommand, TabSelector};
use crate::ticker::Ticker;
use crate::view::{content_view, BoardView, TabStrip};

/// One menu page session: tab strip, menu loader, splash and ads bar.
///
/// The board never performs I/O itself. Front ends take the tickets it
/// hands out, run the fetches, and feed the results back.
#[derive(Debug)]
pub struct MenuBoard {
    config: MenuConfig,
    selector: TabSelector,
    loader: MenuLoader,
    splash: SplashGate,
    ticker: Ticker,
}

impl MenuBoard {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            selector: TabSelector::new(config.tabs.clone()),
            loader: MenuLoader::new(),
            splash: SplashGate::new(config.splash_min),
            ticker: Ticker::new(),
            config,
        }
    }

    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The fetch issued on mount, for the initially selected tab.
    pub fn mount(&mut self) -> FetchTicket {
        let tab = self.selector.active().to_string();
        self.loader.begin(&tab)
    }

    /// Starts on `name` instead of the first tab. Unknown names are ignored.
    pub fn preselect(&mut self, name: &str) -> bool {
        self.config
            .find_tab(name)
            .map(ToString::to_string)
            .is_some_and(|tab| self.selector.select_name(&tab).is_some())
    }

    /// Every accepted command starts a fresh fetch, even for the same tab.
    pub fn command(&mut self, command: TabCommand) -> Option<FetchTicket> {
        let tab = self.selector.apply(command)?.to_string();
        Some(self.loader.begin(&tab))
    }

    pub fn resolve_menu(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Value, SheetError>,
    ) -> Resolution {
        let resolution = self.loader.resolve(ticket, result);
        if self.loader.first_cycle_done() {
            self.splash.mark_load_finished();
        }
        resolution
    }

    pub fn resolve_ads(&mut self, result: Result<Value, SheetError>) {
        self.ticker.load(result, &self.config.ticker_separator);
    }

    /// Advances the clocks: splash timer and ticker scroll.
    pub fn tick(&mut self, since_mount: Duration) {
        self.splash.observe_elapsed(since_mount);
        self.ticker.tick(since_mount.as_secs_f64());
    }

    pub fn toggle_ticker(&mut self) {
        self.ticker.toggle_pause();
    }

    pub fn active_tab(&self) -> &str {
        self.selector.active()
    }

    pub const fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn splash_showing(&self) -> bool {
        self.splash.is_showing()
    }

    pub fn ticker_text(&self) -> Option<&str> {
        self.ticker.text()
    }

    pub fn ticker_window(&self, width: usize) -> Option<String> {
        self.ticker.window(width)
    }

    pub fn view(&self) -> BoardView<'_> {
        if self.splash.is_showing() {
            return BoardView::Splash {
                title: &self.config.restaurant,
                tagline: &self.config.tagline,
            };
        }

        BoardView::Menu {
            tabs: TabStrip {
                titles: self.selector.tabs(),
                selected: self.selector.index(),
            },
            content: content_view(self.loader.state(), &self.config.currency),
            ticker: self.ticker.text(),
        }
    }
}
