use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use menu_core::loader::fetch_menu;
use menu_core::view::{content_view, ContentView, SectionView};
use menu_core::FetchTicket;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::app::{handle_input, App, SheetEvent};
use crate::sheets::HttpSheets;
use crate::ui;

/// Fetches run on worker tasks and report back here; only the event loop
/// writes to `App`.
struct Fetcher {
    sheets: Arc<HttpSheets>,
    tx: UnboundedSender<SheetEvent>,
}

impl Fetcher {
    fn new(sheets: HttpSheets) -> (Self, UnboundedReceiver<SheetEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                sheets: Arc::new(sheets),
                tx,
            },
            rx,
        )
    }

    fn menu(&self, ticket: FetchTicket) {
        let sheets = Arc::clone(&self.sheets);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = sheets.get(ticket.tab()).await;
            if tx.send(SheetEvent::Menu { ticket, result }).is_err() {
                warn!("menu result arrived after shutdown");
            }
        });
    }

    fn ads(&self, sheet: String) {
        let sheets = Arc::clone(&self.sheets);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = sheets.get(&sheet).await;
            if tx.send(SheetEvent::Ads(result)).is_err() {
                warn!("ads result arrived after shutdown");
            }
        });
    }
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    sheets: HttpSheets,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let (fetcher, mut rx) = Fetcher::new(sheets);
    fetcher.menu(app.mount());
    fetcher.ads(app.board.config().ads_sheet.clone());

    loop {
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(ticket) = handle_input(app, key.code) {
                        fetcher.menu(ticket);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    info!("menu board closed");
    Ok(())
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, sheets: HttpSheets, json: bool) -> Result<()> {
    let ticket = app.mount();
    let (menu, ads) = tokio::join!(
        fetch_menu(&sheets, &ticket),
        sheets.get(&app.board.config().ads_sheet)
    );
    app.apply(SheetEvent::Menu {
        ticket,
        result: menu,
    });
    app.apply(SheetEvent::Ads(ads));

    let report = build_headless_menu(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_text(&report));
    }

    Ok(())
}

fn build_headless_menu(app: &App) -> HeadlessMenu {
    let board = &app.board;
    let (error, sections) = match content_view(board.load_state(), &board.config().currency) {
        ContentView::Error(message) => (Some(message), Vec::new()),
        ContentView::Loading => (None, Vec::new()),
        ContentView::Sections(sections) => (None, sections),
    };

    HeadlessMenu {
        restaurant: board.config().restaurant.clone(),
        tab: board.active_tab().to_string(),
        error,
        sections,
        ticker: board.ticker_text().map(ToString::to_string),
    }
}

fn render_headless_text(report: &HeadlessMenu) -> String {
    let mut out = format!("\n{}\n", report.restaurant);
    out.push_str(&"=".repeat(report.restaurant.chars().count()));
    out.push_str(&format!("\n[{}]\n", report.tab));

    if let Some(error) = &report.error {
        out.push_str(&format!("\n{error}\n"));
    }

    for section in &report.sections {
        out.push('\n');
        if let Some(heading) = &section.heading {
            out.push_str(&format!("{heading}\n"));
        }
        for item in &section.items {
            out.push_str(&format!("- {} | {}\n", item.name, item.price));
            if let Some(description) = &item.description {
                out.push_str(&format!("  {description}\n"));
            }
        }
    }

    if let Some(ticker) = &report.ticker {
        out.push_str(&format!("\n{ticker}\n"));
    }

    out
}

#[derive(serde::Serialize)]
struct HeadlessMenu {
    restaurant: String,
    tab: String,
    error: Option<String>,
    sections: Vec<SectionView>,
    ticker: Option<String>,
}
