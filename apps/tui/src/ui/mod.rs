// UI module for the menu board
// Picks the screen for the current frame

pub mod screens;
pub mod widgets;

use crate::app::App;
use menu_core::view::{ticker_height, BoardView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::Frame;

/// Highlight for the active tab and the splash spinner.
pub const ACCENT: Color = Color::Rgb(0, 123, 255);

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    match app.board.view() {
        BoardView::Splash { title, tagline } => {
            screens::splash::render_splash(f, area, title, tagline, &mut app.throbber);
        }
        BoardView::Menu {
            tabs,
            content,
            ticker,
        } => {
            let (menu_area, ticker_area) = board_areas(area, ticker);

            screens::menu::render_menu(
                f,
                menu_area,
                &app.board.config().restaurant,
                &tabs,
                &content,
                app.row_offset,
            );

            if let Some(window) = app.board.ticker_window(usize::from(ticker_area.width)) {
                widgets::ticker::render_ticker(f, ticker_area, window);
            }

            if app.show_help {
                widgets::popup::render_help_popup(f, area);
            }
        }
    }
}

/// Menu on top, ads bar underneath.
fn board_areas(area: Rect, ticker: Option<&str>) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(ticker_height(ticker)),
        ])
        .split(area);
    (rows[0], rows[1])
}
