use menu_core::view::ticker_height;
use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the page into the menu and the ads bar below it. Without ads
/// text the bar has no rows and the menu keeps the whole page.
pub fn board_areas(area: Rect, ticker: Option<&str>) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(ticker_height(ticker)),
        ])
        .split(area);
    (rows[0], rows[1])
}
