use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Bottom ads bar. `window` is already cut to the bar's width.
pub fn render_ticker(f: &mut Frame<'_>, area: Rect, window: String) {
    let paragraph =
        Paragraph::new(window).style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(paragraph, area);
}
