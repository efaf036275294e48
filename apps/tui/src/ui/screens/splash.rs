use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

use crate::ui::widgets::popup::centered_rect;
use crate::ui::ACCENT;

pub fn render_splash(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    tagline: &str,
    throbber: &mut ThrobberState,
) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let center = centered_rect(60, 40, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tagline
            Constraint::Length(1),
            Constraint::Length(1), // Spinner
            Constraint::Min(0),
        ])
        .split(center);

    let title = Paragraph::new(title.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, rows[1]);

    let tagline = Paragraph::new(tagline.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    f.render_widget(tagline, rows[2]);

    let spinner_area = Rect {
        x: rows[4].x + rows[4].width / 2,
        width: rows[4].width.min(1),
        ..rows[4]
    };
    let spinner = Throbber::default()
        .throbber_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);
    f.render_stateful_widget(spinner, spinner_area, throbber);
}
