use menu_core::view::{gap_between, ContentView, ItemView, SectionView, TabStrip, LOADING_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::ui::ACCENT;

pub fn render_menu(
    f: &mut Frame<'_>,
    area: Rect,
    restaurant: &str,
    tabs: &TabStrip<'_>,
    content: &ContentView,
    row_offset: u16,
) {
    let block = Block::default()
        .title(format!(" {restaurant} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Rule
            Constraint::Min(0),    // Menu
        ])
        .split(inner);

    render_tab_strip(f, chunks[0], tabs);
    f.render_widget(
        Paragraph::new("─".repeat(usize::from(chunks[1].width)))
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    match content {
        ContentView::Error(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, chunks[2]);
        }
        ContentView::Loading => {
            let paragraph = Paragraph::new(format!("\n{LOADING_TEXT}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, chunks[2]);
        }
        ContentView::Sections(sections) => {
            let lines = menu_lines(sections, usize::from(chunks[2].width));
            f.render_widget(
                Paragraph::new(Text::from(lines)).scroll((row_offset, 0)),
                chunks[2],
            );
        }
    }
}

fn render_tab_strip(f: &mut Frame<'_>, area: Rect, tabs: &TabStrip<'_>) {
    let titles = tabs
        .titles
        .iter()
        .map(|title| TextLine::from(title.as_str()))
        .collect::<Vec<_>>();

    let strip = Tabs::new(titles)
        .select(tabs.selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(strip, area);
}

fn menu_lines(sections: &[SectionView], width: usize) -> Vec<TextLine<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for section in sections {
        lines.push(TextLine::default());
        if let Some(heading) = &section.heading {
            lines.push(TextLine::from(Span::styled(
                heading.clone(),
                bold.fg(Color::Yellow),
            )));
            lines.push(TextLine::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.extend(section.items.iter().flat_map(|item| item_lines(item, width, bold)));
    }

    lines
}

fn item_lines(item: &ItemView, width: usize, bold: Style) -> Vec<TextLine<'static>> {
    let gap = gap_between(&item.name, &item.price, width);
    let mut lines = vec![TextLine::from(vec![
        Span::styled(item.name.clone(), bold),
        Span::raw(" ".repeat(gap)),
        Span::styled(item.price.clone(), bold),
    ])];

    if let Some(description) = &item.description {
        lines.push(TextLine::from(Span::styled(
            description.clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, description: Option<&str>) -> ItemView {
        ItemView {
            name: name.to_string(),
            description: description.map(ToString::to_string),
            price: price.to_string(),
        }
    }

    #[test]
    fn headed_section_gets_rule_and_right_aligned_price() {
        let sections = vec![SectionView {
            heading: Some("Veg".to_string()),
            items: vec![item("Tom Yum", "₹180", Some("Hot and sour"))],
        }];

        let lines = menu_lines(&sections, 20);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2].width(), 20);
        assert_eq!(lines[3].width(), 20);
        assert_eq!(lines[4].to_string(), "Hot and sour");
    }

    #[test]
    fn uncategorized_section_has_no_heading() {
        let sections = vec![SectionView {
            heading: None,
            items: vec![item("Papad", "₹30", None)],
        }];

        let lines = menu_lines(&sections, 12);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].to_string(), "Papad    ₹30");
    }
}
