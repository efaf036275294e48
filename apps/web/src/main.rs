mod console;
mod layout;
mod sheets;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use menu_core::loader::fetch_menu;
use menu_core::tabs::{digit_to_index, TabCommand};
use menu_core::view::{gap_between, BoardView, ContentView, SectionView, TabStrip, LOADING_TEXT};
use menu_core::{FetchTicket, MenuBoard, MenuConfig, SheetSource};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use crate::layout::board_areas;
use crate::sheets::BrowserSheets;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const ACCENT: Color = Color::Rgb(0, 123, 255);

fn main() -> io::Result<()> {
    console::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let config = MenuConfig::default();
    if let Err(error) = config.validate() {
        log::error!("menu configuration rejected: {error}");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, error.to_string()));
    }

    let mounted_at = js_sys::Date::now();
    let sheets = Rc::new(BrowserSheets::new(config.clone()));
    let ads_sheet = config.ads_sheet.clone();
    let board = Rc::new(RefCell::new(MenuBoard::new(config)));
    let row_offset = Rc::new(RefCell::new(0_u16));

    let ticket = board.borrow_mut().mount();
    spawn_local(load_menu(board.clone(), sheets.clone(), ticket));
    spawn_local(load_ads(board.clone(), sheets.clone(), ads_sheet));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let board = board.clone();
        let row_offset = row_offset.clone();
        move |event| {
            let command = match event.code {
                ratzilla::event::KeyCode::Left => Some(TabCommand::Previous),
                ratzilla::event::KeyCode::Right => Some(TabCommand::Next),
                ratzilla::event::KeyCode::Enter => Some(TabCommand::Reselect),
                ratzilla::event::KeyCode::Char(digit) => {
                    digit_to_index(digit).map(TabCommand::Index)
                }
                ratzilla::event::KeyCode::Up => {
                    let mut offset = row_offset.borrow_mut();
                    *offset = offset.saturating_sub(1);
                    None
                }
                ratzilla::event::KeyCode::Down => {
                    let mut offset = row_offset.borrow_mut();
                    *offset = (*offset + 1).min(2000);
                    None
                }
                _ => None,
            };

            let Some(command) = command else {
                return;
            };
            let ticket = board.borrow_mut().command(command);
            if let Some(ticket) = ticket {
                *row_offset.borrow_mut() = 0;
                spawn_local(load_menu(board.clone(), sheets.clone(), ticket));
            }
        }
    });

    terminal.draw_web(move |f| {
        let since_mount = since(mounted_at);
        board.borrow_mut().tick(since_mount);

        let board = board.borrow();
        let area = f.area();
        match board.view() {
            BoardView::Splash { title, tagline } => {
                render_splash(f, area, title, tagline, since_mount);
            }
            BoardView::Menu {
                tabs,
                content,
                ticker,
            } => {
                let (menu_area, ticker_area) = board_areas(area, ticker);

                render_menu(
                    f,
                    menu_area,
                    &board.config().restaurant,
                    &tabs,
                    &content,
                    *row_offset.borrow(),
                );
                if let Some(window) = board.ticker_window(usize::from(ticker_area.width)) {
                    render_ticker(f, ticker_area, window);
                }
            }
        }
    });

    Ok(())
}

fn since(mounted_at: f64) -> Duration {
    Duration::from_secs_f64(((js_sys::Date::now() - mounted_at) / 1000.0).max(0.0))
}

async fn load_menu(board: Rc<RefCell<MenuBoard>>, sheets: Rc<BrowserSheets>, ticket: FetchTicket) {
    let result = fetch_menu(sheets.as_ref(), &ticket).await;
    board.borrow_mut().resolve_menu(&ticket, result);
}

async fn load_ads(board: Rc<RefCell<MenuBoard>>, sheets: Rc<BrowserSheets>, ads_sheet: String) {
    let result = sheets.fetch_sheet(&ads_sheet).await;
    board.borrow_mut().resolve_ads(result);
}

fn render_splash(
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    tagline: &str,
    since_mount: Duration,
) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    #[allow(clippy::cast_possible_truncation)]
    let frame = (since_mount.as_millis() / 250) as usize % SPINNER_FRAMES.len();
    let lines = vec![
        TextLine::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            tagline.to_string(),
            Style::default().fg(Color::White),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            SPINNER_FRAMES[frame],
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    let top = area.height.saturating_sub(4) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: area.height.saturating_sub(top).min(4),
    };
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(paragraph, centered);
}

fn render_menu(
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
    restaurant: &str,
    tabs: &TabStrip<'_>,
    content: &ContentView,
    row_offset: u16,
) {
    let block = Block::default()
        .title(restaurant.to_string())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

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
        .divider(Span::raw(" "));
    f.render_widget(strip, layout[0]);

    let rule = Paragraph::new("─".repeat(usize::from(layout[1].width)))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, layout[1]);

    render_content(f, layout[2], content, row_offset);
}

fn render_content(
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
    content: &ContentView,
    row_offset: u16,
) {
    match content {
        ContentView::Error(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        ContentView::Loading => {
            let paragraph = Paragraph::new(Text::from(vec![
                TextLine::from(""),
                TextLine::from(LOADING_TEXT),
            ]))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, area);
        }
        ContentView::Sections(sections) => {
            let lines = section_lines(sections, usize::from(area.width));
            let paragraph = Paragraph::new(Text::from(lines)).scroll((row_offset, 0));
            f.render_widget(paragraph, area);
        }
    }
}

fn section_lines(sections: &[SectionView], width: usize) -> Vec<TextLine<'static>> {
    let mut lines = Vec::new();

    for section in sections {
        lines.push(TextLine::from(""));
        if let Some(heading) = &section.heading {
            lines.push(TextLine::from(Span::styled(
                heading.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(TextLine::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(Color::DarkGray),
            )));
        }

        for item in &section.items {
            let gap = gap_between(&item.name, &item.price, width);
            lines.push(TextLine::from(vec![
                Span::styled(
                    item.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(gap)),
                Span::styled(
                    item.price.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(description) = &item.description {
                lines.push(TextLine::from(Span::styled(
                    description.clone(),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    lines
}

fn render_ticker(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect, window: String) {
    let paragraph =
        Paragraph::new(window).style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(paragraph, area);
}
