use crate::app::state::App;
use crossterm::event::KeyCode;
use menu_core::tabs::{digit_to_index, TabCommand};
use menu_core::FetchTicket;

/// Handles one key press. Returns a ticket when a menu fetch must start.
pub fn handle_input(app: &mut App, key: KeyCode) -> Option<FetchTicket> {
    if app.show_help {
        if matches!(key, KeyCode::Char('?' | 'h') | KeyCode::Esc) {
            app.show_help = false;
        }
        return None;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            None
        }
        KeyCode::Char('?' | 'h') => {
            app.show_help = true;
            None
        }
        KeyCode::Char(' ') => {
            app.board.toggle_ticker();
            None
        }
        KeyCode::Left | KeyCode::BackTab => app.select(TabCommand::Previous),
        KeyCode::Right | KeyCode::Tab => app.select(TabCommand::Next),
        KeyCode::Enter | KeyCode::Char('r') => app.select(TabCommand::Reselect),
        KeyCode::Char(digit) => {
            digit_to_index(digit).and_then(|index| app.select(TabCommand::Index(index)))
        }
        KeyCode::Up => {
            app.scroll_up();
            None
        }
        KeyCode::Down => {
            app.scroll_down();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuConfig;

    fn app() -> App {
        let mut app = App::new(MenuConfig::default());
        app.mount();
        app
    }

    #[test]
    fn digits_jump_to_tabs() {
        let mut app = app();
        let ticket = handle_input(&mut app, KeyCode::Char('4'));
        assert_eq!(ticket.map(|t| t.tab().to_string()).as_deref(), Some("CURRY"));

        let ticket = handle_input(&mut app, KeyCode::Char('0'));
        assert_eq!(ticket.map(|t| t.tab().to_string()).as_deref(), Some("DESSERTS"));
    }

    #[test]
    fn enter_refetches_active_tab() {
        let mut app = app();
        let ticket = handle_input(&mut app, KeyCode::Enter);
        assert_eq!(ticket.map(|t| t.tab().to_string()).as_deref(), Some("SOUP"));
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        assert!(handle_input(&mut app, KeyCode::Char('?')).is_none());
        assert!(app.show_help);

        assert!(handle_input(&mut app, KeyCode::Right).is_none());
        assert!(handle_input(&mut app, KeyCode::Esc).is_none());
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
