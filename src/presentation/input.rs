use super::ui::max_scroll;
use crate::application::{App, AppMode, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key, modifiers),
            AppMode::Form => Self::handle_form_mode(app, key),
            AppMode::ConfirmDelete => Self::handle_confirm_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('n') = key {
                app.open_new_form();
            }
            return;
        }

        let on_reservations = app.screen == Screen::Reservations;

        match key {
            KeyCode::Tab | KeyCode::Right => app.next_screen(),
            KeyCode::BackTab | KeyCode::Left => app.previous_screen(),
            KeyCode::Char('1') => app.show_screen(Screen::Home),
            KeyCode::Char('2') => app.show_screen(Screen::About),
            KeyCode::Char('3') => app.show_screen(Screen::Reservations),
            KeyCode::Char('r') => app.open_new_form(),
            KeyCode::Up | KeyCode::Char('k') => {
                if on_reservations {
                    app.select_previous();
                } else {
                    app.scroll_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if on_reservations {
                    app.select_next();
                } else {
                    app.scroll_down(max_scroll(app.screen));
                }
            }
            KeyCode::Enter | KeyCode::Char('e') if on_reservations => app.open_edit_form(),
            // "Reserve a Table" on the home screen
            KeyCode::Enter if app.screen == Screen::Home => app.open_new_form(),
            KeyCode::Char('d') | KeyCode::Delete if on_reservations => app.request_delete(),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
            KeyCode::Backspace => app.form.pop_char(),
            KeyCode::Char(c) => app.form.push_char(c),
            _ => {}
        }
    }

    fn handle_confirm_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
