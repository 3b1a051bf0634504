//! Event handling for the TUI
//!
//! Implements vim-style keybindings and mode switching

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, View};

/// Handle a key event, returns true if app should quit
pub fn handle_event(app: &mut App, key: KeyEvent) -> bool {
    match app.mode {
        Mode::Prompt => handle_prompt_mode(app, key),
        Mode::Normal => handle_normal_mode(app, key),
    }
}

fn handle_prompt_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            // Ignored while a request is in flight: the submit control is
            // disabled until the cycle settles.
            app.submit_search();
        }
        KeyCode::Backspace => {
            app.prompt.pop();
        }
        KeyCode::Char(c) => {
            app.prompt.push(c);
        }
        _ => {}
    }
    false
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.toggle_view(),
        KeyCode::Char('1') => {
            app.view = View::Dashboard;
            app.scroll = 0;
        }
        KeyCode::Char('2') => {
            app.view = View::Search;
            app.scroll = 0;
        }
        KeyCode::Char('r') => app.refresh_analysis(),
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.view = View::Search;
            app.mode = Mode::Prompt;
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::Esc => app.abandon_request(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_app() -> App {
        let (app, _rx) = App::new(&Config::default()).unwrap();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let mut app = test_app();
        assert!(handle_event(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_q_is_text_in_prompt_mode() {
        let mut app = test_app();
        app.mode = Mode::Prompt;
        assert!(!handle_event(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.prompt, "q");
    }

    #[test]
    fn test_slash_enters_prompt_on_search_view() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.view, View::Search);
        assert_eq!(app.mode, Mode::Prompt);
    }

    #[test]
    fn test_escape_leaves_prompt_mode() {
        let mut app = test_app();
        app.mode = Mode::Prompt;
        app.prompt = "space".to_string();
        handle_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        // The typed prompt survives for the next edit
        assert_eq!(app.prompt, "space");
    }

    #[test]
    fn test_tab_toggles_views() {
        let mut app = test_app();
        assert_eq!(app.view, View::Dashboard);
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.view, View::Search);
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.view, View::Dashboard);
    }
}
