pub mod layout;
pub mod theme;
pub mod widgets;

use crate::app::AppState;
use crate::error::Result;
use crate::types::{Focus, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Result<()> {
    if handle_global_keys(app, key) {
        return Ok(());
    }

    // Route input based on UI mode first, then focus
    match app.ui_mode {
        UiMode::Help => handle_help_input(app, key),
        UiMode::Normal => {
            if handle_action_shortcuts(app, key) {
                return Ok(());
            }
            match app.focus {
                Focus::Input => handle_text_input(app, key),
                _ => handle_control_input(app, key),
            }
        }
    }
    Ok(())
}

/// Keys that work regardless of mode or focus.
/// Returns true if the key was handled.
fn handle_global_keys(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.should_quit = true;
        }
        KeyCode::F(1) => {
            app.toggle_help();
        }
        _ => return false,
    }
    true
}

/// Ctrl shortcuts for the form actions, available from any control
fn handle_action_shortcuts(app: &mut AppState, key: KeyEvent) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Char('s') => {
            app.swap_units();
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        _ => return false,
    }
    true
}

fn handle_help_input(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.ui_mode = UiMode::Normal;
        }
        _ => {}
    }
}

fn handle_text_input(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.convert();
        }
        KeyCode::Esc => {
            app.toasts.dismiss();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_input();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(c);
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Delete => {
            app.delete_char();
        }
        KeyCode::Left => {
            app.move_cursor_left();
        }
        KeyCode::Right => {
            app.move_cursor_right();
        }
        KeyCode::Home => {
            app.move_cursor_home();
        }
        KeyCode::End => {
            app.move_cursor_end();
        }
        KeyCode::Tab => {
            app.cycle_focus();
        }
        KeyCode::BackTab => {
            app.cycle_focus_back();
        }
        _ => {}
    }
}

fn handle_control_input(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Focus management
        KeyCode::Tab => {
            app.cycle_focus();
        }
        KeyCode::BackTab => {
            app.cycle_focus_back();
        }

        // Unit selection
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            cycle_focused_unit(app, false);
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            cycle_focused_unit(app, true);
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }
        KeyCode::Char('c') => {
            app.convert();
        }
        KeyCode::Char('s') => {
            app.swap_units();
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        KeyCode::Char('i') => {
            app.focus = Focus::Input;
        }

        _ => {}
    }
}

fn cycle_focused_unit(app: &mut AppState, forward: bool) {
    match app.focus {
        Focus::FromUnit => app.cycle_from_unit(forward),
        Focus::ToUnit => app.cycle_to_unit(forward),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SWAPPED_MESSAGE;
    use crate::persistence::PersistenceManager;
    use crate::types::{Button, Config, Unit};
    use tempfile::TempDir;

    fn create_test_app() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let persistence = PersistenceManager::with_dir(dir.path()).unwrap();
        (AppState::new(Config::default(), persistence), dir)
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut AppState, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    #[test]
    fn test_typing_and_enter_converts() {
        let (mut app, _dir) = create_test_app();
        for c in "37".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.result_text(), "98.60 °F");
        assert!(app.toasts.current().is_some());
    }

    #[test]
    fn test_q_is_text_inside_input() {
        let (mut app, _dir) = create_test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input, "q");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let (mut app, _dir) = create_test_app();
        press_ctrl(&mut app, 's');
        assert_eq!(app.from_unit, Unit::Fahrenheit);
        assert_eq!(
            app.toasts.current().map(|t| t.message.as_str()),
            Some(SWAPPED_MESSAGE)
        );

        press_ctrl(&mut app, 't');
        assert!(!app.dark_mode());

        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_unit_selector_keys() {
        let (mut app, _dir) = create_test_app();
        app.focus = Focus::ToUnit;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.to_unit, Unit::Kelvin);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.to_unit, Unit::Celsius);
    }

    #[test]
    fn test_space_activates_focused_button() {
        let (mut app, _dir) = create_test_app();
        app.focus = Focus::Button(Button::Theme);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.dark_mode());
        assert!(app.toasts.current().is_none());
    }

    #[test]
    fn test_help_toggle_and_close() {
        let (mut app, _dir) = create_test_app();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.ui_mode, UiMode::Help);

        // Keys are swallowed while help is open
        press(&mut app, KeyCode::Char('5'));
        assert!(app.input.is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_action_shortcuts_blocked_by_help() {
        let (mut app, _dir) = create_test_app();
        press(&mut app, KeyCode::F(1));

        press_ctrl(&mut app, 's');
        press_ctrl(&mut app, 't');
        assert_eq!(app.from_unit, Unit::Celsius);
        assert_eq!(app.to_unit, Unit::Fahrenheit);
        assert!(app.dark_mode());
        assert_eq!(app.toasts.shown_count(), 0);

        // Quit still works behind the overlay
        press_ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_in_input_dismisses_toast() {
        let (mut app, _dir) = create_test_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.toasts.current().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.toasts.current().is_none());
        assert!(!app.should_quit);
    }
}
