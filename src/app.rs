use crate::constants::{
    BUTTON_PRESS_MS, CONVERTED_MESSAGE, EMPTY_FORMULA_PROMPT, MAX_TEMPERATURE_INPUT_LENGTH,
    SWAPPED_MESSAGE,
};
use crate::conversion::{self, ConversionResult};
use crate::persistence::PersistenceManager;
use crate::toast::{ToastLevel, ToastManager};
use crate::types::{Button, Config, Focus, UiMode, Unit};
use crate::validator::validate_input;
use std::time::{Duration, Instant};

/// What the result and formula regions currently show
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// No valid input yet: placeholder result and a prompt instead of a formula
    Empty,
    Showing(ConversionResult),
}

pub struct AppState {
    pub config: Config,
    pub persistence: PersistenceManager,
    pub should_quit: bool,

    // Form controls
    pub input: String,
    /// Cursor position in the input, counted in chars
    pub input_cursor: usize,
    pub input_error: bool,
    pub from_unit: Unit,
    pub to_unit: Unit,

    // Output
    pub display: Display,
    pub toasts: ToastManager,

    // UI Mode
    pub ui_mode: UiMode,
    pub focus: Focus,
    pub pressed: Option<(Button, Instant)>,
}

impl AppState {
    pub fn new(config: Config, persistence: PersistenceManager) -> Self {
        AppState {
            config,
            persistence,
            should_quit: false,
            input: String::new(),
            input_cursor: 0,
            input_error: false,
            from_unit: Unit::Celsius,
            to_unit: Unit::Fahrenheit,
            display: Display::Empty,
            toasts: ToastManager::new(),
            ui_mode: UiMode::Normal,
            focus: Focus::Input,
            pressed: None,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.config.dark_mode
    }

    /// Text for the result region
    pub fn result_text(&self) -> String {
        match &self.display {
            Display::Empty => conversion::placeholder(self.to_unit),
            Display::Showing(result) => result.display_value(),
        }
    }

    /// Text for the formula region
    pub fn formula_text(&self) -> &'static str {
        match &self.display {
            Display::Empty => EMPTY_FORMULA_PROMPT,
            Display::Showing(result) => result.formula.description(),
        }
    }

    /// Recompute the display from the current controls without notifying.
    /// Invalid or absent input falls back to the empty state.
    pub fn refresh_display(&mut self) {
        self.display = match validate_input(&self.input) {
            Ok(value) => {
                Display::Showing(conversion::convert(value, self.from_unit, self.to_unit))
            }
            Err(_) => Display::Empty,
        };
    }

    // Input editing

    pub fn set_input(&mut self, text: &str) {
        self.input = text.chars().take(MAX_TEMPERATURE_INPUT_LENGTH).collect();
        self.input_cursor = self.input.chars().count();
        self.input_error = false;
        self.refresh_display();
    }

    fn cursor_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.input_cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if self.input.chars().count() >= MAX_TEMPERATURE_INPUT_LENGTH {
            return;
        }
        let idx = self.cursor_byte_index();
        self.input.insert(idx, c);
        self.input_cursor += 1;
        self.on_input_edited();
    }

    pub fn backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        self.input_cursor -= 1;
        let idx = self.cursor_byte_index();
        self.input.remove(idx);
        self.on_input_edited();
    }

    pub fn delete_char(&mut self) {
        if self.input_cursor >= self.input.chars().count() {
            return;
        }
        let idx = self.cursor_byte_index();
        self.input.remove(idx);
        self.on_input_edited();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.on_input_edited();
    }

    pub fn move_cursor_left(&mut self) {
        self.input_cursor = self.input_cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.input_cursor = (self.input_cursor + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.input_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.input_cursor = self.input.chars().count();
    }

    fn on_input_edited(&mut self) {
        self.input_error = false;
        self.refresh_display();
    }

    // Unit selection

    pub fn set_from_unit(&mut self, unit: Unit) {
        self.from_unit = unit;
        self.refresh_display();
    }

    pub fn set_to_unit(&mut self, unit: Unit) {
        self.to_unit = unit;
        self.refresh_display();
    }

    pub fn cycle_from_unit(&mut self, forward: bool) {
        let unit = if forward {
            self.from_unit.next()
        } else {
            self.from_unit.previous()
        };
        self.set_from_unit(unit);
    }

    pub fn cycle_to_unit(&mut self, forward: bool) {
        let unit = if forward {
            self.to_unit.next()
        } else {
            self.to_unit.previous()
        };
        self.set_to_unit(unit);
    }

    // Actions

    /// Explicit conversion. Validation failures raise an error toast and
    /// leave the display untouched.
    pub fn convert(&mut self) {
        self.press(Button::Convert);

        if let Err(e) = validate_input(&self.input) {
            tracing::debug!("Convert rejected input '{}': {}", self.input, e);
            self.input_error = true;
            self.toasts.show(e.to_string(), ToastLevel::Error);
            return;
        }

        self.input_error = false;
        self.refresh_display();

        // Same-unit conversions update silently
        if self.from_unit != self.to_unit {
            self.toasts.show(CONVERTED_MESSAGE, ToastLevel::Success);
        }
    }

    pub fn swap_units(&mut self) {
        self.press(Button::Swap);

        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        tracing::debug!("Units swapped: {:?} -> {:?}", self.from_unit, self.to_unit);
        self.refresh_display();

        self.toasts.show(SWAPPED_MESSAGE, ToastLevel::Success);
    }

    pub fn toggle_theme(&mut self) {
        self.press(Button::Theme);

        self.config.dark_mode = !self.config.dark_mode;
        tracing::info!("Theme switched (dark_mode={})", self.config.dark_mode);

        if let Err(e) = self.persistence.save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    pub fn activate(&mut self, button: Button) {
        match button {
            Button::Convert => self.convert(),
            Button::Swap => self.swap_units(),
            Button::Theme => self.toggle_theme(),
        }
    }

    /// Enter/Space on the focused control
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Input => self.convert(),
            Focus::FromUnit => self.cycle_from_unit(true),
            Focus::ToUnit => self.cycle_to_unit(true),
            Focus::Button(button) => self.activate(button),
        }
    }

    // Button press feedback

    fn press(&mut self, button: Button) {
        self.pressed = Some((button, Instant::now()));
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        matches!(self.pressed, Some((b, _)) if b == button)
    }

    /// Advance timers: toast expiry and button press highlight
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);

        if let Some((_, at)) = self.pressed {
            if now.saturating_duration_since(at) >= Duration::from_millis(BUTTON_PRESS_MS) {
                self.pressed = None;
            }
        }
    }

    // Focus and modes

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            UiMode::Normal => UiMode::Help,
        };
    }
}
