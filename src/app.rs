//! Application state and input handling for the release-note TUI.
//!
//! `App` owns the release-note state, the focused form field, the toast
//! presenter and the clipboard, and turns key presses into state operations.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::clipboard::Clipboard;
use crate::models::{BuildChannel, FormField};
use crate::release_note::ReleaseNoteState;
use crate::toast::ToastPresenter;

/// Application state
pub struct App {
    pub state: ReleaseNoteState,
    pub focus: FormField,
    pub toasts: ToastPresenter,
    clipboard: Box<dyn Clipboard>,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: ReleaseNoteState, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state,
            focus: FormField::Version,
            toasts: ToastPresenter::new(),
            clipboard,
            should_quit: false,
        }
    }

    /// Focusable fields in traversal order
    pub fn focus_order(&self) -> Vec<FormField> {
        FormField::traversal(self.state.visible_channels())
    }

    /// Current text of a form field
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Version => self.state.version(),
            FormField::Status => self.state.status(),
            FormField::Build(channel) => self.state.build_number(channel),
        }
    }

    fn set_field_value(&mut self, field: FormField, value: String) {
        match field {
            FormField::Version => self.state.set_version(value),
            FormField::Status => self.state.set_status(value),
            FormField::Build(channel) => self.state.set_build_number(channel, value),
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self.field_value(self.focus).to_string();
        edit(&mut value);
        self.set_field_value(self.focus, value);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next_in(&self.focus_order());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev_in(&self.focus_order());
    }

    /// Toggle dev channels, moving focus off a field that becomes hidden
    pub fn toggle_dev_channels(&mut self) {
        self.state.toggle_include_dev_channels();
        if !self.focus_order().contains(&self.focus) {
            self.focus = FormField::Build(BuildChannel::Production);
        }
    }

    pub fn submit(&mut self) -> bool {
        self.state
            .submit(self.clipboard.as_mut(), &mut self.toasts)
    }

    /// Advance timers and promote queued toasts
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key_code: KeyCode, modifiers: KeyModifiers) -> bool {
        // AltGr arrives as Ctrl+Alt on Windows and types characters.
        if modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT) {
            return self.handle_control_key(key_code);
        }

        match key_code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Esc => self.toasts.dismiss(),
            KeyCode::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            KeyCode::Char(c) => self.edit_focused(|value| value.push(c)),
            _ => return false,
        }
        true
    }

    fn handle_control_key(&mut self, key_code: KeyCode) -> bool {
        let KeyCode::Char(c) = key_code else {
            return false;
        };
        match c.to_ascii_lowercase() {
            'c' | 'q' => self.should_quit = true,
            's' => {
                self.submit();
            }
            'a' => self.state.auto_fill_build_numbers(),
            'r' => self.state.reset_build_numbers(),
            'd' => self.toggle_dev_channels(),
            'p' => self.state.toggle_preview_expanded(),
            'u' => self.set_field_value(self.focus, String::new()),
            _ => return false,
        }
        true
    }
}
