//! Single-line text input used as the anchor of the suggest widget.
//!
//! This is a deliberately small input: a char-vector value, a cursor
//! position, prompt/placeholder rendering, and the basic movement and
//! deletion bindings. The suggest widget routes key messages here and diffs
//! the value afterwards to drive prefix detection; anything fancier
//! (validation, echo modes, clipboard) belongs to the host application.

use crate::key::{matches_binding, new_binding, with_keys_str, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Key bindings for editing the input line.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
}

/// Default editing bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
    }
}

/// The input line model.
pub struct Model {
    /// Prompt rendered before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor.
    pub cursor_style: Style,
    /// Key bindings.
    pub key_map: KeyMap,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an input with default prompt and styles.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        key_map: default_key_map(),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Clears the value and resets the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Returns whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Applies a key press to the input. Ignored while unfocused.
    pub fn handle_key(&mut self, msg: &KeyMsg) {
        if !self.focus {
            return;
        }

        let km = &self.key_map;
        if matches_binding(msg, &km.character_backward) {
            if self.pos > 0 {
                self.pos -= 1;
            }
        } else if matches_binding(msg, &km.character_forward) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
        } else if matches_binding(msg, &km.line_start) {
            self.pos = 0;
        } else if matches_binding(msg, &km.line_end) {
            self.pos = self.value.len();
        } else if matches_binding(msg, &km.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(msg, &km.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(msg, &km.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_binding(msg, &km.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if let KeyCode::Char(ch) = msg.key {
            if !msg.modifiers.contains(KeyModifiers::CONTROL)
                && !msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.value.insert(self.pos, ch);
                self.pos += 1;
            }
        }
    }

    /// Renders the input line.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            let placeholder = if self.focus {
                let mut chars = self.placeholder.chars();
                match chars.next() {
                    Some(first) => format!(
                        "{}{}",
                        self.cursor_style.render(&first.to_string()),
                        self.placeholder_style.render(chars.as_str())
                    ),
                    None => String::new(),
                }
            } else {
                self.placeholder_style.render(&self.placeholder)
            };
            return format!("{}{}", prompt, placeholder);
        }

        if !self.focus {
            return format!("{}{}", prompt, self.text_style.render(&self.value()));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let under: String = self
            .value
            .get(self.pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = self
            .value
            .get(self.pos + 1..)
            .map(|cs| cs.iter().collect())
            .unwrap_or_default();

        format!(
            "{}{}{}{}",
            prompt,
            self.text_style.render(&before),
            self.cursor_style.render(&under),
            self.text_style.render(&after),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_str(input: &mut Model, s: &str) {
        for ch in s.chars() {
            input.handle_key(&press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = new();
        input.focus();
        type_str(&mut input, "tag");
        assert_eq!(input.value(), "tag");
        assert_eq!(input.position(), 3);

        input.handle_key(&press(KeyCode::Left));
        input.handle_key(&press(KeyCode::Char('e')));
        assert_eq!(input.value(), "taeg");
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = new();
        type_str(&mut input, "ignored");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = new();
        input.focus();
        input.set_value("wool");
        input.handle_key(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "woo");

        input.set_cursor(0);
        input.handle_key(&press(KeyCode::Delete));
        assert_eq!(input.value(), "oo");
    }

    #[test]
    fn kill_line_bindings() {
        let mut input = new();
        input.focus();
        input.set_value("brand:merino");
        input.set_cursor(6);

        input.handle_key(&KeyMsg {
            key: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(input.value(), "brand:");

        input.handle_key(&KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn set_cursor_is_clamped() {
        let mut input = new();
        input.set_value("hat");
        input.set_cursor(100);
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let mut input = new();
        input.set_placeholder("search…");
        assert!(input.view().contains("search…"));

        input.set_value("wool");
        assert!(!input.view().contains("search…"));
        assert!(input.view().contains("wool"));
    }
}
