//! Key bindings for the suggest widget.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Key bindings for navigating and acting on the suggestion panel.
///
/// The panel-navigation bindings only apply while the panel is open with a
/// non-empty list; otherwise keys fall through to the input line.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the active suggestion forward.
    pub next_suggestion: Binding,
    /// Move the active suggestion backward.
    pub prev_suggestion: Binding,
    /// Commit the active suggestion (item 0 when none is active).
    pub accept_suggestion: Binding,
    /// Close the panel, leaving the input text unchanged.
    pub dismiss: Binding,
    /// Empty the input and close the panel.
    pub clear: Binding,
}

/// Default bindings for the suggest widget.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next_suggestion: new_binding(vec![
            with_keys_str(&["down", "ctrl+n"]),
            with_help("↓", "next suggestion"),
        ]),
        prev_suggestion: new_binding(vec![
            with_keys_str(&["up", "ctrl+p"]),
            with_help("↑", "previous suggestion"),
        ]),
        accept_suggestion: new_binding(vec![
            with_keys_str(&["enter"]),
            with_help("enter", "accept suggestion"),
        ]),
        dismiss: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "dismiss")]),
        clear: new_binding(vec![with_keys_str(&["ctrl+l"]), with_help("ctrl+l", "clear")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_suggestion,
            &self.prev_suggestion,
            &self.accept_suggestion,
            &self.dismiss,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.next_suggestion, &self.prev_suggestion],
            vec![&self.accept_suggestion, &self.dismiss, &self.clear],
        ]
    }
}
