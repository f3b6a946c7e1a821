//! Type-safe key bindings for widget key maps.
//!
//! A [`Binding`] couples one or more key presses with optional help text and
//! an enabled/disabled flag. Widgets declare their bindings in a key map
//! struct and test incoming [`KeyMsg`] values with [`matches_binding`], so
//! the actual keys are configurable without touching widget logic.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_suggest::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["down", "ctrl+n"]),
//!     with_help("↓/ctrl+n", "next suggestion"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &next));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys that must be active for the press to match.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Returns true when the incoming key message is exactly this press.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        msg.key == self.code && msg.modifiers == self.mods
    }
}

/// Help text shown for a binding in short/full help views.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// The key label, e.g. `"↓/ctrl+n"`.
    pub key: String,
    /// The action description, e.g. `"next suggestion"`.
    pub desc: String,
}

/// A key binding: the presses that trigger it, its help text, and whether it
/// is currently enabled.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from plain (unmodified) key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::plain).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the configured key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true when the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true when the key message matches any press of this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A configuration option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
///
/// ```rust
/// use bubbletea_suggest::key::{new_binding, with_help, with_keys_str};
///
/// let accept = new_binding(vec![
///     with_keys_str(&["enter"]),
///     with_help("enter", "accept suggestion"),
/// ]);
/// assert!(accept.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: sets the binding's keys from human-readable names.
///
/// Accepts names like `"up"`, `"down"`, `"enter"`, `"esc"`, `"tab"`,
/// single characters, and `ctrl+`/`alt+` combinations (`"ctrl+n"`).
/// Unrecognized names are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|s| parse_keypress(s)).collect();
    Box::new(move |b: &mut Binding| {
        b.keys = presses;
    })
}

/// Option: sets the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| {
        b.help = help;
    })
}

/// Option: creates the binding in a disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| {
        b.disabled = true;
    })
}

/// Returns true when the key message matches the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Returns true when the key message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key maps expose their bindings for help rendering.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Binding columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_keypress(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut name = s;

    loop {
        if let Some(rest) = name.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            name = rest;
        } else if let Some(rest) = name.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            name = rest;
        } else if let Some(rest) = name.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            name = rest;
        } else {
            break;
        }
    }

    let code = match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" | "pgdn" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}
