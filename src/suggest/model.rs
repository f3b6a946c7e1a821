//! Core model of the suggest widget.

use super::keymap::{default_key_map, KeyMap};
use super::style::Styles;
use super::types::{next_widget_id, CommittedMsg, SuggestErrorMsg, SuggestionsMsg, WidgetId};
use crate::client::SuggestClient;
use crate::input;
use crate::rule::{dedup_rules, default_rules, PrefixRule};
use bubbletea_rs::{Cmd, Msg};

/// The suggest widget model.
///
/// Each instance exclusively owns its state; nothing is shared between
/// widgets, so several can live in one program without interfering. All
/// mutation happens in `update()` on the program's event loop.
///
/// # Examples
///
/// ```rust,no_run
/// use bubbletea_suggest::client::SuggestClient;
/// use bubbletea_suggest::suggest;
///
/// let client = SuggestClient::new("https://shop.example.com").unwrap();
/// let mut widget = suggest::new(client);
/// widget.focus();
/// ```
pub struct Model {
    /// Key bindings for panel navigation and clearing.
    pub key_map: KeyMap,
    /// Panel styles.
    pub styles: Styles,
    /// The anchor input line.
    pub input: input::Model,
    /// Maximum number of suggestion rows shown at once.
    pub max_visible: usize,

    pub(super) id: WidgetId,
    pub(super) rules: Vec<PrefixRule>,
    pub(super) client: SuggestClient,

    pub(super) open: bool,
    pub(super) active: Option<usize>,
    pub(super) last_suggestions: Vec<String>,
    pub(super) last_matched: Option<PrefixRule>,
    pub(super) window_offset: usize,
    pub(super) clear_visible: bool,
    pub(super) last_value: String,
}

/// Creates a widget with the default four-category rule set.
pub fn new(client: SuggestClient) -> Model {
    Model {
        key_map: default_key_map(),
        styles: Styles::default(),
        input: input::new(),
        max_visible: 8,
        id: next_widget_id(),
        rules: default_rules(),
        client,
        open: false,
        active: None,
        last_suggestions: Vec::new(),
        last_matched: None,
        window_offset: 0,
        clear_visible: false,
        last_value: String::new(),
    }
}

impl Model {
    /// Replaces the prefix rules. Duplicate literal prefixes are dropped,
    /// keeping the first occurrence, so first-match-wins stays well defined.
    pub fn with_rules(mut self, rules: Vec<PrefixRule>) -> Self {
        self.rules = dedup_rules(rules);
        self
    }

    /// Sets the input placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.input.set_placeholder(placeholder);
        self
    }

    /// Sets the panel window height in rows.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    /// Returns this instance's id, used to address messages to it.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Returns the configured prefix rules.
    pub fn rules(&self) -> &[PrefixRule] {
        &self.rules
    }

    /// Returns whether the suggestion panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the active suggestion index, `None` when nothing is active.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the most recently fetched suggestion set.
    pub fn suggestions(&self) -> &[String] {
        &self.last_suggestions
    }

    /// Returns the rule behind the most recently applied result set.
    pub fn matched_rule(&self) -> Option<&PrefixRule> {
        self.last_matched.as_ref()
    }

    /// Returns whether the clear affordance is shown.
    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    /// Focuses the anchor input.
    pub fn focus(&mut self) {
        self.input.focus();
    }

    /// Removes focus and closes the panel.
    ///
    /// Focus loss is the terminal analog of clicking outside the widget, so
    /// it resets the active selection as well. The input text is untouched.
    pub fn blur(&mut self) {
        self.input.blur();
        self.reset_panel();
    }

    /// Returns whether the anchor input is focused.
    pub fn focused(&self) -> bool {
        self.input.focused()
    }
}

/// Builds the fetch command for one suggestion lookup.
///
/// Each command runs to completion independently; nothing cancels it when a
/// newer keystroke supersedes it. The resolved message overwrites the
/// widget's result state whenever it arrives (last write wins).
pub(super) fn fetch(client: SuggestClient, rule: PrefixRule, query: String, id: WidgetId) -> Cmd {
    Box::pin(async move {
        let msg: Msg = match client.fetch(&rule.category, &query).await {
            Ok(suggestions) => Box::new(SuggestionsMsg {
                id,
                rule,
                query,
                suggestions,
            }),
            Err(err) => Box::new(SuggestErrorMsg {
                id,
                error: err.to_string(),
            }),
        };
        Some(msg)
    })
}

/// Builds the command that notifies the host of a committed value.
pub(super) fn committed(id: WidgetId, value: String) -> Cmd {
    Box::pin(async move { Some(Box::new(CommittedMsg { id, value }) as Msg) })
}
