//! Update logic for the suggest widget.

use super::model::{committed, fetch, Model};
use super::types::{SelectMsg, SuggestErrorMsg, SuggestionsMsg};
use crate::key::matches_binding;
use crate::rule::match_rule;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl Model {
    /// Processes a message and updates the widget state.
    ///
    /// Handles fetch results, message-driven selection, and key input.
    /// Messages tagged with another widget's id are ignored, as are key
    /// messages while the input is unfocused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(results) = msg.downcast_ref::<SuggestionsMsg>() {
            if results.id == self.id {
                self.apply_results(results);
            }
            return None;
        }

        if let Some(err) = msg.downcast_ref::<SuggestErrorMsg>() {
            if err.id == self.id {
                tracing::warn!(widget = self.id, error = %err.error, "suggestion lookup failed");
                self.reset_panel();
            }
            return None;
        }

        if let Some(select) = msg.downcast_ref::<SelectMsg>() {
            if select.id == self.id {
                return self.select(select.index);
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        None
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.input.focused() {
            return None;
        }

        // Panel navigation only applies while the panel is open with items.
        if self.open && !self.last_suggestions.is_empty() {
            if matches_binding(key, &self.key_map.next_suggestion) {
                self.move_active(1);
                return None;
            }
            if matches_binding(key, &self.key_map.prev_suggestion) {
                self.move_active(-1);
                return None;
            }
            if matches_binding(key, &self.key_map.accept_suggestion) {
                let index = self.active.unwrap_or(0);
                return self.commit(index);
            }
            if matches_binding(key, &self.key_map.dismiss) {
                self.reset_panel();
                return None;
            }
        }

        if matches_binding(key, &self.key_map.clear) {
            return self.clear();
        }

        self.input.handle_key(key);
        self.sync_value()
    }

    /// Reacts to an input-value change: refreshes the clear affordance and
    /// either issues a fetch for the matched rule or closes the panel.
    fn sync_value(&mut self) -> Option<Cmd> {
        let value = self.input.value();
        if value == self.last_value {
            return None;
        }
        self.last_value = value.clone();
        self.clear_visible = !value.trim().is_empty();

        match match_rule(&self.rules, &value) {
            Some((rule, query)) => Some(fetch(
                self.client.clone(),
                rule.clone(),
                query.to_string(),
                self.id,
            )),
            None => {
                self.reset_panel();
                None
            }
        }
    }

    /// Applies a resolved lookup.
    ///
    /// The result unconditionally overwrites the stored suggestions and rule,
    /// whatever order responses arrive in. An empty set closes the panel; a
    /// set containing an exact formatted match of the current trimmed input
    /// keeps the panel closed (the input is already a completed choice);
    /// anything else opens the panel with no active selection.
    fn apply_results(&mut self, results: &SuggestionsMsg) {
        self.last_suggestions = results.suggestions.clone();
        self.last_matched = Some(results.rule.clone());

        if self.last_suggestions.is_empty() {
            self.reset_panel();
            return;
        }

        let current = self.input.value();
        let current = current.trim().to_lowercase();
        let exact = self
            .last_suggestions
            .iter()
            .any(|s| results.rule.formatted(s).to_lowercase() == current);
        if exact {
            self.close_panel();
            return;
        }

        self.open = true;
        self.active = None;
        self.window_offset = 0;
    }

    /// Moves the active index by one, saturating at the list edges.
    ///
    /// From no selection, both directions land on item 0; moving past the
    /// last item stays on the last item. The panel window follows the index.
    fn move_active(&mut self, dir: i32) {
        let len = self.last_suggestions.len();
        if len == 0 {
            return;
        }

        let next = match (self.active, dir >= 0) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.active = Some(next);
        self.scroll_active_into_view();
    }

    fn scroll_active_into_view(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        if active < self.window_offset {
            self.window_offset = active;
        } else if active >= self.window_offset + self.max_visible {
            self.window_offset = active + 1 - self.max_visible;
        }
    }

    /// Commits the suggestion at `index`: rewrites the input with its
    /// formatted value, closes the panel, refreshes the clear affordance,
    /// and emits a [`super::CommittedMsg`] for the host.
    ///
    /// An out-of-range index falls back to item 0. Returns `None` when there
    /// is nothing to commit.
    pub fn commit(&mut self, index: usize) -> Option<Cmd> {
        let rule = self.last_matched.clone()?;
        if self.last_suggestions.is_empty() {
            return None;
        }
        let index = if index < self.last_suggestions.len() {
            index
        } else {
            0
        };

        let value = rule.formatted(&self.last_suggestions[index]);
        self.input.set_value(&value);
        self.last_value = value.clone();
        self.clear_visible = !value.trim().is_empty();
        self.reset_panel();
        self.input.focus();
        Some(committed(self.id, value))
    }

    /// Message-driven selection entry point; see [`super::SelectMsg`].
    pub fn select(&mut self, index: usize) -> Option<Cmd> {
        self.commit(index)
    }

    /// Empties the input, closes the panel, and notifies the host so its
    /// own search re-runs against the empty value.
    pub fn clear(&mut self) -> Option<Cmd> {
        self.input.reset();
        self.last_value.clear();
        self.clear_visible = false;
        self.reset_panel();
        self.input.focus();
        Some(committed(self.id, String::new()))
    }

    /// Closes the panel without touching the stored result set.
    fn close_panel(&mut self) {
        self.open = false;
        self.active = None;
        self.window_offset = 0;
    }

    /// Closes the panel and clears the result state.
    pub(super) fn reset_panel(&mut self) {
        self.close_panel();
        self.last_suggestions.clear();
        self.last_matched = None;
    }
}
