//! Multi-instance management for suggest widgets.
//!
//! A [`Group`] holds any number of widget instances and routes messages to
//! the one they belong to: id-tagged messages go to the owning instance, key
//! messages to the focused instance. Attaching is idempotent per widget id,
//! and messages addressed to an unknown id are silently dropped, mirroring
//! the bind-once / missing-anchor contract of the markup this widget is
//! modeled on.

use crate::suggest::{self, SelectMsg, SuggestErrorMsg, SuggestionsMsg, WidgetId};
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// A set of independently-stated suggest widgets.
#[derive(Default)]
pub struct Group {
    widgets: Vec<suggest::Model>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a widget to the group. A widget whose id is already attached is
    /// dropped and `false` is returned; attaching is bind-once.
    pub fn attach(&mut self, widget: suggest::Model) -> bool {
        if self.contains(widget.id()) {
            return false;
        }
        self.widgets.push(widget);
        true
    }

    /// Returns whether a widget with this id is attached.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.iter().any(|w| w.id() == id)
    }

    /// Returns the widget with this id.
    pub fn get(&self, id: WidgetId) -> Option<&suggest::Model> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Returns the widget with this id, mutably.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut suggest::Model> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }

    /// Returns the number of attached widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Focuses the widget with this id and blurs every other widget, which
    /// closes their panels.
    pub fn focus(&mut self, id: WidgetId) {
        for widget in &mut self.widgets {
            if widget.id() == id {
                widget.focus();
            } else {
                widget.blur();
            }
        }
    }

    /// Returns the currently focused widget, if any.
    pub fn focused(&self) -> Option<&suggest::Model> {
        self.widgets.iter().find(|w| w.focused())
    }

    /// Routes a message to the widget it belongs to.
    ///
    /// Id-tagged messages go to the owning instance; key messages go to the
    /// focused instance. Anything unroutable is a silent no-op.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(id) = message_target(&msg) {
            return self.widgets.iter_mut().find(|w| w.id() == id)?.update(msg);
        }
        if msg.downcast_ref::<KeyMsg>().is_some() {
            return self.widgets.iter_mut().find(|w| w.focused())?.update(msg);
        }
        None
    }

    /// Renders every widget, one per line block, in attachment order.
    pub fn view(&self) -> String {
        self.widgets
            .iter()
            .map(|w| w.view())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn message_target(msg: &Msg) -> Option<WidgetId> {
    if let Some(m) = msg.downcast_ref::<SuggestionsMsg>() {
        return Some(m.id);
    }
    if let Some(m) = msg.downcast_ref::<SuggestErrorMsg>() {
        return Some(m.id);
    }
    if let Some(m) = msg.downcast_ref::<SelectMsg>() {
        return Some(m.id);
    }
    None
}
