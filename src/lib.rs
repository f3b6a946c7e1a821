#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-suggest/")]

//! # bubbletea-suggest
//!
//! A prefix-triggered remote-suggestion autocomplete widget for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) terminal
//! applications.
//!
//! The widget attaches to a text input line, watches it for a recognized
//! prefix (`tag:`, `cat:`, `brand:`, …), fetches matching completions from a
//! remote suggestion endpoint, and renders them as a keyboard-navigable
//! panel. Accepting a suggestion rewrites the input with the formatted value
//! and notifies the host model, so whatever search the host drives off the
//! input re-runs against the committed value.
//!
//! The component follows the Elm Architecture pattern used across the
//! bubbletea ecosystem: a model struct with `update()` and `view()` methods,
//! typed messages, and asynchronous work expressed as commands.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bubbletea_suggest::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     search: Suggest,
//! }
//!
//! impl App {
//!     fn new() -> Self {
//!         let client = SuggestClient::new("https://shop.example.com").unwrap();
//!         let mut search = bubbletea_suggest::suggest::new(client)
//!             .with_placeholder("search products…");
//!         search.focus();
//!         Self { search }
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(committed) = msg.downcast_ref::<CommittedMsg>() {
//!             // the input value changed through the widget; re-run the
//!             // host's own search with committed.value here
//!             let _ = &committed.value;
//!             return None;
//!         }
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.search.view()
//!     }
//! }
//! ```
//!
//! ## Prefix rules
//!
//! Rules map a literal prefix to a suggestion category and icon. They are
//! checked in order and the first case-insensitive match wins:
//!
//! ```rust
//! use bubbletea_suggest::rule::PrefixRule;
//!
//! let rules = vec![
//!     PrefixRule::new("tag:", "tag", "#"),
//!     PrefixRule::new("brand:", "brand", "®"),
//! ];
//! assert_eq!(rules[1].formatted("merino wool"), "brand:\"merino wool\"");
//! ```
//!
//! ## Multiple widgets
//!
//! Several widgets can coexist; each owns its state exclusively. The
//! [`group::Group`] helper routes messages to the instance they belong to
//! and keeps attachment bind-once-per-id.
//!
//! ## Failure behavior
//!
//! Nothing in this crate is fatal: a failed or unparseable lookup is logged
//! via `tracing` and degrades to "no suggestions shown", always preserving
//! the user's typed text.

pub mod client;
pub mod group;
pub mod input;
pub mod key;
pub mod rule;
pub mod suggest;

use bubbletea_rs::Cmd;

/// Focus management for components in this crate.
///
/// Focused components receive key input; blurred components ignore it. For
/// the suggest widget, blurring also closes the panel, the terminal analog
/// of clicking elsewhere on a page.
pub trait Component {
    /// Sets the component to focused state, optionally returning a command
    /// to run (none of this crate's components need one today).
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

impl Component for input::Model {
    fn focus(&mut self) -> Option<Cmd> {
        input::Model::focus(self);
        None
    }

    fn blur(&mut self) {
        input::Model::blur(self)
    }

    fn focused(&self) -> bool {
        input::Model::focused(self)
    }
}

impl Component for suggest::Model {
    fn focus(&mut self) -> Option<Cmd> {
        suggest::Model::focus(self);
        None
    }

    fn blur(&mut self) {
        suggest::Model::blur(self)
    }

    fn focused(&self) -> bool {
        suggest::Model::focused(self)
    }
}

pub use client::SuggestClient;
pub use group::Group;
pub use rule::{default_rules, match_rule, PrefixRule};
pub use suggest::{
    new as suggest_new, CommittedMsg, Model as Suggest, SelectMsg, SuggestErrorMsg,
    SuggestionsMsg, WidgetId,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_suggest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::SuggestClient;
    pub use crate::group::Group;
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::rule::{default_rules, match_rule, PrefixRule};
    pub use crate::suggest::{
        new as suggest_new, CommittedMsg, Model as Suggest, SelectMsg, SuggestErrorMsg,
        SuggestionsMsg, WidgetId,
    };
    pub use crate::Component;
}
