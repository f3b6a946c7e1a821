//! Prefix-triggered remote-suggestion autocomplete widget.
//!
//! The widget watches its input line for a recognized prefix (`tag:`,
//! `brand:`, …), fetches matching suggestions from a remote endpoint, and
//! renders them as a navigable panel. Accepting a suggestion rewrites the
//! input with the formatted value and emits a [`CommittedMsg`] so the host
//! model can re-run whatever search it drives off the input.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bubbletea_suggest::client::SuggestClient;
//! use bubbletea_suggest::suggest::{self, CommittedMsg};
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     search: suggest::Model,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(committed) = msg.downcast_ref::<CommittedMsg>() {
//!             // re-run the host search with committed.value
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
//! # In-flight lookups
//!
//! Lookups are never cancelled when a newer keystroke supersedes them. Each
//! fetch resolves independently and overwrites the widget's result state on
//! arrival, so a slow early response can replace the results of a faster
//! later one. This mirrors the behavior of the search box this widget is
//! modeled on; sequence numbering would be the fix if it ever matters.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod style;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use style::Styles;
pub use types::{CommittedMsg, SelectMsg, SuggestErrorMsg, SuggestionsMsg, WidgetId};
