//! Messages and identifiers for the suggest widget.
//!
//! Every message carries the id of the widget instance it belongs to, so
//! several widgets can coexist in one program without reading each other's
//! fetch results.

use crate::rule::PrefixRule;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifier of one widget instance.
pub type WidgetId = usize;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Allocates a process-unique widget id.
pub(crate) fn next_widget_id() -> WidgetId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A resolved suggestion lookup.
///
/// Carries the rule and query that produced it so the widget can format the
/// items exactly as the lookup saw them, even if the input has moved on.
/// Results are applied in arrival order, last write wins; see the module
/// documentation of [`crate::suggest`] for the out-of-order caveat.
#[derive(Debug, Clone)]
pub struct SuggestionsMsg {
    /// The widget this result belongs to.
    pub id: WidgetId,
    /// The rule that was active when the lookup was issued.
    pub rule: PrefixRule,
    /// The query text sent to the endpoint.
    pub query: String,
    /// The ordered suggestion strings, possibly empty.
    pub suggestions: Vec<String>,
}

/// A failed suggestion lookup. The widget logs it and closes the panel.
#[derive(Debug, Clone)]
pub struct SuggestErrorMsg {
    /// The widget the failed lookup belongs to.
    pub id: WidgetId,
    /// A display string of the underlying error.
    pub error: String,
}

/// Emitted after a suggestion commit or a clear, carrying the new input
/// value. Host models observe this to re-run their own search.
#[derive(Debug, Clone)]
pub struct CommittedMsg {
    /// The widget that committed.
    pub id: WidgetId,
    /// The committed input value; empty after a clear.
    pub value: String,
}

/// Commits the suggestion at `index` of the addressed widget.
///
/// This is the message-driven selection entry point for callers outside the
/// widget's own key handling. An out-of-range index falls back to item 0;
/// the message is a no-op when the widget has no suggestions.
#[derive(Debug, Clone)]
pub struct SelectMsg {
    /// The widget to commit in.
    pub id: WidgetId,
    /// Index into the current suggestion list.
    pub index: usize,
}
