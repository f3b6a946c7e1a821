//! Styling for the suggestion panel.
//!
//! The active-row style is a rendering projection of the widget's `active`
//! index; the index itself is the source of truth, never the styling.

use lipgloss_extras::prelude::*;

/// Ellipsis used when the panel window truncates the list.
pub const ELLIPSIS: &str = "…";

/// Styles for every visual element of the suggest widget.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the icon token in the panel header.
    pub icon: Style,
    /// Style for the category name in the panel header.
    pub category: Style,
    /// Style for a suggestion row.
    pub item: Style,
    /// Style for the active (highlighted) suggestion row.
    pub active_item: Style,
    /// Style for the truncation indicator rows.
    pub more: Style,
    /// Style for the clear affordance next to the input.
    pub clear_hint: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            icon: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            category: Style::new().foreground(subdued_color.clone()).bold(true),
            item: Style::new().padding_left(2),
            active_item: Style::new()
                .padding_left(2)
                .background(Color::from("62"))
                .foreground(Color::from("230")),
            more: Style::new().foreground(subdued_color.clone()).padding_left(2),
            clear_hint: Style::new().foreground(subdued_color),
        }
    }
}
