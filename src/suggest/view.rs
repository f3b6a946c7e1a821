//! View rendering for the suggest widget.

use super::model::Model;
use super::style::ELLIPSIS;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the input line and, when open, the suggestion panel.
    pub fn view(&self) -> String {
        let mut out = self.input.view();
        if self.clear_visible {
            out.push_str(&self.styles.clear_hint.render(" ⌫"));
        }

        if !self.open || self.last_suggestions.is_empty() {
            return out;
        }

        out.push('\n');
        out.push_str(&self.panel_view());
        out
    }

    fn panel_view(&self) -> String {
        let mut lines = Vec::new();

        if let Some(rule) = &self.last_matched {
            lines.push(format!(
                "{} {}",
                self.styles.icon.render(&rule.icon_token),
                self.styles.category.render(&rule.category),
            ));
        }

        let len = self.last_suggestions.len();
        let start = self.window_offset.min(len);
        let end = (start + self.max_visible).min(len);

        if start > 0 {
            lines.push(self.styles.more.render(&format!("{} {} more", ELLIPSIS, start)));
        }

        // Pad rows to a uniform width so the active highlight forms a bar.
        let rows: Vec<String> = self.last_suggestions[start..end]
            .iter()
            .map(|s| self.row_text(s))
            .collect();
        let width = rows.iter().map(|r| r.width()).max().unwrap_or(0);

        for (offset, row) in rows.iter().enumerate() {
            let index = start + offset;
            let mut padded = row.clone();
            padded.push_str(&" ".repeat(width.saturating_sub(row.width())));
            let styled = if self.active == Some(index) {
                self.styles.active_item.render(&padded)
            } else {
                self.styles.item.render(&padded)
            };
            lines.push(styled);
        }

        if end < len {
            lines.push(
                self.styles
                    .more
                    .render(&format!("{} {} more", ELLIPSIS, len - end)),
            );
        }

        lines.join("\n")
    }

    fn row_text(&self, suggestion: &str) -> String {
        match &self.last_matched {
            Some(rule) => rule.formatted(suggestion),
            None => suggestion.to_string(),
        }
    }
}
