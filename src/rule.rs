//! Prefix rules: the mapping from a literal input prefix to a suggestion
//! category and display icon.
//!
//! A rule like `brand:` marks the rest of the input as a query against the
//! `brand` suggestion category. Rules are static configuration: they are
//! checked in list order and the first rule whose prefix starts the
//! (lowercased) input wins.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_suggest::rule::{match_rule, PrefixRule};
//!
//! let rules = vec![PrefixRule::new("brand:", "brand", "®")];
//! let (rule, query) = match_rule(&rules, "Brand: merino ").unwrap();
//! assert_eq!(rule.category, "brand");
//! assert_eq!(query, "merino");
//! assert_eq!(rule.formatted("merino wool"), "brand:\"merino wool\"");
//! ```

/// A configured mapping from a literal text prefix to a suggestion category
/// and a display icon token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    /// The literal prefix, e.g. `tag:`. Matched case-insensitively.
    pub prefix: String,
    /// The suggestion category sent to the remote endpoint.
    pub category: String,
    /// A short token rendered next to the category in the panel header.
    pub icon_token: String,
}

impl PrefixRule {
    /// Creates a rule.
    pub fn new(
        prefix: impl Into<String>,
        category: impl Into<String>,
        icon_token: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            category: category.into(),
            icon_token: icon_token.into(),
        }
    }

    /// Returns the query text when this rule's prefix starts the value.
    ///
    /// The comparison is case-insensitive on the lowercased value; the query
    /// is the remainder after the prefix, trimmed of surrounding whitespace.
    pub fn match_value<'a>(&self, value: &'a str) -> Option<&'a str> {
        let head = value.get(..self.prefix.len())?;
        if head.to_lowercase() == self.prefix.to_lowercase() {
            Some(value[self.prefix.len()..].trim())
        } else {
            None
        }
    }

    /// Returns the formatted input value for a suggestion under this rule.
    ///
    /// The suggestion is concatenated directly after the prefix. A
    /// `brand`-category suggestion containing whitespace is double-quoted so
    /// the committed value survives tokenization by the host's search.
    pub fn formatted(&self, suggestion: &str) -> String {
        if self.category == "brand" && suggestion.contains(char::is_whitespace) {
            format!("{}\"{}\"", self.prefix, suggestion)
        } else {
            format!("{}{}", self.prefix, suggestion)
        }
    }
}

/// Returns the first rule whose prefix starts the value, with the extracted
/// query, or `None` when no rule matches.
pub fn match_rule<'a, 'b>(
    rules: &'a [PrefixRule],
    value: &'b str,
) -> Option<(&'a PrefixRule, &'b str)> {
    rules
        .iter()
        .find_map(|rule| rule.match_value(value).map(|query| (rule, query)))
}

/// Drops rules whose literal prefix already appeared earlier in the list.
///
/// Two rules with the same prefix would make the first-match-wins order
/// ambiguous to configure, so only the first occurrence is kept.
pub fn dedup_rules(rules: Vec<PrefixRule>) -> Vec<PrefixRule> {
    let mut kept: Vec<PrefixRule> = Vec::with_capacity(rules.len());
    for rule in rules {
        if kept.iter().any(|r| r.prefix == rule.prefix) {
            tracing::debug!(prefix = %rule.prefix, "dropping duplicate prefix rule");
            continue;
        }
        kept.push(rule);
    }
    kept
}

/// The default four-category rule set.
pub fn default_rules() -> Vec<PrefixRule> {
    vec![
        PrefixRule::new("tag:", "tag", "#"),
        PrefixRule::new("cat:", "category", "▸"),
        PrefixRule::new("brand:", "brand", "®"),
        PrefixRule::new("loc:", "location", "@"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let rules = vec![
            PrefixRule::new("cat:", "category", "▸"),
            PrefixRule::new("category:", "category-long", "▸"),
        ];
        let (rule, query) = match_rule(&rules, "cat:hats").unwrap();
        assert_eq!(rule.category, "category");
        assert_eq!(query, "hats");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = default_rules();
        let (rule, query) = match_rule(&rules, "TAG:Wool").unwrap();
        assert_eq!(rule.prefix, "tag:");
        assert_eq!(query, "Wool");
    }

    #[test]
    fn query_is_trimmed() {
        let rule = PrefixRule::new("tag:", "tag", "#");
        assert_eq!(rule.match_value("tag:  wool  "), Some("wool"));
        assert_eq!(rule.match_value("tag:"), Some(""));
    }

    #[test]
    fn no_rule_matches_plain_text() {
        assert!(match_rule(&default_rules(), "plain search").is_none());
        assert!(match_rule(&default_rules(), "ta").is_none());
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        let rules = default_rules();
        assert!(match_rule(&rules, "日本語のテキスト").is_none());
    }

    #[test]
    fn brand_values_with_spaces_are_quoted() {
        let brand = PrefixRule::new("brand:", "brand", "®");
        assert_eq!(brand.formatted("merino"), "brand:merino");
        assert_eq!(brand.formatted("merino wool"), "brand:\"merino wool\"");
    }

    #[test]
    fn non_brand_values_are_never_quoted() {
        let tag = PrefixRule::new("tag:", "tag", "#");
        assert_eq!(tag.formatted("hand wash"), "tag:hand wash");
    }

    #[test]
    fn duplicate_prefixes_keep_the_first_rule() {
        let rules = dedup_rules(vec![
            PrefixRule::new("tag:", "tag", "#"),
            PrefixRule::new("tag:", "other", "?"),
            PrefixRule::new("cat:", "category", "▸"),
        ]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].category, "tag");
    }
}
