// crates/geoheat-core/src/normalize.rs

//! # Name Normalizer
//!
//! Maps the labels a geography source puts on its polygons to the canonical
//! country names the heatmap table and the tooltips use.
//!
//! Rules are applied in order, each one on the output of the previous one.
//! In the default [`MatchMode::Substring`] mode a rule rewrites the *first*
//! occurrence of its pattern anywhere in the label, so `"Hong Kong SAR"`
//! becomes `"Hong Kong SAR SAR"`. [`MatchMode::WholeName`] only fires when
//! the whole label equals the pattern.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One `(pattern, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    pub pattern: String,
    pub replacement: String,
}

impl NameRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// A rule that can never change its input.
    pub fn is_identity(&self) -> bool {
        self.pattern == self.replacement || self.pattern.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Rewrite the first occurrence of the pattern anywhere in the label.
    #[default]
    Substring,
    /// Rewrite only a label that equals the pattern exactly.
    WholeName,
}

/// Built-in rule table, in application order.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("Russian Federation", "Russia"),
    ("Czechia", "Czech Republic"),
    ("Korea, Republic of", "South Korea"),
    ("Korea (Republic of)", "South Korea"),
    ("Korea, South", "South Korea"),
    ("Taiwan, Province of China", "Taiwan"),
    ("Hong Kong", "Hong Kong SAR"),
    ("Macao", "Macao SAR, China"),
    ("Bahamas", "The Bahamas"),
    ("Cayman Islands", "The Cayman Islands"),
];

static DEFAULT_NORMALIZER: Lazy<NameNormalizer> = Lazy::new(|| {
    NameNormalizer::new(
        DEFAULT_RULES
            .iter()
            .map(|(p, r)| NameRule::new(*p, *r))
            .collect(),
    )
});

/// Ordered rule list plus the matching mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNormalizer {
    rules: Vec<NameRule>,
    mode: MatchMode,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

impl NameNormalizer {
    /// Builds a substring-mode normalizer. Identity rules are dropped.
    pub fn new(rules: Vec<NameRule>) -> Self {
        let before = rules.len();
        let rules: Vec<NameRule> = rules.into_iter().filter(|r| !r.is_identity()).collect();
        if rules.len() != before {
            tracing::debug!(
                dropped = before - rules.len(),
                "ignoring name rules that cannot change a label"
            );
        }
        Self {
            rules,
            mode: MatchMode::Substring,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn rules(&self) -> &[NameRule] {
        &self.rules
    }

    /// Returns the canonical name for a raw label.
    ///
    /// Never fails: a label no rule touches comes back unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoheat_core::normalize::NameNormalizer;
    ///
    /// let n = NameNormalizer::default();
    /// assert_eq!(n.normalize("United States of America"), "United States");
    /// assert_eq!(n.normalize("Czechia"), "Czech Republic");
    /// assert_eq!(n.normalize("France"), "France");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        let mut out = raw.to_string();
        for rule in &self.rules {
            match self.mode {
                MatchMode::Substring => {
                    if out.contains(rule.pattern.as_str()) {
                        out = out.replacen(rule.pattern.as_str(), &rule.replacement, 1);
                    }
                }
                MatchMode::WholeName => {
                    if out == rule.pattern {
                        out.clone_from(&rule.replacement);
                    }
                }
            }
        }
        out
    }
}

/// Normalizes with the built-in table in substring mode.
pub fn normalize_name(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_rules() {
        assert_eq!(normalize_name("United States of America"), "United States");
        assert_eq!(normalize_name("Russian Federation"), "Russia");
        assert_eq!(normalize_name("Czechia"), "Czech Republic");
        assert_eq!(normalize_name("Korea, Republic of"), "South Korea");
        assert_eq!(normalize_name("Korea (Republic of)"), "South Korea");
        assert_eq!(normalize_name("Korea, South"), "South Korea");
        assert_eq!(normalize_name("Taiwan, Province of China"), "Taiwan");
        assert_eq!(normalize_name("Hong Kong"), "Hong Kong SAR");
        assert_eq!(normalize_name("Macao"), "Macao SAR, China");
        assert_eq!(normalize_name("Bahamas"), "The Bahamas");
        assert_eq!(normalize_name("Cayman Islands"), "The Cayman Islands");
    }

    #[test]
    fn unmatched_label_passes_through() {
        assert_eq!(normalize_name("France"), "France");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn substring_mode_rewrites_inside_longer_labels() {
        assert_eq!(normalize_name("Hong Kong SAR"), "Hong Kong SAR SAR");
        assert_eq!(normalize_name("The Bahamas"), "The The Bahamas");
    }

    #[test]
    fn only_first_occurrence_is_rewritten() {
        let n = NameNormalizer::new(vec![NameRule::new("a", "b")]);
        assert_eq!(n.normalize("banana"), "bbnana");
    }

    #[test]
    fn rules_chain_in_order() {
        let n = NameNormalizer::new(vec![NameRule::new("A", "B"), NameRule::new("B", "C")]);
        assert_eq!(n.normalize("A"), "C");
        let reversed = NameNormalizer::new(vec![NameRule::new("B", "C"), NameRule::new("A", "B")]);
        assert_eq!(reversed.normalize("A"), "B");
    }

    #[test]
    fn whole_name_mode_leaves_longer_labels_alone() {
        let n = NameNormalizer::default().with_mode(MatchMode::WholeName);
        assert_eq!(n.normalize("Hong Kong SAR"), "Hong Kong SAR");
        assert_eq!(n.normalize("Hong Kong"), "Hong Kong SAR");
        assert_eq!(n.normalize("Czechia"), "Czech Republic");
    }

    #[test]
    fn identity_rules_are_dropped() {
        let n = NameNormalizer::new(vec![
            NameRule::new("Netherlands", "Netherlands"),
            NameRule::new("", "x"),
            NameRule::new("Czechia", "Czech Republic"),
        ]);
        assert_eq!(n.rules().len(), 1);
        assert_eq!(n.normalize("Netherlands"), "Netherlands");
    }
}
