//! Two-way string formatting policies.
//!
//! A [`Formatter`] converts text between a canonical (unformatted) and a
//! display (formatted) representation, and decides which inputs are
//! acceptable at all. Each side is described by a [`FormatRule`]: a pattern
//! recognising that representation plus the replacement template that
//! produces it from the other side's capture groups.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// One side of a textual representation.
///
/// Serialized as `{ "pattern": ..., "replacement": ... }`; deserializing
/// compiles the pattern and fails on invalid syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FormatRuleConfig", into = "FormatRuleConfig")]
pub struct FormatRule {
    pattern: Regex,
    replacement: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct FormatRuleConfig {
    pattern: String,
    replacement: String,
}

impl FormatRule {
    /// Compile `pattern` into a rule producing `replacement`.
    ///
    /// The replacement uses `$n` / `${n}` to refer to capture groups of the
    /// *other* rule's pattern.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> DomainResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| DomainError::invalid_pattern(e.to_string()))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    /// Rewrite text matched by this rule into `target`'s representation.
    fn rewrite_into(&self, value: &str, target: &FormatRule) -> String {
        self.pattern
            .replace_all(value, target.replacement.as_str())
            .into_owned()
    }
}

impl TryFrom<FormatRuleConfig> for FormatRule {
    type Error = DomainError;

    fn try_from(config: FormatRuleConfig) -> Result<Self, Self::Error> {
        FormatRule::new(&config.pattern, config.replacement)
    }
}

impl From<FormatRule> for FormatRuleConfig {
    fn from(rule: FormatRule) -> Self {
        Self {
            pattern: rule.pattern.as_str().to_string(),
            replacement: rule.replacement,
        }
    }
}

/// Classification of a string against a [`Formatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Formatted,
    Unformatted,
    Invalid,
}

/// Policy object converting strings between formatted and unformatted form.
///
/// Immutable after construction, so one instance can be shared by every
/// value of a domain primitive type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formatter {
    formatted: FormatRule,
    unformatted: FormatRule,
}

impl Formatter {
    pub fn new(formatted: FormatRule, unformatted: FormatRule) -> Self {
        Self {
            formatted,
            unformatted,
        }
    }

    /// Build both rules from raw patterns and replacement templates.
    pub fn from_patterns(
        formatted_pattern: &str,
        formatted_replacement: &str,
        unformatted_pattern: &str,
        unformatted_replacement: &str,
    ) -> DomainResult<Self> {
        Ok(Self::new(
            FormatRule::new(formatted_pattern, formatted_replacement)?,
            FormatRule::new(unformatted_pattern, unformatted_replacement)?,
        ))
    }

    pub fn formatted_rule(&self) -> &FormatRule {
        &self.formatted
    }

    pub fn unformatted_rule(&self) -> &FormatRule {
        &self.unformatted
    }

    pub fn is_formatted(&self, value: &str) -> bool {
        self.formatted.is_match(value)
    }

    pub fn is_unformatted(&self, value: &str) -> bool {
        self.unformatted.is_match(value)
    }

    pub fn is_formattable(&self, value: &str) -> bool {
        self.is_formatted(value) || self.is_unformatted(value)
    }

    /// Which representation `value` is in.
    ///
    /// A value matching both rules reports `Formatted`.
    pub fn classify(&self, value: &str) -> Classification {
        if self.is_formatted(value) {
            Classification::Formatted
        } else if self.is_unformatted(value) {
            Classification::Unformatted
        } else {
            Classification::Invalid
        }
    }

    pub fn assert_formattable(&self, value: &str) -> DomainResult<()> {
        if self.is_formattable(value) {
            Ok(())
        } else {
            tracing::debug!(value, "rejected value matching neither format");
            Err(DomainError::invalid_format(format!(
                "{value:?} matches neither the formatted nor the unformatted pattern"
            )))
        }
    }

    /// Convert `value` to its formatted representation.
    ///
    /// Already formatted input is returned unchanged.
    pub fn format(&self, value: &str) -> DomainResult<String> {
        Self::guard(value)?;
        self.assert_formattable(value)?;

        if self.is_formatted(value) {
            return Ok(value.to_string());
        }

        let formatted = self.unformatted.rewrite_into(value, &self.formatted);
        tracing::trace!(from = value, to = %formatted, "formatted value");
        Ok(formatted)
    }

    /// Convert `value` to its unformatted (canonical) representation.
    ///
    /// Already unformatted input is returned unchanged.
    pub fn unformat(&self, value: &str) -> DomainResult<String> {
        Self::guard(value)?;
        self.assert_formattable(value)?;

        if self.is_unformatted(value) {
            return Ok(value.to_string());
        }

        let unformatted = self.formatted.rewrite_into(value, &self.unformatted);
        tracing::trace!(from = value, to = %unformatted, "unformatted value");
        Ok(unformatted)
    }

    fn guard(value: &str) -> DomainResult<()> {
        if value.is_empty() {
            tracing::debug!("rejected empty value");
            return Err(DomainError::empty_input("value"));
        }
        Ok(())
    }
}

/// A domain primitive that stores a canonical string and renders it through
/// a [`Formatter`].
pub trait Formattable {
    fn formatter(&self) -> &Formatter;

    /// Canonical (unformatted) state.
    fn canonical(&self) -> &str;

    /// Display form. Falls back to the canonical string if the formatter
    /// rejects it, which cannot happen for a well-formed value.
    fn formatted(&self) -> String {
        self.formatter()
            .format(self.canonical())
            .unwrap_or_else(|_| self.canonical().to_string())
    }

    fn unformatted(&self) -> String {
        self.formatter()
            .unformat(self.canonical())
            .unwrap_or_else(|_| self.canonical().to_string())
    }
}
