//! Numeric input handling for sheet fields.
//!
//! Two pipelines share the same locale normalization:
//! - sanitization clamps a number into bounds or rejects the edit, so the
//!   input snaps back to the last stored value;
//! - tolerant parsing stores a number when one can be read and otherwise
//!   keeps the text as typed.
//!
//! Parsers read the longest numeric prefix of the input, so `"12abc"` reads
//! as 12 and `"1234.56"` reads as 1234 for integers.

use crate::error::DomainError;
use crate::locale::LocaleSeparators;
use crate::stats::{StatField, StatValue, Stats};

/// Which parser a numeric field uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberKind {
    #[default]
    Integer,
    Float,
}

/// Read the longest numeric prefix of `text` after leading whitespace.
///
/// Returns `None` when the prefix holds no digits.
pub fn parse_prefix(text: &str, kind: NumberKind) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    end += count_digits(&bytes[end..]);
    let mut has_digits = end > int_start;

    if kind == NumberKind::Float {
        if bytes.get(end) == Some(&b'.') {
            let frac_digits = count_digits(&bytes[end + 1..]);
            if frac_digits > 0 || has_digits {
                end += 1 + frac_digits;
                has_digits |= frac_digits > 0;
            }
        }
        if has_digits && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(&bytes[exp_end..]);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }
    }

    if !has_digits {
        return None;
    }
    text[..end].parse::<f64>().ok()
}

/// Like [`parse_prefix`], failing with `DomainError::Parse` when no digits lead.
pub fn parse_number(text: &str, kind: NumberKind) -> Result<f64, DomainError> {
    parse_prefix(text, kind).ok_or_else(|| DomainError::parse(format!("no digits in {:?}", text)))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Remove letters other than the exponent marker, trim stray markers at
/// either end and keep only the last marker when several remain.
fn strip_disallowed(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() || c.eq_ignore_ascii_case(&'e'))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let trimmed = kept.trim_matches(|c: char| c == 'e' || c.is_whitespace());

    match trimmed.rfind('e') {
        Some(last) => trimmed
            .char_indices()
            .filter(|&(i, c)| c != 'e' || i == last)
            .map(|(_, c)| c)
            .collect(),
        None => trimmed.to_string(),
    }
}

/// Bounds and parser for a sanitized numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanitizeRule {
    pub kind: NumberKind,
    pub min: f64,
    pub max: f64,
    /// Keep unparsable text in the input instead of reverting it; an
    /// emptied input still reverts
    pub allow_empty: bool,
}

impl Default for SanitizeRule {
    fn default() -> Self {
        Self {
            kind: NumberKind::Integer,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            allow_empty: false,
        }
    }
}

impl SanitizeRule {
    /// Unbounded integer rule
    pub fn integer() -> Self {
        Self::default()
    }

    /// Unbounded floating-point rule
    pub fn float() -> Self {
        Self {
            kind: NumberKind::Float,
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn with_bounds(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    pub fn allowing_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// `max(min, min(max, value))`
    pub fn clamp(&self, value: f64) -> f64 {
        self.min.max(self.max.min(value))
    }
}

/// Result of running raw input through a [`SanitizeRule`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SanitizeOutcome {
    /// Parsed and clamped value to store
    Accepted(f64),
    /// Unusable input; the field keeps and redisplays its stored value
    Rejected,
    /// Unparsable input on a field that allows empty values; the store is
    /// untouched and the input keeps the text as typed
    Unparsed,
}

/// Run raw input text through the sanitization pipeline.
///
/// Input reverts when it does not parse and `allow_empty` is unset, or when
/// it is empty and `allow_empty` is set.
pub fn sanitize(
    raw: &str,
    rule: &SanitizeRule,
    separators: &LocaleSeparators,
) -> SanitizeOutcome {
    let cleaned = strip_disallowed(&separators.normalize(raw));
    match parse_number(&cleaned, rule.kind) {
        Ok(value) => SanitizeOutcome::Accepted(rule.clamp(value)),
        Err(e) if rule.allow_empty && !raw.trim().is_empty() => {
            tracing::debug!(input = raw, "{}; keeping text", e);
            SanitizeOutcome::Unparsed
        }
        Err(e) => {
            tracing::debug!(input = raw, "{}; reverting", e);
            SanitizeOutcome::Rejected
        }
    }
}

/// Sanitize `raw` into `field`, returning the text the input should now show.
///
/// Accepted and reverted values are shown with the session's decimal mark
/// and no grouping, so committing the shown text again stores the same
/// value. Rejected input leaves the store untouched and yields the stored
/// value.
pub fn apply_sanitized(
    stats: &mut Stats,
    field: StatField,
    raw: &str,
    rule: &SanitizeRule,
    separators: &LocaleSeparators,
) -> String {
    match sanitize(raw, rule, separators) {
        SanitizeOutcome::Accepted(value) => {
            stats.set(field, value);
        }
        SanitizeOutcome::Unparsed => return raw.to_string(),
        SanitizeOutcome::Rejected => {
            tracing::debug!(field = %field, "Reverting to stored value");
        }
    }
    separators.plain(stats.get(field))
}

/// Options for tolerant parsing of free-text numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TolerantRule {
    /// Keep text that does not parse instead of ignoring the edit
    pub allow_unparsed: bool,
    /// Keep the text whenever the parsed number does not represent it exactly
    pub prefer_unparsed: bool,
}

impl Default for TolerantRule {
    fn default() -> Self {
        Self {
            allow_unparsed: true,
            prefer_unparsed: false,
        }
    }
}

/// Parse `raw` tolerantly.
///
/// Returns the value to store, or `None` if the edit should be ignored.
pub fn parse_tolerant(
    raw: &str,
    rule: &TolerantRule,
    separators: &LocaleSeparators,
) -> Option<StatValue> {
    let parsed = parse_prefix(&separators.normalize(raw), NumberKind::Integer);

    match parsed {
        Some(n) if rule.prefer_unparsed && raw.trim().parse::<f64>().ok() != Some(n) => {
            Some(StatValue::Raw(raw.to_string()))
        }
        Some(n) => Some(StatValue::Parsed(n)),
        None if rule.allow_unparsed => Some(StatValue::Raw(raw.to_string())),
        None => None,
    }
}
