//! Locale-aware number separators and display formatting.
//!
//! The platform formats [`PROBE_VALUE`] once at startup; the grouping and
//! decimal characters are read back from fixed offsets in that text. This
//! only works for locales whose output has the `1,000.01` shape (one leading
//! digit, a single-character group separator, three digits, a single-character
//! decimal separator), so the probe is validated and callers fall back to
//! [`LocaleSeparators::default`] when it does not match.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::stats::StatValue;

/// Value formatted by the platform to discover the separators.
pub const PROBE_VALUE: f64 = 1000.01;

const THOUSANDS_OFFSET: usize = 1;
const DECIMAL_OFFSET: usize = 5;
const MAX_FRACTION_DIGITS: usize = 3;

/// Thousands and decimal separator characters for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSeparators {
    pub thousands: char,
    pub decimal: char,
}

impl Default for LocaleSeparators {
    fn default() -> Self {
        Self {
            thousands: ',',
            decimal: '.',
        }
    }
}

impl LocaleSeparators {
    pub fn new(thousands: char, decimal: char) -> Self {
        Self { thousands, decimal }
    }

    /// Read the separators out of the platform's rendering of [`PROBE_VALUE`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocaleProbe` if the text is too short, has a
    /// digit where a separator should be, or yields the same character twice.
    pub fn from_probe(formatted: &str) -> Result<Self, DomainError> {
        let chars: Vec<char> = formatted.chars().collect();
        let (Some(&thousands), Some(&decimal)) =
            (chars.get(THOUSANDS_OFFSET), chars.get(DECIMAL_OFFSET))
        else {
            return Err(DomainError::locale_probe(formatted, "too short"));
        };

        if thousands.is_ascii_digit() || decimal.is_ascii_digit() {
            return Err(DomainError::locale_probe(
                formatted,
                "digit at a separator offset",
            ));
        }
        if thousands == decimal {
            return Err(DomainError::locale_probe(
                formatted,
                "separators are identical",
            ));
        }

        Ok(Self { thousands, decimal })
    }

    /// Like [`from_probe`](Self::from_probe), logging and falling back to
    /// `,`/`.` on failure.
    pub fn from_probe_or_default(formatted: &str) -> Self {
        match Self::from_probe(formatted) {
            Ok(separators) => {
                tracing::debug!(
                    thousands = %separators.thousands,
                    decimal = %separators.decimal,
                    "Detected locale separators"
                );
                separators
            }
            Err(e) => {
                tracing::warn!("{}; using default separators", e);
                Self::default()
            }
        }
    }

    /// Drop group separators and turn the locale decimal mark into `.`.
    ///
    /// When the group separator is a space variant, every whitespace
    /// character is dropped so typed ASCII spaces are accepted too.
    pub fn normalize(&self, text: &str) -> String {
        let strip_spaces = self.thousands.is_whitespace();
        text.chars()
            .filter(|&c| c != self.thousands && !(strip_spaces && c.is_whitespace()))
            .map(|c| if c == self.decimal { '.' } else { c })
            .collect()
    }

    /// Render a value for an input field: the locale decimal mark and no
    /// grouping, so [`normalize`](Self::normalize) reads it back unchanged.
    /// Text values are returned unchanged.
    pub fn plain(&self, value: &StatValue) -> String {
        match value {
            StatValue::Raw(text) => text.clone(),
            StatValue::Parsed(_) => value.to_string().replace('.', &self.decimal.to_string()),
        }
    }

    /// Format a value for display. Text values are returned unchanged.
    pub fn format_value(&self, value: &StatValue) -> String {
        match value {
            StatValue::Raw(text) => text.clone(),
            StatValue::Parsed(n) => self.format_number(*n),
        }
    }

    /// Format a number with grouped thousands and at most three fraction digits.
    pub fn format_number(&self, n: f64) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, n.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        if n < 0.0 && !is_zero {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.thousands);
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal);
            out.push_str(frac_part);
        }
        out
    }
}
