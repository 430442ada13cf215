//! Stats record - the fields of the character sheet and their current values.
//!
//! Field names arriving from input events are resolved through [`StatField`]
//! instead of being used as open-ended keys, and each value records whether
//! the last edit produced a number or only text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The fields shown on the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    CharacterName,
    CharacterLevel,
    CharacterClass,
    PlayerName,
    CharacterBackground,
    CharacterRace,
    CharacterSize,
    CharacterExperience,
}

impl StatField {
    /// All fields in sheet order.
    pub const ALL: [StatField; 8] = [
        Self::CharacterName,
        Self::CharacterLevel,
        Self::CharacterClass,
        Self::PlayerName,
        Self::CharacterBackground,
        Self::CharacterRace,
        Self::CharacterSize,
        Self::CharacterExperience,
    ];

    /// Returns the input `name` attribute used by the form (e.g. "characterLevel").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CharacterName => "characterName",
            Self::CharacterLevel => "characterLevel",
            Self::CharacterClass => "characterClass",
            Self::PlayerName => "playerName",
            Self::CharacterBackground => "characterBackground",
            Self::CharacterRace => "characterRace",
            Self::CharacterSize => "characterSize",
            Self::CharacterExperience => "characterExperience",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CharacterName => "Character Name",
            Self::CharacterLevel => "Level",
            Self::CharacterClass => "Class",
            Self::PlayerName => "Player Name",
            Self::CharacterBackground => "Background",
            Self::CharacterRace => "Race",
            Self::CharacterSize => "Size",
            Self::CharacterExperience => "Experience Points",
        }
    }

    /// Position of the field in [`StatField::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::CharacterName => 0,
            Self::CharacterLevel => 1,
            Self::CharacterClass => 2,
            Self::PlayerName => 3,
            Self::CharacterBackground => 4,
            Self::CharacterRace => 5,
            Self::CharacterSize => 6,
            Self::CharacterExperience => 7,
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

/// A field value: either text as typed or a number that parsed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Pending or unparsable text, stored as entered
    Raw(String),
    /// A successfully parsed number
    Parsed(f64),
}

impl StatValue {
    /// An empty text value
    pub fn empty() -> Self {
        Self::Raw(String::new())
    }

    /// Returns the number if the value parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Parsed(n) => Some(*n),
            Self::Raw(_) => None,
        }
    }

    /// Returns true for `Raw("")`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Raw(s) if s.is_empty())
    }
}

impl Default for StatValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        Self::Parsed(n)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

/// Plain rendering with `.` as the decimal mark and no grouping.
///
/// Inputs show numbers through `LocaleSeparators::plain`, which swaps in the
/// session's decimal mark.
impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(s) => f.write_str(s),
            Self::Parsed(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Parsed(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Parsed(n) => write!(f, "{}", n),
        }
    }
}

/// The stats record: one value per [`StatField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    character_name: StatValue,
    character_level: StatValue,
    character_class: StatValue,
    player_name: StatValue,
    character_background: StatValue,
    character_race: StatValue,
    character_size: StatValue,
    character_experience: StatValue,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            character_name: StatValue::empty(),
            character_level: StatValue::Parsed(0.0),
            character_class: StatValue::empty(),
            player_name: StatValue::empty(),
            character_background: StatValue::empty(),
            character_race: StatValue::empty(),
            character_size: StatValue::empty(),
            character_experience: StatValue::empty(),
        }
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: StatField) -> &StatValue {
        match field {
            StatField::CharacterName => &self.character_name,
            StatField::CharacterLevel => &self.character_level,
            StatField::CharacterClass => &self.character_class,
            StatField::PlayerName => &self.player_name,
            StatField::CharacterBackground => &self.character_background,
            StatField::CharacterRace => &self.character_race,
            StatField::CharacterSize => &self.character_size,
            StatField::CharacterExperience => &self.character_experience,
        }
    }

    fn slot(&mut self, field: StatField) -> &mut StatValue {
        match field {
            StatField::CharacterName => &mut self.character_name,
            StatField::CharacterLevel => &mut self.character_level,
            StatField::CharacterClass => &mut self.character_class,
            StatField::PlayerName => &mut self.player_name,
            StatField::CharacterBackground => &mut self.character_background,
            StatField::CharacterRace => &mut self.character_race,
            StatField::CharacterSize => &mut self.character_size,
            StatField::CharacterExperience => &mut self.character_experience,
        }
    }

    /// Replace a field's value, returning the previous one.
    pub fn set(&mut self, field: StatField, value: impl Into<StatValue>) -> StatValue {
        std::mem::replace(self.slot(field), value.into())
    }

    /// Iterate fields and values in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (StatField, &StatValue)> + '_ {
        StatField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// The character level if it parsed, used for level table lookups.
    pub fn level(&self) -> Option<u8> {
        self.character_level
            .as_number()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n.min(u8::MAX as f64) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in StatField::ALL {
            assert_eq!(field.as_str().parse::<StatField>(), Ok(field));
        }
        // ALL must line up with the storage slots
        for (i, field) in StatField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = "characterAge"
            .parse::<StatField>()
            .expect_err("unknown names must not resolve");
        assert_eq!(err, DomainError::unknown_field("characterAge"));
        assert!("CharacterName".parse::<StatField>().is_err());
    }

    #[test]
    fn test_default_stats() {
        let stats = Stats::new();
        assert_eq!(stats.get(StatField::CharacterLevel), &StatValue::Parsed(0.0));
        assert!(stats.get(StatField::CharacterName).is_empty());
        assert!(stats.get(StatField::CharacterExperience).is_empty());
        assert_eq!(stats.level(), Some(0));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut stats = Stats::new();
        let previous = stats.set(StatField::CharacterLevel, 4.0);
        assert_eq!(previous, StatValue::Parsed(0.0));
        assert_eq!(stats.level(), Some(4));

        stats.set(StatField::CharacterClass, "Wizard");
        assert_eq!(
            stats.get(StatField::CharacterClass),
            &StatValue::Raw("Wizard".to_string())
        );
    }

    #[test]
    fn test_level_requires_parsed_value() {
        let mut stats = Stats::new();
        stats.set(StatField::CharacterLevel, "five");
        assert_eq!(stats.level(), None);
    }

    #[test]
    fn test_display_plain_numbers() {
        assert_eq!(StatValue::Parsed(1000.0).to_string(), "1000");
        assert_eq!(StatValue::Parsed(-3.0).to_string(), "-3");
        assert_eq!(StatValue::Parsed(2.5).to_string(), "2.5");
        assert_eq!(StatValue::Parsed(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(StatValue::Raw("1,2".to_string()).to_string(), "1,2");
    }

    #[test]
    fn test_serializes_with_form_names() {
        let mut stats = Stats::new();
        stats.set(StatField::CharacterName, "Vex");
        stats.set(StatField::CharacterExperience, 300.0);

        let json = serde_json::to_value(&stats).expect("serialize");
        assert_eq!(json["characterName"], "Vex");
        assert_eq!(json["characterLevel"], 0.0);
        assert_eq!(json["characterExperience"], 300.0);

        let back: Stats = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, stats);
    }
}
