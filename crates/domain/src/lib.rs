//! Character sheet domain: the stats record, the level table, locale-aware
//! number handling and the display theme cycle.
//!
//! Nothing here touches a UI framework; the player crate binds these types
//! to form inputs.

pub mod error;
pub mod levels;
pub mod locale;
pub mod numeric;
pub mod stats;
pub mod theme;

pub use error::DomainError;

pub use levels::{
    experience_for_level, experience_to_next_level, level_entry, level_for_experience,
    proficiency_bonus, LevelEntry, LEVEL_TABLE, MAX_LEVEL,
};

pub use locale::{LocaleSeparators, PROBE_VALUE};

pub use numeric::{
    apply_sanitized, parse_number, parse_prefix, parse_tolerant, sanitize, NumberKind,
    SanitizeOutcome, SanitizeRule, TolerantRule,
};

pub use stats::{StatField, StatValue, Stats};

pub use theme::{find_theme, ThemeDescriptor, ThemeState, ThemeTarget, DARK, LIGHT, THEMES};
