//! Level table for D&D 5th Edition characters.
//!
//! Experience thresholds and proficiency bonus per level. Index 0 repeats
//! level 1 so the table can be indexed directly by level.

use serde::Serialize;

/// Highest character level in the table.
pub const MAX_LEVEL: u8 = 20;

/// Universal stats of a character at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelEntry {
    /// Experience needed to reach this level
    pub experience: u32,
    /// Proficiency bonus at this level
    pub proficiency_bonus: i32,
}

const fn entry(experience: u32, proficiency_bonus: i32) -> LevelEntry {
    LevelEntry {
        experience,
        proficiency_bonus,
    }
}

/// The level table, indexed by level.
pub static LEVEL_TABLE: [LevelEntry; 21] = [
    entry(0, 2),      // 0 (same as level 1)
    entry(0, 2),      // 1
    entry(300, 2),    // 2
    entry(900, 2),    // 3
    entry(2700, 2),   // 4
    entry(6500, 3),   // 5
    entry(14000, 3),  // 6
    entry(23000, 3),  // 7
    entry(34000, 3),  // 8
    entry(48000, 4),  // 9
    entry(64000, 4),  // 10
    entry(85000, 4),  // 11
    entry(100000, 4), // 12
    entry(120000, 5), // 13
    entry(140000, 5), // 14
    entry(165000, 5), // 15
    entry(195000, 5), // 16
    entry(225000, 6), // 17
    entry(265000, 6), // 18
    entry(305000, 6), // 19
    entry(355000, 6), // 20
];

/// Table entry for a level. Levels above 20 read the level 20 entry.
pub fn level_entry(level: u8) -> &'static LevelEntry {
    &LEVEL_TABLE[level.min(MAX_LEVEL) as usize]
}

/// Proficiency bonus for a level.
pub fn proficiency_bonus(level: u8) -> i32 {
    level_entry(level).proficiency_bonus
}

/// Experience required to reach a level.
pub fn experience_for_level(level: u8) -> u32 {
    level_entry(level).experience
}

/// Experience required for the level after `level`, or `None` at max level.
pub fn experience_to_next_level(level: u8) -> Option<u32> {
    if level >= MAX_LEVEL {
        return None;
    }
    Some(experience_for_level(level + 1))
}

/// Highest level whose threshold has been reached.
pub fn level_for_experience(experience: u32) -> u8 {
    LEVEL_TABLE
        .iter()
        .rposition(|entry| experience >= entry.experience)
        .map(|i| i.max(1) as u8)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_duplicates_level_one() {
        assert_eq!(LEVEL_TABLE[0], LEVEL_TABLE[1]);
    }

    #[test]
    fn test_thresholds_are_ascending() {
        for pair in LEVEL_TABLE[1..].windows(2) {
            assert!(pair[0].experience < pair[1].experience);
            assert!(pair[0].proficiency_bonus <= pair[1].proficiency_bonus);
        }
    }

    #[test]
    fn test_proficiency_bonus_steps() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(13), 5);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn test_levels_past_table_clamp() {
        assert_eq!(level_entry(35), &LEVEL_TABLE[20]);
        assert_eq!(experience_to_next_level(20), None);
        assert_eq!(experience_to_next_level(25), None);
    }

    #[test]
    fn test_experience_to_next_level() {
        assert_eq!(experience_to_next_level(0), Some(0));
        assert_eq!(experience_to_next_level(1), Some(300));
        assert_eq!(experience_to_next_level(19), Some(355000));
    }

    #[test]
    fn test_level_for_experience() {
        assert_eq!(level_for_experience(0), 1);
        assert_eq!(level_for_experience(299), 1);
        assert_eq!(level_for_experience(300), 2);
        assert_eq!(level_for_experience(6500), 5);
        assert_eq!(level_for_experience(354999), 19);
        assert_eq!(level_for_experience(1_000_000), 20);
    }
}
