//! Level table and the current level's derived values

use charsheet_domain::{StatField, LEVEL_TABLE};
use dioxus::prelude::*;

use crate::presentation::state::use_sheet_state;

/// Proficiency bonus and experience targets for the entered level
#[component]
pub fn LevelPanel() -> Element {
    let model = use_sheet_state().model;
    let model = model.read();
    let summary = model.level_summary();
    let next = summary
        .next_level_experience
        .map(|xp| model.format_number(xp as f64))
        .unwrap_or_else(|| "Max level".to_string());
    let experience = model.formatted(StatField::CharacterExperience);

    rsx! {
        dl {
            class: "level-panel",
            dt { "Proficiency Bonus" }
            dd { "+{summary.proficiency_bonus}" }
            dt { "Experience" }
            dd { "{experience}" }
            dt { "Next Level At" }
            dd { "{next}" }
            if let Some(level) = summary.level_from_experience {
                if level != summary.level {
                    dt { "Level By Experience" }
                    dd { class: "level-mismatch", "{level}" }
                }
            }
        }
    }
}

/// The full level table, highlighting the current level
#[component]
pub fn LevelTable() -> Element {
    let model = use_sheet_state().model;
    let model = model.read();
    let current = model.level_summary().level;

    rsx! {
        table {
            class: "level-table",
            thead {
                tr {
                    th { "Level" }
                    th { "Experience" }
                    th { "Proficiency" }
                }
            }
            tbody {
                // Row 0 only exists so the table can be indexed by level
                for (level, entry) in LEVEL_TABLE.iter().enumerate().skip(1) {
                    tr {
                        key: "{level}",
                        class: if level == current as usize { "current" } else { "" },
                        td { "{level}" }
                        td { {model.format_number(entry.experience as f64)} }
                        td { "+{entry.proficiency_bonus}" }
                    }
                }
            }
        }
    }
}
