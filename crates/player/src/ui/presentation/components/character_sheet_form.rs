//! Character Sheet Form - the page body

use charsheet_domain::StatField;
use dioxus::prelude::*;

use super::{LevelPanel, LevelTable, SheetField, ThemePicker, ThemeToggle};

/// Header, the stats inputs and the level reference
#[component]
pub fn CharacterSheetForm() -> Element {
    rsx! {
        form {
            class: "character-sheet",
            onsubmit: move |e: FormEvent| e.prevent_default(),

            header {
                class: "sheet-header",
                h1 { "Character Sheet" }
                div {
                    class: "theme-controls",
                    ThemePicker {}
                    ThemeToggle {}
                }
            }

            section {
                class: "sheet-fields",
                for field in StatField::ALL {
                    SheetField { key: "{field}", field }
                }
            }

            section {
                class: "sheet-levels",
                LevelPanel {}
                LevelTable {}
            }
        }
    }
}
