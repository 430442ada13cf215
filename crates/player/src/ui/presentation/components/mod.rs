//! Character sheet components

mod character_sheet_form;
mod level_table;
mod sheet_field;
mod theme_toggle;

pub use character_sheet_form::CharacterSheetForm;
pub use level_table::{LevelPanel, LevelTable};
pub use sheet_field::SheetField;
pub use theme_toggle::{ThemePicker, ThemeToggle};
