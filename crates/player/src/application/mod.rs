//! Application layer: the sheet view-model and its handlers.

pub mod sheet_model;

pub use sheet_model::{FieldBinding, FieldInput, LevelSummary, SheetModel, ToggleAttributes};
