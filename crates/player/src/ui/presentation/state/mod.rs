//! Presentation state provided through Dioxus context

mod sheet_state;

pub use sheet_state::{use_sheet_state, SheetState};
