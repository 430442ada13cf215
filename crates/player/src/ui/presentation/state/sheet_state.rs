//! Sheet state using Dioxus signals
//!
//! Wraps the [`SheetModel`] in a signal so every handler mutates the single
//! store synchronously and components re-render from it.

use dioxus::prelude::*;

use crate::application::SheetModel;

/// Reactive holder for the sheet view-model
#[derive(Clone, Copy)]
pub struct SheetState {
    pub model: Signal<SheetModel>,
}

impl SheetState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(model: SheetModel) -> Self {
        Self {
            model: Signal::new(model),
        }
    }
}

/// Hook to access the sheet state from Dioxus context
pub fn use_sheet_state() -> SheetState {
    use_context::<SheetState>()
}
