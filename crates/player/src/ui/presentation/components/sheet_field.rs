//! Sheet Field - one labelled input bound to the sheet model

use charsheet_domain::StatField;
use dioxus::prelude::*;

use crate::application::{FieldBinding, FieldInput};
use crate::presentation::state::use_sheet_state;

/// A labelled input for one stats field
///
/// Keystrokes go through `handle_input`; the change event (blur or enter)
/// goes through `handle_change`, which is where sanitized fields clamp or
/// revert.
#[component]
pub fn SheetField(field: StatField) -> Element {
    let mut model = use_sheet_state().model;
    let displayed = model.read().displayed(field).to_string();
    let numeric = !matches!(FieldBinding::for_field(field), FieldBinding::Text);
    let name = field.as_str();
    let label = field.label();

    rsx! {
        div {
            class: "sheet-field",
            label {
                r#for: "{name}",
                "{label}"
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "text",
                inputmode: if numeric { "numeric" } else { "text" },
                value: "{displayed}",
                oninput: move |e: FormEvent| {
                    model.write().handle_input(&FieldInput::new(name, e.value()));
                },
                onchange: move |e: FormEvent| {
                    model.write().handle_change(&FieldInput::new(name, e.value()));
                },
            }
        }
    }
}
