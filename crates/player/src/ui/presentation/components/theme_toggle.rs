//! Theme controls - the light/dark toggle button and an explicit picker

use charsheet_domain::{ThemeTarget, THEMES};
use dioxus::prelude::*;

use crate::presentation::state::use_sheet_state;
use crate::ui::use_platform;

/// Button that advances the theme cycle
///
/// Its title, aria-label and icon mirror the current theme.
#[component]
pub fn ThemeToggle() -> Element {
    let platform = use_platform();
    let mut model = use_sheet_state().model;
    let attrs = model.read().toggle_attributes();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{attrs.title}",
            aria_label: "{attrs.aria_label}",
            onclick: move |_| {
                model.write().toggle_theme(platform.as_ref());
            },
            img {
                class: "theme-toggle-icon",
                src: "{attrs.icon_src}",
                alt: "",
            }
        }
    }
}

/// Select listing every theme by display name
#[component]
pub fn ThemePicker() -> Element {
    let platform = use_platform();
    let mut model = use_sheet_state().model;
    let current = model.read().theme();

    rsx! {
        select {
            class: "theme-picker",
            aria_label: "Theme",
            onchange: move |e: FormEvent| {
                model
                    .write()
                    .select_theme(ThemeTarget::Named(&e.value()), platform.as_ref());
            },
            for theme in THEMES.iter() {
                option {
                    key: "{theme.class_name}",
                    value: "{theme.class_name}",
                    selected: theme.index == current.index,
                    "{theme.display_name}"
                }
            }
        }
    }
}
