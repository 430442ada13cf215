use crate::application::SheetModel;
use crate::config::PlayerConfig;
use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::components::CharacterSheetForm;
use presentation::state::SheetState;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from `main.rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let config = use_context::<PlayerConfig>();
    let platform = use_platform();

    // Must be created inside an active Dioxus runtime.
    let state = use_context_provider({
        let platform = platform.clone();
        move || SheetState::new(SheetModel::from_platform(platform.as_ref(), config.theme))
    });

    // Reflect the initial theme onto the document root once mounted
    {
        let platform = platform.clone();
        use_effect(move || state.model.peek().apply_theme(platform.as_ref()));
    }

    // Keep the page title in step with the character name
    use_effect(move || state.model.read().apply_page_title(platform.as_ref()));

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/sheet.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        CharacterSheetForm {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        CharacterSheetForm {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        main {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        main {
            class: "shell shell-mobile",
            {children}
        }
    }
}
