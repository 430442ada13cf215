//! Light/dark display theme state.
//!
//! The themes form a fixed cycle. A transition either names its target or
//! advances to the next theme in the cycle; a target that matches nothing
//! also advances.

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

/// Display data for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Position in [`THEMES`]
    pub index: usize,
    /// Class applied to the document root
    pub class_name: &'static str,
    /// Title and aria-label of the toggle control
    pub display_name: &'static str,
    /// Icon shown on the toggle control
    pub icon_src: &'static str,
}

impl fmt::Display for ThemeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name)
    }
}

pub static LIGHT: ThemeDescriptor = ThemeDescriptor {
    index: 0,
    class_name: "light",
    display_name: "Light mode",
    icon_src: "assets/images/sun.svg",
};

pub static DARK: ThemeDescriptor = ThemeDescriptor {
    index: 1,
    class_name: "dark",
    display_name: "Dark mode",
    icon_src: "assets/images/moon.svg",
};

/// All themes in cycle order.
pub static THEMES: [&ThemeDescriptor; 2] = [&LIGHT, &DARK];

/// Look up a theme by class or display name, ignoring case.
pub fn find_theme(name: &str) -> Result<&'static ThemeDescriptor, DomainError> {
    let name = name.trim();
    THEMES
        .iter()
        .copied()
        .find(|t| {
            t.class_name.eq_ignore_ascii_case(name) || t.display_name.eq_ignore_ascii_case(name)
        })
        .ok_or_else(|| DomainError::unknown_theme(name))
}

/// What a theme transition was asked to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTarget<'a> {
    /// Advance to the next theme in the cycle
    Next,
    /// Select by class or display name
    Named(&'a str),
    /// Select a specific descriptor
    Descriptor(&'static ThemeDescriptor),
}

/// The current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    current: &'static ThemeDescriptor,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { current: &LIGHT }
    }
}

impl ThemeState {
    /// Initial theme from the host's dark-mode preference.
    pub fn from_preference(prefers_dark: bool) -> Self {
        Self {
            current: if prefers_dark { &DARK } else { &LIGHT },
        }
    }

    pub fn current(&self) -> &'static ThemeDescriptor {
        self.current
    }

    /// The theme after the current one in the cycle.
    pub fn next(&self) -> &'static ThemeDescriptor {
        THEMES[(self.current.index + 1) % THEMES.len()]
    }

    /// Resolve a target to a descriptor without changing state.
    pub fn resolve(&self, target: ThemeTarget<'_>) -> &'static ThemeDescriptor {
        match target {
            ThemeTarget::Next => self.next(),
            ThemeTarget::Descriptor(theme) => THEMES
                .get(theme.index)
                .copied()
                .filter(|t| *t == theme)
                .unwrap_or_else(|| self.next()),
            ThemeTarget::Named(name) => find_theme(name).unwrap_or_else(|e| {
                tracing::debug!("{}; advancing theme cycle", e);
                self.next()
            }),
        }
    }

    /// Move to the resolved target and return it.
    pub fn transition(&mut self, target: ThemeTarget<'_>) -> &'static ThemeDescriptor {
        self.current = self.resolve(target);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_positions() {
        for (i, theme) in THEMES.iter().enumerate() {
            assert_eq!(theme.index, i);
        }
    }

    #[test]
    fn test_initial_state_follows_preference() {
        assert_eq!(ThemeState::from_preference(false).current(), &LIGHT);
        assert_eq!(ThemeState::from_preference(true).current(), &DARK);
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let mut state = ThemeState::from_preference(false);
        assert_eq!(state.transition(ThemeTarget::Next), &DARK);
        assert_eq!(state.transition(ThemeTarget::Next), &LIGHT);

        let mut state = ThemeState::from_preference(true);
        for _ in 0..2 {
            assert_eq!(state.transition(ThemeTarget::Next), &LIGHT);
            assert_eq!(state.transition(ThemeTarget::Next), &DARK);
        }
    }

    #[test]
    fn test_named_selection() {
        let mut state = ThemeState::default();
        assert_eq!(state.transition(ThemeTarget::Named("dark")), &DARK);
        // Selecting the current theme is a no-op rather than an advance
        assert_eq!(state.transition(ThemeTarget::Named("DARK")), &DARK);
        assert_eq!(state.transition(ThemeTarget::Named("Light mode")), &LIGHT);
    }

    #[test]
    fn test_unknown_name_advances() {
        let mut state = ThemeState::default();
        assert_eq!(state.transition(ThemeTarget::Named("sepia")), &DARK);
        assert_eq!(state.transition(ThemeTarget::Named("")), &LIGHT);
    }

    #[test]
    fn test_descriptor_selection() {
        let mut state = ThemeState::default();
        assert_eq!(state.transition(ThemeTarget::Descriptor(&DARK)), &DARK);
        assert_eq!(state.current().class_name, "dark");
        assert_eq!(state.current().icon_src, "assets/images/moon.svg");
    }

    #[test]
    fn test_find_theme() {
        assert_eq!(find_theme(" light "), Ok(&LIGHT));
        assert_eq!(
            find_theme("sepia"),
            Err(DomainError::unknown_theme("sepia"))
        );
    }
}
