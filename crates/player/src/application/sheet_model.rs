//! Sheet Model - the view-model behind the character sheet form
//!
//! Owns the stats record, the text each input currently displays, the
//! session's locale separators and the theme state. Components call the
//! handlers here from their event closures; nothing in this module depends
//! on Dioxus so the handlers can be exercised directly in tests.

use charsheet_domain::{
    apply_sanitized, experience_to_next_level, level_for_experience, parse_tolerant,
    proficiency_bonus, LocaleSeparators, SanitizeRule, StatField, StatValue, Stats,
    ThemeDescriptor, ThemeState, ThemeTarget, TolerantRule, DARK, MAX_LEVEL, PROBE_VALUE,
};

use crate::ports::outbound::PlatformPort;

const PAGE_TITLE: &str = "Character Sheet";

/// Payload of an input or change event: the input's `name` and current `value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// How a field's input is bound to the store
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldBinding {
    /// Store the text as typed
    Text,
    /// Clamp on change, reverting rejected input
    Sanitized(SanitizeRule),
    /// Store a number when one parses, otherwise the text
    Tolerant(TolerantRule),
}

impl FieldBinding {
    /// The binding the form uses for a field.
    pub fn for_field(field: StatField) -> Self {
        match field {
            StatField::CharacterLevel => {
                Self::Sanitized(SanitizeRule::integer().with_bounds(1.0, MAX_LEVEL as f64))
            }
            StatField::CharacterExperience => Self::Tolerant(TolerantRule::default()),
            _ => Self::Text,
        }
    }
}

/// Attributes mirrored onto the theme toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAttributes {
    pub title: &'static str,
    pub aria_label: &'static str,
    pub icon_src: &'static str,
}

impl From<&ThemeDescriptor> for ToggleAttributes {
    fn from(theme: &ThemeDescriptor) -> Self {
        Self {
            title: theme.display_name,
            aria_label: theme.display_name,
            icon_src: theme.icon_src,
        }
    }
}

/// Level table values for the sheet's current level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: u8,
    pub proficiency_bonus: i32,
    /// Experience needed for the next level, `None` at max level
    pub next_level_experience: Option<u32>,
    /// Level implied by the experience field, when it holds a number
    pub level_from_experience: Option<u8>,
}

/// The character sheet view-model
#[derive(Clone, Debug, PartialEq)]
pub struct SheetModel {
    stats: Stats,
    displayed: [String; 8],
    separators: LocaleSeparators,
    theme: ThemeState,
}

impl Default for SheetModel {
    fn default() -> Self {
        Self::new(LocaleSeparators::default(), ThemeState::default())
    }
}

impl SheetModel {
    pub fn new(separators: LocaleSeparators, theme: ThemeState) -> Self {
        let stats = Stats::new();
        let displayed = StatField::ALL.map(|field| separators.plain(stats.get(field)));
        Self {
            stats,
            displayed,
            separators,
            theme,
        }
    }

    /// Build the model at mount: probe the host's number format and pick the
    /// initial theme from `theme_override` or the host's dark-mode preference.
    pub fn from_platform(
        platform: &dyn PlatformPort,
        theme_override: Option<&'static ThemeDescriptor>,
    ) -> Self {
        let probe = platform.format_number(PROBE_VALUE);
        let separators = LocaleSeparators::from_probe_or_default(&probe);

        let prefers_dark = match theme_override {
            Some(theme) => theme == &DARK,
            None => platform.prefers_dark_mode(),
        };

        Self::new(separators, ThemeState::from_preference(prefers_dark))
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn separators(&self) -> LocaleSeparators {
        self.separators
    }

    /// Text the field's input currently shows
    pub fn displayed(&self, field: StatField) -> &str {
        &self.displayed[field.index()]
    }

    /// The stored value formatted for display
    pub fn formatted(&self, field: StatField) -> String {
        self.separators.format_value(self.stats.get(field))
    }

    /// Format a number for display with the session's separators
    pub fn format_number(&self, value: f64) -> String {
        self.separators.format_number(value)
    }

    fn resolve(&self, input: &FieldInput) -> Option<StatField> {
        match input.name.parse::<StatField>() {
            Ok(field) => Some(field),
            Err(e) => {
                tracing::warn!("Ignoring input event: {}", e);
                None
            }
        }
    }

    fn show(&mut self, field: StatField, text: String) {
        self.displayed[field.index()] = text;
    }

    // -------------------------------------------------------------------------
    // Input handlers
    // -------------------------------------------------------------------------

    /// Store the input's text as-is.
    pub fn apply_change(&mut self, input: &FieldInput) {
        let Some(field) = self.resolve(input) else {
            return;
        };
        self.stats.set(field, input.value.as_str());
        self.show(field, input.value.clone());
    }

    /// Store a parsed number when possible, otherwise the text if `rule` allows.
    pub fn apply_parsed_change(&mut self, input: &FieldInput, rule: TolerantRule) {
        let Some(field) = self.resolve(input) else {
            return;
        };
        self.show(field, input.value.clone());
        match parse_tolerant(&input.value, &rule, &self.separators) {
            Some(value) => {
                self.stats.set(field, value);
            }
            None => {
                tracing::debug!(field = %field, input = %input.value, "Unparsed input not stored");
            }
        }
    }

    /// Sanitize a numeric input and return the text it must now display.
    ///
    /// Unknown fields leave the input untouched.
    pub fn sanitize_number(&mut self, input: &FieldInput, rule: SanitizeRule) -> String {
        let Some(field) = self.resolve(input) else {
            return input.value.clone();
        };
        let shown = apply_sanitized(
            &mut self.stats,
            field,
            &input.value,
            &rule,
            &self.separators,
        );
        self.show(field, shown.clone());
        shown
    }

    /// Keystroke handler: routes by the field's binding.
    ///
    /// Sanitized fields only track the typed text until the change event.
    pub fn handle_input(&mut self, input: &FieldInput) {
        let Some(field) = self.resolve(input) else {
            return;
        };
        match FieldBinding::for_field(field) {
            FieldBinding::Text => self.apply_change(input),
            FieldBinding::Tolerant(rule) => self.apply_parsed_change(input, rule),
            FieldBinding::Sanitized(_) => self.show(field, input.value.clone()),
        }
    }

    /// Change handler: sanitizes fields bound with a [`SanitizeRule`].
    pub fn handle_change(&mut self, input: &FieldInput) {
        let Some(field) = self.resolve(input) else {
            return;
        };
        if let FieldBinding::Sanitized(rule) = FieldBinding::for_field(field) {
            self.sanitize_number(input, rule);
        }
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    pub fn theme(&self) -> &'static ThemeDescriptor {
        self.theme.current()
    }

    pub fn toggle_attributes(&self) -> ToggleAttributes {
        ToggleAttributes::from(self.theme())
    }

    /// Reflect the current theme onto the document root.
    pub fn apply_theme(&self, platform: &dyn PlatformPort) {
        platform.set_root_class(self.theme().class_name);
    }

    /// Reflect the page title onto the document.
    pub fn apply_page_title(&self, platform: &dyn PlatformPort) {
        platform.set_page_title(&self.page_title());
    }

    /// Select a theme and reflect it onto the document.
    pub fn select_theme(
        &mut self,
        target: ThemeTarget<'_>,
        platform: &dyn PlatformPort,
    ) -> &'static ThemeDescriptor {
        let previous = self.theme();
        let theme = self.theme.transition(target);
        tracing::info!(from = %previous, to = %theme, "Theme changed");
        self.apply_theme(platform);
        theme
    }

    /// Advance to the next theme in the cycle.
    pub fn toggle_theme(&mut self, platform: &dyn PlatformPort) -> &'static ThemeDescriptor {
        self.select_theme(ThemeTarget::Next, platform)
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    pub fn level_summary(&self) -> LevelSummary {
        let level = self.stats.level().unwrap_or(0).min(MAX_LEVEL);
        let level_from_experience = self
            .stats
            .get(StatField::CharacterExperience)
            .as_number()
            .filter(|xp| xp.is_finite() && *xp >= 0.0)
            .map(|xp| level_for_experience(xp.min(u32::MAX as f64) as u32));

        LevelSummary {
            level,
            proficiency_bonus: proficiency_bonus(level),
            next_level_experience: experience_to_next_level(level),
            level_from_experience,
        }
    }

    /// Page title, including the character's name once one is entered
    pub fn page_title(&self) -> String {
        match self.stats.get(StatField::CharacterName) {
            StatValue::Raw(name) if !name.trim().is_empty() => {
                format!("{} - {}", name.trim(), PAGE_TITLE)
            }
            _ => PAGE_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockPlatformPort;
    use charsheet_domain::LIGHT;

    fn english_platform(prefers_dark: bool) -> MockPlatformPort {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_format_number()
            .returning(|_| "1,000.01".to_string());
        platform
            .expect_prefers_dark_mode()
            .return_const(prefers_dark);
        platform
    }

    fn level(value: &str) -> FieldInput {
        FieldInput::new("characterLevel", value)
    }

    #[test]
    fn test_from_platform_reads_probe_and_preference() {
        let model = SheetModel::from_platform(&english_platform(true), None);
        assert_eq!(model.separators(), LocaleSeparators::new(',', '.'));
        assert_eq!(model.theme(), &DARK);

        let mut german = MockPlatformPort::new();
        german
            .expect_format_number()
            .returning(|_| "1.000,01".to_string());
        german.expect_prefers_dark_mode().return_const(false);
        let model = SheetModel::from_platform(&german, None);
        assert_eq!(model.separators(), LocaleSeparators::new('.', ','));
        assert_eq!(model.theme(), &LIGHT);
    }

    #[test]
    fn test_theme_override_skips_host_preference() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_format_number()
            .returning(|_| "1,000.01".to_string());
        platform.expect_prefers_dark_mode().never();

        let model = SheetModel::from_platform(&platform, Some(&DARK));
        assert_eq!(model.theme(), &DARK);
    }

    #[test]
    fn test_unusable_probe_falls_back() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_format_number()
            .returning(|_| "1000,01".to_string());
        platform.expect_prefers_dark_mode().return_const(false);

        let model = SheetModel::from_platform(&platform, None);
        assert_eq!(model.separators(), LocaleSeparators::default());
    }

    #[test]
    fn test_initial_display_matches_stats() {
        let model = SheetModel::default();
        assert_eq!(model.displayed(StatField::CharacterLevel), "0");
        assert_eq!(model.displayed(StatField::CharacterName), "");
    }

    #[test]
    fn test_apply_change_stores_text() {
        let mut model = SheetModel::default();
        model.apply_change(&FieldInput::new("characterRace", "Tiefling"));
        assert_eq!(
            model.stats().get(StatField::CharacterRace),
            &StatValue::Raw("Tiefling".to_string())
        );
        assert_eq!(model.displayed(StatField::CharacterRace), "Tiefling");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut model = SheetModel::default();
        let before = model.clone();
        model.apply_change(&FieldInput::new("characterAge", "40"));
        model.handle_input(&FieldInput::new("characterAge", "40"));
        let shown = model.sanitize_number(&FieldInput::new("hp", "12"), SanitizeRule::integer());
        assert_eq!(shown, "12");
        assert_eq!(model, before);
    }

    #[test]
    fn test_sanitize_clamps_and_redisplays() {
        let mut model = SheetModel::default();
        let rule = SanitizeRule::integer().with_bounds(0.0, 1000.0);
        let input = FieldInput::new("characterExperience", "1,234.56a");
        let shown = model.sanitize_number(&input, rule);
        assert_eq!(shown, "1000");
        assert_eq!(
            model.stats().get(StatField::CharacterExperience),
            &StatValue::Parsed(1000.0)
        );
        assert_eq!(model.displayed(StatField::CharacterExperience), "1000");
    }

    #[test]
    fn test_sanitize_reverts_invalid_text() {
        let mut model = SheetModel::default();
        model.handle_input(&level("7"));
        model.handle_change(&level("7"));
        assert_eq!(model.stats().level(), Some(7));

        model.handle_input(&level("seven"));
        assert_eq!(model.displayed(StatField::CharacterLevel), "seven");
        // Store is untouched until the change event
        assert_eq!(model.stats().level(), Some(7));

        model.handle_change(&level("seven"));
        assert_eq!(model.displayed(StatField::CharacterLevel), "7");
        assert_eq!(model.stats().level(), Some(7));
    }

    #[test]
    fn test_level_binding_clamps_to_table() {
        let mut model = SheetModel::default();
        model.handle_change(&level("35"));
        assert_eq!(model.stats().level(), Some(20));
        model.handle_change(&level("0"));
        assert_eq!(model.stats().level(), Some(1));
    }

    #[test]
    fn test_experience_binding_is_tolerant() {
        let mut model = SheetModel::default();
        let xp = |v: &str| FieldInput::new("characterExperience", v);

        model.handle_input(&xp("6,500"));
        assert_eq!(
            model.stats().get(StatField::CharacterExperience),
            &StatValue::Parsed(6500.0)
        );
        assert_eq!(model.displayed(StatField::CharacterExperience), "6,500");
        assert_eq!(model.formatted(StatField::CharacterExperience), "6,500");

        model.handle_input(&xp("about 7k"));
        assert_eq!(
            model.stats().get(StatField::CharacterExperience),
            &StatValue::Raw("about 7k".to_string())
        );
        assert_eq!(model.formatted(StatField::CharacterExperience), "about 7k");
    }

    #[test]
    fn test_parsed_change_respects_disallowed_text() {
        let mut model = SheetModel::default();
        let rule = TolerantRule {
            allow_unparsed: false,
            prefer_unparsed: false,
        };
        model.apply_parsed_change(&FieldInput::new("characterSize", "12"), rule);
        model.apply_parsed_change(&FieldInput::new("characterSize", "Large"), rule);
        assert_eq!(
            model.stats().get(StatField::CharacterSize),
            &StatValue::Parsed(12.0)
        );
        assert_eq!(model.displayed(StatField::CharacterSize), "Large");
    }

    #[test]
    fn test_toggle_twice_returns_to_light() {
        let mut platform = MockPlatformPort::new();
        let mut seq = mockall::Sequence::new();
        platform
            .expect_set_root_class()
            .withf(|class_name| class_name == "dark")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        platform
            .expect_set_root_class()
            .withf(|class_name| class_name == "light")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut model = SheetModel::default();
        assert_eq!(model.toggle_theme(&platform), &DARK);
        assert_eq!(model.toggle_theme(&platform), &LIGHT);
    }

    #[test]
    fn test_select_dark_sets_root_class_and_icon() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_set_root_class()
            .withf(|class_name| class_name == "dark")
            .times(2)
            .return_const(());

        let mut model = SheetModel::default();
        model.select_theme(ThemeTarget::Named("dark"), &platform);
        model.select_theme(ThemeTarget::Descriptor(&DARK), &platform);

        let attrs = model.toggle_attributes();
        assert_eq!(attrs.icon_src, "assets/images/moon.svg");
        assert_eq!(attrs.title, "Dark mode");
        assert_eq!(attrs.aria_label, attrs.title);
    }

    #[test]
    fn test_unknown_theme_name_advances() {
        let mut platform = MockPlatformPort::new();
        platform.expect_set_root_class().return_const(());

        let mut model = SheetModel::default();
        assert_eq!(model.select_theme(ThemeTarget::Named("sepia"), &platform), &DARK);
    }

    #[test]
    fn test_level_summary() {
        let mut model = SheetModel::default();
        let summary = model.level_summary();
        assert_eq!(summary.level, 0);
        assert_eq!(summary.proficiency_bonus, 2);
        assert_eq!(summary.level_from_experience, None);

        model.handle_change(&level("5"));
        model.handle_input(&FieldInput::new("characterExperience", "14000"));
        let summary = model.level_summary();
        assert_eq!(summary.level, 5);
        assert_eq!(summary.proficiency_bonus, 3);
        assert_eq!(summary.next_level_experience, Some(14000));
        assert_eq!(summary.level_from_experience, Some(6));

        model.handle_change(&level("20"));
        assert_eq!(model.level_summary().next_level_experience, None);
    }

    #[test]
    fn test_page_title() {
        let mut model = SheetModel::default();
        assert_eq!(model.page_title(), "Character Sheet");
        model.handle_input(&FieldInput::new("characterName", " Vex "));
        assert_eq!(model.page_title(), "Vex - Character Sheet");
    }

    #[test]
    fn test_mount_reflects_dark_preference_and_title() {
        let mut platform = english_platform(true);
        platform
            .expect_set_root_class()
            .withf(|class_name| class_name == "dark")
            .times(1)
            .return_const(());
        platform
            .expect_set_page_title()
            .withf(|title| title == "Character Sheet")
            .times(1)
            .return_const(());

        let model = SheetModel::from_platform(&platform, None);
        model.apply_theme(&platform);
        model.apply_page_title(&platform);
    }

    #[test]
    fn test_page_title_follows_name() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_set_page_title()
            .withf(|title| title == "Vex - Character Sheet")
            .times(1)
            .return_const(());

        let mut model = SheetModel::default();
        model.handle_input(&FieldInput::new("characterName", "Vex"));
        model.apply_page_title(&platform);
    }
}
