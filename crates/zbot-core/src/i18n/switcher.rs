//! Presentation state for the language switcher surfaces.

use super::LocaleCode;

/// Visual state of one inline locale button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    /// Button for the active locale.
    Active,
    /// Any other button.
    Inactive,
}

const ACTIVE_CLASSES: &[&str] = &["bg-aurora-400", "text-aurora-950"];
const INACTIVE_CLASSES: &[&str] = &["text-white/70", "hover:text-white"];

impl ButtonState {
    /// State for a button tagged with `tag` while `current` is active.
    #[must_use]
    pub fn for_tag(tag: &str, current: LocaleCode) -> Self {
        if tag == current.code() {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Classes to add for this state.
    #[must_use]
    pub const fn add_classes(self) -> &'static [&'static str] {
        match self {
            Self::Active => ACTIVE_CLASSES,
            Self::Inactive => INACTIVE_CLASSES,
        }
    }

    /// Classes to remove for this state.
    #[must_use]
    pub const fn remove_classes(self) -> &'static [&'static str] {
        match self {
            Self::Active => INACTIVE_CLASSES,
            Self::Inactive => ACTIVE_CLASSES,
        }
    }
}

/// Text for the single-label surface; unknown codes are shown raw.
#[must_use]
pub fn display_name(code: &str) -> &str {
    code.parse::<LocaleCode>()
        .map_or(code, |locale| locale.label())
}

/// State for each button, given the codes they are tagged with.
///
/// Only a button tagged with exactly the active code is active.
#[must_use]
pub fn button_states<'a, I>(tags: I, current: LocaleCode) -> Vec<ButtonState>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(|tag| ButtonState::for_tag(tag, current))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_cover_supported_set() {
        assert_eq!(display_name("zh"), "中文");
        assert_eq!(display_name("vi"), "Tiếng Việt");
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("fr"), "fr");
    }

    #[test]
    fn exactly_one_button_is_active() {
        let states = button_states(["zh", "vi", "en"], LocaleCode::Vi);
        assert_eq!(
            states,
            vec![ButtonState::Inactive, ButtonState::Active, ButtonState::Inactive]
        );
    }

    #[test]
    fn unknown_tags_stay_inactive() {
        let states = button_states(["xx", "en"], LocaleCode::Zh);
        assert!(states.iter().all(|state| *state == ButtonState::Inactive));
    }

    #[test]
    fn class_sets_are_mirror_images() {
        assert_eq!(
            ButtonState::Active.add_classes(),
            ButtonState::Inactive.remove_classes()
        );
        assert_eq!(
            ButtonState::Active.remove_classes(),
            ButtonState::Inactive.add_classes()
        );
    }
}
