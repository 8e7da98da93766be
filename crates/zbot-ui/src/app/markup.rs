//! Element ids, selectors and classes the page markup is expected to carry.

/// Label showing the active language name.
pub(crate) const CURRENT_LANG_TEXT_ID: &str = "current-lang-text";
/// Container of inline locale buttons.
pub(crate) const INLINE_SWITCHER_ID: &str = "langSwitcher";
/// Button opening the language menu.
pub(crate) const LANGUAGE_TRIGGER_ID: &str = "language-switcher";
/// Language menu.
pub(crate) const LANGUAGE_MENU_ID: &str = "language-dropdown";
/// Attribute naming the locale a control selects.
pub(crate) const LANG_ATTR: &str = "data-lang";
/// Class hiding the language menu.
pub(crate) const HIDDEN_CLASS: &str = "hidden";

/// Hamburger toggle.
pub(crate) const NAV_TOGGLE_ID: &str = "navToggle";
/// Collapsible primary navigation.
pub(crate) const PRIMARY_NAV_ID: &str = "primaryNav";
/// Links that dismiss the primary navigation when followed.
pub(crate) const NAV_LINKS: &str = ".nav-links a, .dropdown-menu a";
/// Hover dropdown roots.
pub(crate) const DROPDOWN: &str = "[data-dropdown]";
/// Dropdown trigger inside a root.
pub(crate) const DROPDOWN_TOGGLE: &str = ".dropdown-toggle";
/// Dropdown menu inside a root.
pub(crate) const DROPDOWN_MENU: &str = ".dropdown-menu";
/// Class marking an open nav or dropdown.
pub(crate) const OPEN_CLASS: &str = "is-open";

/// Description meta tag.
pub(crate) const META_DESCRIPTION: &str = "meta[name=\"description\"]";
/// Inline JSON configuration block.
pub(crate) const CONFIG_SCRIPT_ID: &str = "zbot-config";
/// Media query deciding hover-driven dropdowns.
pub(crate) const HOVER_QUERY: &str = "(hover: hover)";
