//! Registry-driven painting of marked elements.

use serde_json::json;
use zbot_core::i18n::{LocaleCode, MarkerKind, TranslationStore};
use zbot_test_support::fixtures::{FakeDocument, mapping};

fn store() -> TranslationStore {
    let mut store = TranslationStore::new(LocaleCode::En);
    store.commit(
        LocaleCode::En,
        mapping(
            LocaleCode::En,
            json!({
                "nav": { "home": "Home" },
                "contact": { "email": "Email address", "send": "Send your message" }
            }),
        ),
    );
    store
}

#[test]
fn every_marker_kind_is_painted() {
    let mut document = FakeDocument::new();
    let text = document.element(MarkerKind::Content, "nav.home", "首页");
    let input = document.element(MarkerKind::Placeholder, "contact.email", "");
    let button = document.element(MarkerKind::Title, "contact.send", "→");

    let report = document.apply(&store());
    assert_eq!(report.applied, 3);
    assert_eq!(report.missing, 0);
    assert_eq!(document.get(text).content, "Home");
    assert_eq!(document.get(input).placeholder.as_deref(), Some("Email address"));
    assert_eq!(document.get(button).title.as_deref(), Some("Send your message"));
    assert_eq!(document.get(button).content, "→");
}

#[test]
fn misses_leave_authored_markup() {
    let mut document = FakeDocument::new();
    let stale = document.element(MarkerKind::Content, "nav.blog", "Blog");
    let parent = document.element(MarkerKind::Content, "nav", "Menu");

    let report = document.apply(&store());
    assert_eq!(report.missing, 2);
    assert_eq!(document.get(stale).content, "Blog");
    assert_eq!(document.get(parent).content, "Menu");
}

#[test]
fn duplicate_markers_are_each_painted() {
    let mut document = FakeDocument::new();
    let header = document.element(MarkerKind::Content, "nav.home", "");
    let footer = document.element(MarkerKind::Content, "nav.home", "");

    document.apply(&store());
    assert_eq!(document.get(header).content, "Home");
    assert_eq!(document.get(footer).content, "Home");
}

#[test]
fn icon_rescan_follows_every_pass() {
    let document = FakeDocument::new();
    document.apply(&store());
    document.apply(&store());
    assert_eq!(document.icon_scans(), 2);
}
