//! Locale switching through a full session with scripted collaborators.

use serde_json::json;
use zbot_core::i18n::{
    DEFAULT_LOCALE, I18nSession, LocaleCode, MarkerKind, PageMeta, SwitchOutcome, bundled,
};
use zbot_test_support::fixtures::{FakeDocument, mapping};
use zbot_test_support::mocks::{MemoryPreferences, RecordingSurface, ScriptedSource, SurfaceCall};

type Session = I18nSession<ScriptedSource, MemoryPreferences, RecordingSurface>;

fn session_with(source: ScriptedSource, prefs: MemoryPreferences) -> Session {
    I18nSession::new(source, prefs, RecordingSurface::new(), DEFAULT_LOCALE)
}

async fn ready_session() -> Session {
    let session = session_with(ScriptedSource::bundled(), MemoryPreferences::new());
    assert_eq!(
        session.init(None).await,
        SwitchOutcome::Switched(LocaleCode::Zh)
    );
    session
}

fn bundled_text(locale: LocaleCode, key: &str) -> String {
    bundled(locale)
        .ok()
        .and_then(|map| map.resolve(key).map(|text| text.into_owned()))
        .unwrap_or_default()
}

#[tokio::test]
async fn lookups_follow_each_switch() {
    let session = ready_session().await;
    for locale in [LocaleCode::Vi, LocaleCode::En, LocaleCode::Zh] {
        assert_eq!(
            session.switch_lang(locale.code()).await,
            SwitchOutcome::Switched(locale)
        );
        assert_eq!(session.locale(), locale);
        assert_eq!(session.t("hero.title1"), bundled_text(locale, "hero.title1"));
        assert_eq!(session.t("hero.cta.primary"), bundled_text(locale, "hero.cta.primary"));
    }
}

#[tokio::test]
async fn switching_to_active_locale_is_a_no_op() {
    let session = ready_session().await;
    let fetches = session.source().calls().len();
    let calls = session.surface().calls().len();

    assert_eq!(session.switch_lang("zh").await, SwitchOutcome::Unchanged);
    assert_eq!(session.source().calls().len(), fetches);
    assert!(session.preferences().writes().is_empty());
    assert_eq!(session.surface().calls().len(), calls);
}

#[tokio::test]
async fn unsupported_locale_changes_nothing() {
    let session = ready_session().await;
    let before = session.store().clone();
    let fetches = session.source().calls().len();

    assert_eq!(session.switch_lang("fr").await, SwitchOutcome::Unsupported);
    assert_eq!(session.switch_lang("en-US").await, SwitchOutcome::Unsupported);
    assert_eq!(*session.store(), before);
    assert_eq!(session.source().calls().len(), fetches);
    assert!(session.preferences().writes().is_empty());
}

#[tokio::test]
async fn missing_paths_render_as_the_path() {
    let session = ready_session().await;
    assert_eq!(session.t("hero.nope"), "hero.nope");
    assert_eq!(session.t("hero.title1.deeper"), "hero.title1.deeper");
    assert_eq!(session.t("nav"), "nav");
}

#[tokio::test]
async fn descending_into_a_leaf_returns_the_path() {
    let source = ScriptedSource::new()
        .with_mapping(LocaleCode::Zh, mapping(LocaleCode::Zh, json!({ "a": { "b": "leaf" } })));
    let session = session_with(source, MemoryPreferences::new());
    session.init(None).await;
    assert_eq!(session.t("a.b"), "leaf");
    assert_eq!(session.t("a.b.c"), "a.b.c");
}

#[tokio::test]
async fn failed_locale_falls_back_to_default_once() {
    let session = ready_session().await;
    session.source().set_failing(LocaleCode::Vi, 500);

    let outcome = session.switch_lang("vi").await;
    assert_eq!(
        outcome,
        SwitchOutcome::FellBack {
            requested: LocaleCode::Vi,
            active: LocaleCode::Zh,
        }
    );
    assert_eq!(
        session.source().calls(),
        vec![LocaleCode::Zh, LocaleCode::Vi, LocaleCode::Zh]
    );
    assert_eq!(session.locale(), LocaleCode::Zh);
    assert!(session.preferences().writes().is_empty());
    assert!(!session.surface().busy());
}

#[tokio::test]
async fn failing_default_is_not_retried() {
    let source = ScriptedSource::new().failing(LocaleCode::Zh, 404);
    let session = session_with(source, MemoryPreferences::new());

    assert_eq!(session.init(None).await, SwitchOutcome::Failed);
    assert_eq!(session.source().calls(), vec![LocaleCode::Zh]);
    assert_eq!(session.t("hero.title1"), "hero.title1");
    assert_eq!(
        session.surface().calls(),
        vec![SurfaceCall::Switcher(LocaleCode::Zh)]
    );
}

#[tokio::test]
async fn total_failure_keeps_previous_mapping() {
    let session = ready_session().await;
    let zh_title = session.t("hero.title1");
    session.source().set_failing(LocaleCode::En, 503);
    session.source().set_failing(LocaleCode::Zh, 503);
    let calls_before = session.surface().calls().len();

    assert_eq!(session.switch_lang("en").await, SwitchOutcome::Failed);
    assert_eq!(session.locale(), LocaleCode::Zh);
    assert_eq!(session.t("hero.title1"), zh_title);
    assert!(session.preferences().writes().is_empty());
    assert_eq!(
        session.surface().calls()[calls_before..],
        [SurfaceCall::Busy(true), SurfaceCall::Busy(false)]
    );
}

#[tokio::test]
async fn successful_switch_runs_every_step_in_order() {
    let session = ready_session().await;
    let calls_before = session.surface().calls().len();

    session.switch_lang("en").await;
    let expected_meta = PageMeta {
        title: Some(bundled_text(LocaleCode::En, "meta.title")),
        description: Some(bundled_text(LocaleCode::En, "meta.description")),
    };
    assert_eq!(
        session.surface().calls()[calls_before..],
        [
            SurfaceCall::Busy(true),
            SurfaceCall::Applied(LocaleCode::En),
            SurfaceCall::Switcher(LocaleCode::En),
            SurfaceCall::DocumentLang("en".to_string()),
            SurfaceCall::Meta(expected_meta),
            SurfaceCall::Busy(false),
        ]
    );
    assert_eq!(session.preferences().writes(), vec![LocaleCode::En]);
    assert_eq!(session.preferences().stored().as_deref(), Some("en"));
}

#[tokio::test]
async fn exactly_one_button_is_active_after_switches() {
    let session = ready_session().await;
    assert_eq!(session.surface().active_buttons(), vec!["zh"]);
    assert_eq!(session.surface().label(), "中文");

    session.switch_lang("vi").await;
    assert_eq!(session.surface().active_buttons(), vec!["vi"]);
    assert_eq!(session.surface().label(), "Tiếng Việt");

    session.switch_lang("en").await;
    assert_eq!(session.surface().active_buttons(), vec!["en"]);
}

#[tokio::test]
async fn init_prefers_stored_then_browser_locale() {
    let stored = session_with(ScriptedSource::bundled(), MemoryPreferences::with_stored("vi"));
    assert_eq!(
        stored.init(Some("en-US")).await,
        SwitchOutcome::Switched(LocaleCode::Vi)
    );
    assert!(stored.preferences().writes().is_empty());

    let browser = session_with(ScriptedSource::bundled(), MemoryPreferences::with_stored("xx"));
    assert_eq!(
        browser.init(Some("en-US")).await,
        SwitchOutcome::Switched(LocaleCode::En)
    );
    assert_eq!(browser.source().calls(), vec![LocaleCode::En]);
}

#[tokio::test]
async fn init_paints_marked_elements() {
    let mut document = FakeDocument::new();
    let title = document.element(MarkerKind::Content, "hero.title1", "authored");
    let missing = document.element(MarkerKind::Content, "hero.unknown", "authored");
    let input = document.element(MarkerKind::Placeholder, "contact.emailPlaceholder", "");
    let surface = RecordingSurface::with_document(document);
    let session = I18nSession::new(
        ScriptedSource::bundled(),
        MemoryPreferences::new(),
        surface,
        DEFAULT_LOCALE,
    );

    session.init(Some("en")).await;
    let document = session.surface().document();
    assert_eq!(document.get(title).content, bundled_text(LocaleCode::En, "hero.title1"));
    assert_eq!(document.get(missing).content, "authored");
    assert_eq!(
        document.get(input).placeholder,
        Some(bundled_text(LocaleCode::En, "contact.emailPlaceholder"))
    );
    assert_eq!(document.icon_scans(), 1);
}

#[tokio::test]
async fn preference_write_failure_does_not_block_switch() {
    let session = ready_session().await;
    session.preferences().fail_writes();
    assert_eq!(
        session.switch_lang("vi").await,
        SwitchOutcome::Switched(LocaleCode::Vi)
    );
    assert_eq!(session.locale(), LocaleCode::Vi);
    assert_eq!(session.preferences().stored(), None);
}

#[tokio::test]
async fn stale_response_cannot_overwrite_newer_switch() {
    let session = ready_session().await;
    let slow = session.source().gate(LocaleCode::Vi);

    let (first, second) = tokio::join!(session.switch_lang("vi"), async {
        let outcome = session.switch_lang("en").await;
        slow.notify_one();
        outcome
    });

    assert_eq!(first, SwitchOutcome::Superseded);
    assert_eq!(second, SwitchOutcome::Switched(LocaleCode::En));
    assert_eq!(session.locale(), LocaleCode::En);
    assert_eq!(session.t("hero.title1"), bundled_text(LocaleCode::En, "hero.title1"));
    assert_eq!(session.preferences().writes(), vec![LocaleCode::En]);
    assert!(!session.surface().busy());
}

#[tokio::test]
async fn repeated_request_for_pending_locale_is_unchanged() {
    let session = ready_session().await;
    let gate = session.source().gate(LocaleCode::En);

    let (first, second) = tokio::join!(session.switch_lang("en"), async {
        let outcome = session.switch_lang("en").await;
        gate.notify_one();
        outcome
    });

    assert_eq!(first, SwitchOutcome::Switched(LocaleCode::En));
    assert_eq!(second, SwitchOutcome::Unchanged);
    assert_eq!(
        session.source().calls(),
        vec![LocaleCode::Zh, LocaleCode::En]
    );
}

#[tokio::test]
async fn choosing_active_locale_cancels_pending_switch() {
    let session = ready_session().await;
    let gate = session.source().gate(LocaleCode::Vi);

    let (first, second) = tokio::join!(session.switch_lang("vi"), async {
        let outcome = session.switch_lang("zh").await;
        gate.notify_one();
        outcome
    });

    assert_eq!(first, SwitchOutcome::Superseded);
    assert_eq!(second, SwitchOutcome::Unchanged);
    assert_eq!(session.locale(), LocaleCode::Zh);
    assert!(session.pending().is_none());
    assert!(!session.surface().busy());
    assert!(session.preferences().writes().is_empty());
}

#[tokio::test]
async fn default_locale_chosen_during_startup_still_loads() {
    let session = session_with(ScriptedSource::bundled(), MemoryPreferences::with_stored("vi"));
    let gate = session.source().gate(LocaleCode::Vi);

    let (startup, click) = tokio::join!(session.init(None), async {
        let outcome = session.switch_lang("zh").await;
        gate.notify_one();
        outcome
    });

    assert_eq!(startup, SwitchOutcome::Superseded);
    assert_eq!(click, SwitchOutcome::Switched(LocaleCode::Zh));
    assert_eq!(session.locale(), LocaleCode::Zh);
    assert!(session.store().is_loaded());
    assert_eq!(session.t("hero.title1"), bundled_text(LocaleCode::Zh, "hero.title1"));
    assert_eq!(session.source().calls(), vec![LocaleCode::Vi, LocaleCode::Zh]);
    assert!(session.pending().is_none());
    assert!(!session.surface().busy());

    assert_eq!(session.switch_lang("zh").await, SwitchOutcome::Unchanged);
}

#[tokio::test]
async fn other_locale_chosen_during_startup_wins() {
    let session = session_with(ScriptedSource::bundled(), MemoryPreferences::new());
    let gate = session.source().gate(LocaleCode::Zh);

    let (startup, click) = tokio::join!(session.init(None), async {
        let outcome = session.switch_lang("vi").await;
        gate.notify_one();
        outcome
    });

    assert_eq!(startup, SwitchOutcome::Superseded);
    assert_eq!(click, SwitchOutcome::Switched(LocaleCode::Vi));
    assert_eq!(session.locale(), LocaleCode::Vi);
    assert_eq!(session.t("hero.title1"), bundled_text(LocaleCode::Vi, "hero.title1"));
    assert_eq!(session.preferences().writes(), vec![LocaleCode::Vi]);
    assert!(!session.surface().busy());
}

#[tokio::test]
async fn default_locale_is_refetched_after_failed_startup() {
    let source = ScriptedSource::new().failing(LocaleCode::Zh, 503);
    let session = session_with(source, MemoryPreferences::new());
    assert_eq!(session.init(None).await, SwitchOutcome::Failed);

    assert_eq!(session.switch_lang("zh").await, SwitchOutcome::Failed);
    assert_eq!(session.source().calls(), vec![LocaleCode::Zh, LocaleCode::Zh]);
    assert!(!session.store().is_loaded());
    assert!(!session.surface().busy());
}

#[tokio::test]
async fn lang_info_reflects_active_mapping() {
    let session = ready_session().await;
    session.switch_lang("vi").await;
    let info = session.lang_info();
    assert_eq!(info.code, LocaleCode::Vi);
    assert_eq!(info.currency, "VND");
    assert_eq!(info.symbol, "₫");
}
