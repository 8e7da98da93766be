//! The live page as a translation surface.
//!
//! # Design
//! - Marked elements are collected once at startup into a registry.
//! - Switcher and meta updates look their elements up on each call and skip
//!   silently when the page does not carry them.

use gloo::utils::window;
use js_sys::{Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};
use zbot_core::i18n::{
    ButtonState, LocaleCode, MarkerKind, PageMeta, PageSurface, TranslationRegistry,
    TranslationStore, TranslationTarget, display_name,
};

use super::dom::{elements, set_attribute, set_class};
use super::markup::{CURRENT_LANG_TEXT_ID, INLINE_SWITCHER_ID, LANG_ATTR, META_DESCRIPTION};

pub(crate) struct DomSurface {
    document: Document,
    registry: TranslationRegistry<Element>,
    busy_opacity: f32,
}

impl DomSurface {
    pub(crate) fn scan(document: Document, busy_opacity: f32) -> Self {
        let mut registry = TranslationRegistry::new();
        for kind in MarkerKind::all() {
            let attribute = kind.attribute();
            for element in elements(document.query_selector_all(&format!("[{attribute}]"))) {
                if let Some(key) = element.get_attribute(attribute) {
                    registry.register(element, kind, key);
                }
            }
        }
        debug!(bindings = registry.len(), "collected translatable elements");
        Self {
            document,
            registry,
            busy_opacity,
        }
    }
}

impl TranslationTarget<Element> for DomSurface {
    fn write(&self, element: &Element, kind: MarkerKind, text: &str) {
        match kind {
            MarkerKind::Content => element.set_inner_html(text),
            MarkerKind::Placeholder => set_attribute(element, "placeholder", text),
            MarkerKind::Title => set_attribute(element, "title", text),
        }
    }

    fn after_apply(&self) {
        refresh_icons();
    }
}

impl PageSurface for DomSurface {
    fn set_busy(&self, busy: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let opacity = if busy {
            self.busy_opacity.to_string()
        } else {
            "1".to_string()
        };
        if let Err(err) = body.style().set_property("opacity", &opacity) {
            warn!(error = ?err, "failed to set busy opacity");
        }
    }

    fn apply_translations(&self, store: &TranslationStore) {
        let report = self.registry.apply(store, self);
        debug!(
            locale = %store.locale(),
            applied = report.applied,
            missing = report.missing,
            "applied translations"
        );
    }

    fn refresh_switcher(&self, locale: LocaleCode) {
        if let Some(label) = self.document.get_element_by_id(CURRENT_LANG_TEXT_ID) {
            label.set_text_content(Some(display_name(locale.code())));
        }

        let Some(switcher) = self.document.get_element_by_id(INLINE_SWITCHER_ID) else {
            return;
        };
        for button in elements(switcher.query_selector_all(&format!("[{LANG_ATTR}]"))) {
            let tag = button.get_attribute(LANG_ATTR).unwrap_or_default();
            let state = ButtonState::for_tag(&tag, locale);
            for class in state.add_classes() {
                set_class(&button, class, true);
            }
            for class in state.remove_classes() {
                set_class(&button, class, false);
            }
        }
    }

    fn set_document_lang(&self, lang: &str) {
        if let Some(root) = self.document.document_element() {
            set_attribute(&root, "lang", lang);
        }
    }

    fn set_meta(&self, meta: &PageMeta) {
        if let Some(title) = &meta.title {
            self.document.set_title(title);
        }
        let tag = self.document.query_selector(META_DESCRIPTION).ok().flatten();
        if let (Some(description), Some(tag)) = (&meta.description, tag) {
            set_attribute(&tag, "content", description);
        }
    }
}

/// Re-run the Lucide icon scan when the page loaded that library.
fn refresh_icons() {
    let window = window();
    let Ok(lucide) = Reflect::get(&window, &JsValue::from_str("lucide")) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }
    let Ok(create) = Reflect::get(&lucide, &JsValue::from_str("createIcons")) else {
        return;
    };
    if let Some(create) = create.dyn_ref::<Function>() {
        if let Err(err) = create.call0(&lucide) {
            warn!(error = ?err, "icon refresh failed");
        }
    }
}
