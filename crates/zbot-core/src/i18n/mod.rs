//! Runtime translation pipeline: locale set, JSON mappings, store, loader,
//! switch session, DOM applier registry and switcher presentation.

mod apply;
mod bundled;
mod loader;
mod locale;
mod mapping;
mod session;
mod store;
mod switcher;

pub use apply::{ApplyReport, Binding, MarkerKind, TranslationRegistry, TranslationTarget};
pub use bundled::{bundled, bundled_json};
pub use loader::{Loaded, TranslationSource, load_with_fallback};
pub use locale::{DEFAULT_LOCALE, LocaleCode, resolve_initial};
pub use mapping::TranslationMap;
pub use session::{I18nSession, PageMeta, PageSurface, PreferenceStore, SwitchOutcome};
pub use store::{LangInfo, TranslationStore};
pub use switcher::{ButtonState, button_states, display_name};
