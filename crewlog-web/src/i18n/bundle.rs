use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub const DEFAULT_LANG: &str = "en";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG).unwrap_or_else(empty);
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or_else(empty);
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(DEFAULT_LANG).unwrap_or_else(fallback_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active bundle and mirror it onto `<html lang>`.
///
/// The choice lives for the page lifetime only. Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = el.set_attribute("lang", lang);
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
