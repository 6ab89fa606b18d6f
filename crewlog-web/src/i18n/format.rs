#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Locale-aware number with at most one fractional digit.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let opts = Object::new();
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("maximumFractionDigits"),
                &JsValue::from_f64(1.0),
            );
            let nf = Intl::NumberFormat::new(&locales, &opts);
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| format!("{num:.1}"))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{num:.1}")
    }
}

/// Hypothesis weight rendered as a percentage, e.g. `66.7%`.
#[must_use]
pub fn fmt_pct(pct: f64) -> String {
    format!("{}%", fmt_number(pct))
}
