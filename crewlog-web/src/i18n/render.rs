use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn naive_plural(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| naive_plural(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        naive_plural(count).to_string()
    }
}

fn pick_form(map: &serde_json::Map<String, Value>, lang: &str, count: Option<&str>) -> Option<String> {
    let category = count
        .and_then(|c| c.parse::<f64>().ok())
        .map(|n| plural_category(lang, n));
    category
        .and_then(|cat| map.get(&cat))
        .or_else(|| map.get("other"))
        .or_else(|| map.get("_"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            pick_form(map, lang, args.and_then(|m| m.get("count")).copied())?
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                lookup(&bundle.fallback, key).and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate `key`, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate `key` and substitute `{name}` placeholders from `args`.
///
/// A `count` argument selects the plural form when the entry is an object.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
