use crate::solver::WebSolverError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Document, Headers, Request, RequestInit, RequestMode, Response, Window};

/// The global `window`, absent outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// `log` backend writing to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route the `log` facade to the console. Later calls are no-ops.
pub fn init_logger(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// POST `body` as JSON and return the decoded response body.
///
/// An `AbortController` cancels the request once `timeout_ms` elapses; the
/// timer covers both the response head and the body read.
///
/// # Errors
/// Fails on network errors, non-2xx statuses, unreadable JSON, or timeout.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, body: &str, timeout_ms: u32) -> Result<JsValue, WebSolverError> {
    let win = window().ok_or(WebSolverError::NoWindow)?;
    let controller = AbortController::new().map_err(WebSolverError::from_js)?;
    let signal = controller.signal();

    let headers = Headers::new().map_err(WebSolverError::from_js)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(WebSolverError::from_js)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&signal));
    let request = Request::new_with_str_and_init(url, &init).map_err(WebSolverError::from_js)?;

    let abort = Closure::once(move || controller.abort());
    let timer = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            i32::try_from(timeout_ms).unwrap_or(i32::MAX),
        )
        .map_err(WebSolverError::from_js)?;

    let outcome: Result<Result<JsValue, u16>, JsValue> = async {
        let resp_value = JsFuture::from(win.fetch_with_request(&request)).await?;
        let response: Response = resp_value.dyn_into()?;
        if !response.ok() {
            return Ok(Err(response.status()));
        }
        let json = JsFuture::from(response.json()?).await?;
        Ok(Ok(json))
    }
    .await;

    win.clear_timeout_with_handle(timer);
    drop(abort);

    match outcome {
        Ok(Ok(json)) => Ok(json),
        Ok(Err(status)) => Err(WebSolverError::Status(status)),
        Err(_) if signal.aborted() => Err(WebSolverError::Aborted(timeout_ms)),
        Err(err) => Err(WebSolverError::from_js(err)),
    }
}
