// Accessibility helpers
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "sr-status";

const FOCUSABLE: &str =
    "button:not([disabled]), [href], select:not([disabled]), input:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// CSS for visible focus rings and the screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #38FEDC;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce `msg` through the live region.
pub fn set_status(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

fn focusables(container_id: &str) -> Vec<HtmlElement> {
    let Some(container) = crate::dom::document().and_then(|d| d.get_element_by_id(container_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Move focus to the first focusable element inside `container_id`.
pub fn trap_focus_in(container_id: &str) {
    if let Some(first) = focusables(container_id).first() {
        let _ = first.focus();
    }
}

/// Keep Tab navigation inside the container. Returns `true` when focus was wrapped
/// and the caller should prevent the default action.
#[must_use]
pub fn wrap_focus(container_id: &str, backwards: bool) -> bool {
    let items = focusables(container_id);
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return false;
    };
    let active = crate::dom::document().and_then(|d| d.active_element());
    let at_edge = |el: &HtmlElement| {
        let node: &web_sys::Node = el;
        active.as_ref().is_some_and(|a| a.is_same_node(Some(node)))
    };
    if backwards && at_edge(first) {
        let _ = last.focus();
        true
    } else if !backwards && at_edge(last) {
        let _ = first.focus();
        true
    } else {
        false
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = crate::dom::document()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
