use crate::game::{EventKind, LogEntry, location_by_id};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Render an entry in the active language from its structured fields.
#[must_use]
pub fn entry_line(entry: &LogEntry) -> String {
    if entry.kind == EventKind::System {
        return t("log.sys");
    }
    let loc = entry
        .loc
        .and_then(location_by_id)
        .map_or_else(|| String::from("?"), super::location_map::location_label);
    let mut args = BTreeMap::new();
    args.insert("actor", entry.actor.as_deref().unwrap_or("?"));
    args.insert("target", entry.target.as_deref().unwrap_or("?"));
    args.insert("loc", loc.as_str());
    tr(&format!("log.{}", entry.kind.tag()), Some(&args))
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub entries: Vec<LogEntry>,
}

#[function_component(EventLog)]
pub fn event_log(p: &Props) -> Html {
    html! {
        <section class="event-log" aria-labelledby="event-log-title">
            <h3 id="event-log-title">{ t("console.log") }</h3>
            if p.entries.is_empty() {
                <p class="muted">{ t("console.log_empty") }</p>
            } else {
                <ol aria-live="polite">
                    { for p.entries.iter().map(|entry| html! {
                        <li class={classes!("log-line", entry.kind.tag())} title={entry.text.clone()}>
                            { entry_line(entry) }
                        </li>
                    }) }
                </ol>
            }
        </section>
    }
}
