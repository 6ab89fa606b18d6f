#[cfg(target_arch = "wasm32")]
use crewlog_web::dom;
use crewlog_web::game::{Phase, TransportError};
use crewlog_web::i18n;
use crewlog_web::router::Route;
use crewlog_web::solver::{FetchTransport, WebSolverError};
use std::collections::BTreeMap;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    let mut vars = BTreeMap::new();
    vars.insert("count", "3");
    assert_eq!(
        i18n::tr("analysis.count", Some(&vars)),
        "3 possible scenarios"
    );
    assert_eq!(i18n::t("missing.key"), "missing.key");
    assert_eq!(i18n::fmt_pct(50.0), "50.0%");

    i18n::set_lang("zh");
    assert_eq!(i18n::current_lang(), "zh");
    assert_ne!(i18n::t("console.solve"), "console.solve");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "zh");
    i18n::set_lang("en");
}

#[test]
fn routes_round_trip_through_paths() {
    for phase in [Phase::Setup, Phase::Active, Phase::Review] {
        let route = Route::from_phase(phase);
        let path = route.to_path();
        assert_eq!(Route::recognize(&path), Some(route));
    }
}

#[test]
fn solver_errors_map_onto_transport_errors() {
    let err: TransportError = WebSolverError::Js(String::from("TypeError")).into();
    assert!(matches!(err, TransportError::Network(msg) if msg.contains("TypeError")));
    let transport = FetchTransport::new("http://localhost:9/solve");
    assert_eq!(transport.endpoint(), "http://localhost:9/solve");
}
