use crate::app::state::AppState;
use crate::game::{Resolution, Session, SolveRequest};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Store `resolution` unless a newer change superseded the request.
pub(super) fn accept_resolution(
    current_generation: u64,
    expected: u64,
    session: &mut Session,
    resolution: Resolution,
) -> bool {
    if current_generation != expected {
        log::debug!("dropping stale resolution (generation {expected}, now {current_generation})");
        return false;
    }
    session.complete_resolution(resolution)
}

fn announce_done(count: usize) {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    crate::a11y::set_status(&crate::i18n::tr("analysis.done", Some(&args)));
}

fn deliver(state: &AppState, mut session: Session, generation: u64, resolution: Resolution) {
    let count = resolution.hypotheses.len();
    if accept_resolution(state.current_generation(), generation, &mut session, resolution) {
        state.session.set(session);
        announce_done(count);
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_resolution(state: AppState, session: Session, request: SolveRequest, generation: u64) {
    use crate::game::Resolver;
    use crate::solver::FetchTransport;

    let config = (*state.config).clone();
    wasm_bindgen_futures::spawn_local(async move {
        let transport = FetchTransport::new(config.endpoint.clone());
        let resolver = Resolver::new(transport, config);
        let mut rng = crate::solver::session_rng();
        let resolution = resolver.resolve(&request, &mut rng).await;
        deliver(&state, session, generation, resolution);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_resolution(state: AppState, session: Session, request: SolveRequest, generation: u64) {
    use crate::game::{TransportError, settle};

    // No browser fetch here; settle straight onto the local heuristic.
    let mut rng = crate::solver::session_rng();
    let outcome = Err(TransportError::Network(String::from("fetch unavailable")));
    let resolution = settle(outcome, &request, &state.config.weights, &mut rng);
    deliver(&state, session, generation, resolution);
}

pub fn build_solve(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut session = (*state.session).clone();
        let request = match session.begin_resolution() {
            Ok(request) => request,
            Err(err) => {
                log::debug!("solve ignored: {err}");
                return;
            }
        };
        let generation = state.bump_generation();
        state.session.set(session.clone());
        state.draft.set(None);
        spawn_resolution(state.clone(), session, request, generation);
    })
}

pub fn build_back_to_console(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.update_session(Session::return_to_session);
    })
}
