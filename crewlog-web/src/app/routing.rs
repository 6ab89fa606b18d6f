#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    // Leave the 404 page alone until the user navigates away.
    if matches!(current_route, Some(Route::NotFound)) {
        return None;
    }
    let new_route = Route::from_phase(phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_phase_for_route(current_phase: Phase, route: Option<&Route>) -> Option<Phase> {
    let new_phase = route.and_then(Route::to_phase)?;
    if new_phase == current_phase {
        return None;
    }

    is_route_transition_allowed(current_phase, new_phase).then_some(new_phase)
}

/// URL-driven moves the session honors. Returning to setup goes through reset.
#[cfg(any(target_arch = "wasm32", test))]
const fn is_route_transition_allowed(current: Phase, next: Phase) -> bool {
    match current {
        Phase::Review => matches!(next, Phase::Active | Phase::Setup),
        Phase::Active => matches!(next, Phase::Setup),
        Phase::Setup => false,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: Phase,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(*phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_phase_with_route(state: &AppState, route: Option<Route>) {
    let state = state.clone();
    use_effect_with(route, move |route| {
        match next_phase_for_route(state.phase(), route.as_ref()) {
            Some(Phase::Active) => {
                state.update_session(crate::game::Session::return_to_session);
            }
            Some(Phase::Setup) => state.show_reset.set(true),
            Some(Phase::Review) | None => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_phase_skips_when_unchanged() {
        let route = Route::from_phase(Phase::Active);
        assert!(next_route_for_phase(Phase::Active, Some(&route)).is_none());
        assert_eq!(
            next_route_for_phase(Phase::Review, None),
            Some(Route::Analysis)
        );
        assert_eq!(
            next_route_for_phase(Phase::Setup, Some(&Route::Console)),
            Some(Route::Home)
        );
    }

    #[test]
    fn not_found_route_is_left_in_place() {
        assert!(next_route_for_phase(Phase::Active, Some(&Route::NotFound)).is_none());
        assert!(next_phase_for_route(Phase::Active, Some(&Route::NotFound)).is_none());
    }

    #[test]
    fn only_back_and_reset_are_honored_from_the_url() {
        assert_eq!(
            next_phase_for_route(Phase::Review, Some(&Route::Console)),
            Some(Phase::Active)
        );
        assert_eq!(
            next_phase_for_route(Phase::Active, Some(&Route::Home)),
            Some(Phase::Setup)
        );
        assert!(next_phase_for_route(Phase::Setup, Some(&Route::Console)).is_none());
        assert!(next_phase_for_route(Phase::Active, Some(&Route::Analysis)).is_none());
        assert!(next_phase_for_route(Phase::Setup, Some(&Route::Analysis)).is_none());
        assert!(next_phase_for_route(Phase::Review, Some(&Route::Analysis)).is_none());
    }

    #[test]
    fn transition_rules_cover_every_phase() {
        assert!(is_route_transition_allowed(Phase::Review, Phase::Active));
        assert!(is_route_transition_allowed(Phase::Review, Phase::Setup));
        assert!(is_route_transition_allowed(Phase::Active, Phase::Setup));
        assert!(!is_route_transition_allowed(Phase::Active, Phase::Review));
        assert!(!is_route_transition_allowed(Phase::Setup, Phase::Active));
        assert!(!is_route_transition_allowed(Phase::Setup, Phase::Review));
    }
}
