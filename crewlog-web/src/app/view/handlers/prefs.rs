use crate::app::state::AppState;
use crate::game::ResetConfirmation;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

pub fn build_request_reset(state: &AppState) -> Callback<AttrValue> {
    let show_reset = state.show_reset.clone();
    let focus_target = state.reset_focus_target.clone();
    Callback::from(move |opener: AttrValue| {
        focus_target.set(opener);
        show_reset.set(true);
    })
}

/// Apply the dialog answer. Declining only closes the dialog.
pub fn build_reset_decision(state: &AppState) -> Callback<ResetConfirmation> {
    let state = state.clone();
    Callback::from(move |answer: ResetConfirmation| {
        state.show_reset.set(false);
        let mut next = (*state.session).clone();
        match next.reset_session(answer) {
            Ok(()) => {
                state.bump_generation();
                state.session.set(next);
                state.draft.set(None);
                state.notice.set(None);
            }
            Err(err) => log::debug!("reset not applied: {err}"),
        }
    })
}

pub fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_phase(session.phase()));
        }
    })
}
