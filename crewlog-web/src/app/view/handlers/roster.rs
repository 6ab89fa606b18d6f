use crate::app::state::AppState;
use crate::game::{PlayerColor, PlayerId};
use yew::prelude::*;

pub fn build_add_player(state: &AppState) -> Callback<PlayerColor> {
    let state = state.clone();
    Callback::from(move |color: PlayerColor| {
        if state.session.has_color(color) {
            return;
        }
        state.update_session(|s| s.add_player(color));
        state.notice.set(None);
    })
}

pub fn build_remove_player(state: &AppState) -> Callback<PlayerId> {
    let state = state.clone();
    Callback::from(move |id: PlayerId| {
        state.update_session(|s| s.remove_player(id));
    })
}

pub fn build_impostor_change(state: &AppState) -> Callback<u8> {
    let state = state.clone();
    Callback::from(move |count: u8| {
        if let Err(err) = state.update_session(|s| s.set_impostor_count(count)) {
            log::debug!("impostor count rejected: {err}");
        }
    })
}

/// Start the session, or surface the roster notice and leave everything else alone.
pub fn build_start(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut next = (*state.session).clone();
        match next.start_session() {
            Ok(()) => {
                state.bump_generation();
                state.session.set(next);
                state.draft.set(None);
                state.notice.set(None);
            }
            Err(err) => {
                let msg = crate::app::phase::start_notice(&err);
                state.notice.set(Some(AttrValue::from(msg)));
            }
        }
    })
}
