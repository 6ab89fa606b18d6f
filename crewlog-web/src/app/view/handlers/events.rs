use crate::app::phase::toggle_draft;
use crate::app::state::AppState;
use crate::game::{EventDraft, EventKind, PlayerId};
use yew::prelude::*;

fn edit_draft(state: &AppState, f: impl FnOnce(EventDraft) -> EventDraft) {
    if let Some(current) = *state.draft {
        state.draft.set(Some(f(current)));
    }
}

pub fn build_select_action(state: &AppState) -> Callback<EventKind> {
    let draft = state.draft.clone();
    Callback::from(move |kind: EventKind| draft.set(toggle_draft(*draft, kind)))
}

pub fn build_pick_actor(state: &AppState) -> Callback<PlayerId> {
    let state = state.clone();
    Callback::from(move |id: PlayerId| {
        edit_draft(&state, |d| d.with_actor(id));
    })
}

pub fn build_pick_target(state: &AppState) -> Callback<PlayerId> {
    let state = state.clone();
    Callback::from(move |id: PlayerId| {
        edit_draft(&state, |d| d.with_target(id));
    })
}

pub fn build_pick_location(state: &AppState) -> Callback<u8> {
    let state = state.clone();
    Callback::from(move |loc: u8| {
        edit_draft(&state, |d| d.with_location(loc));
    })
}

pub fn build_confirm_event(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(draft) = *state.draft else {
            return;
        };
        let recorded = state.update_session(|s| s.record_event(draft).is_some());
        if recorded {
            state.draft.set(None);
        } else {
            log::debug!("draft {:?} was not recorded", draft.kind);
        }
    })
}

pub fn build_cancel_draft(state: &AppState) -> Callback<()> {
    let draft = state.draft.clone();
    Callback::from(move |()| draft.set(None))
}
