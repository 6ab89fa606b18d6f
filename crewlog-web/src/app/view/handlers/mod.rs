mod events;
mod prefs;
mod resolution;
mod roster;

use crate::app::state::AppState;
use crate::game::{EventKind, PlayerColor, PlayerId, ResetConfirmation};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use events::{
    build_cancel_draft, build_confirm_event, build_pick_actor, build_pick_location,
    build_pick_target, build_select_action,
};
pub use prefs::{build_go_home, build_lang_change, build_request_reset, build_reset_decision};
pub use resolution::{build_back_to_console, build_solve};
pub use roster::{build_add_player, build_impostor_change, build_remove_player, build_start};

#[derive(Clone)]
pub struct AppHandlers {
    pub add_player: Callback<PlayerColor>,
    pub remove_player: Callback<PlayerId>,
    pub impostor_change: Callback<u8>,
    pub start: Callback<()>,
    pub select_action: Callback<EventKind>,
    pub pick_actor: Callback<PlayerId>,
    pub pick_target: Callback<PlayerId>,
    pub pick_location: Callback<u8>,
    pub confirm_event: Callback<()>,
    pub cancel_draft: Callback<()>,
    pub solve: Callback<()>,
    pub back_to_console: Callback<()>,
    pub request_reset: Callback<AttrValue>,
    pub reset_decision: Callback<ResetConfirmation>,
    pub lang_change: Callback<String>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            add_player: build_add_player(state),
            remove_player: build_remove_player(state),
            impostor_change: build_impostor_change(state),
            start: build_start(state),
            select_action: build_select_action(state),
            pick_actor: build_pick_actor(state),
            pick_target: build_pick_target(state),
            pick_location: build_pick_location(state),
            confirm_event: build_confirm_event(state),
            cancel_draft: build_cancel_draft(state),
            solve: build_solve(state),
            back_to_console: build_back_to_console(state),
            request_reset: build_request_reset(state),
            reset_decision: build_reset_decision(state),
            lang_change: build_lang_change(state),
            go_home: build_go_home(state, navigator),
        }
    }
}
