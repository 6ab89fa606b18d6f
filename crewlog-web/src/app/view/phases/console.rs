use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::console::ConsolePage;
use yew::prelude::*;

pub fn render_console(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <ConsolePage
            players={state.session.players().to_vec()}
            draft={*state.draft}
            log={state.session.log().to_vec()}
            on_action={handlers.select_action.clone()}
            on_actor={handlers.pick_actor.clone()}
            on_target={handlers.pick_target.clone()}
            on_location={handlers.pick_location.clone()}
            on_confirm={handlers.confirm_event.clone()}
            on_cancel={handlers.cancel_draft.clone()}
            on_solve={handlers.solve.clone()}
        />
    }
}
