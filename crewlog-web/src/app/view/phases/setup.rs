use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::setup::SetupPage;
use yew::prelude::*;

pub fn render_setup(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <SetupPage
            players={state.session.players().to_vec()}
            impostor_count={state.session.impostor_count()}
            notice={(*state.notice).clone()}
            on_add={handlers.add_player.clone()}
            on_remove={handlers.remove_player.clone()}
            on_impostors={handlers.impostor_change.clone()}
            on_start={handlers.start.clone()}
        />
    }
}
