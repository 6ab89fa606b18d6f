mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::header::END_GAME_BUTTON_ID;
use crate::components::modal::Modal;
use crate::game::{Phase, ResetConfirmation};
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn render_reset_modal(state: &AppState, handlers: &AppHandlers) -> Html {
    let decide = |answer: ResetConfirmation| {
        let cb = handlers.reset_decision.clone();
        Callback::from(move |_: MouseEvent| cb.emit(answer))
    };
    let on_close = {
        let cb = handlers.reset_decision.clone();
        Callback::from(move |()| cb.emit(ResetConfirmation::Declined))
    };
    html! {
        <Modal
            open={*state.show_reset}
            title={t("reset.title")}
            description={Some(AttrValue::from(t("reset.description")))}
            return_focus_id={Some((*state.reset_focus_target).clone())}
            {on_close}
        >
            <div class="modal__actions">
                <button id="reset-confirm-btn" type="button" class="danger" onclick={decide(ResetConfirmation::Confirmed)}>
                    { t("reset.confirm") }
                </button>
                <button id="reset-cancel-btn" type="button" onclick={decide(ResetConfirmation::Declined)}>
                    { t("reset.cancel") }
                </button>
            </div>
        </Modal>
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = phases::render_main_view(state, &handlers, route);
    let in_session = state.phase() != Phase::Setup;

    html! {
        <>
            <crate::components::header::Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
                show_end_game={in_session}
                on_end_game={handlers.request_reset.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { render_reset_modal(state, &handlers) }
                { main_view }
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
                <crate::components::footer::Footer />
            </main>
        </>
    }
}
