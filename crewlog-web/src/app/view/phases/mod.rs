mod analysis;
mod console;
mod setup;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;

pub use analysis::render_analysis;
pub use console::render_console;
pub use setup::render_setup;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let not_found = matches!(route, None | Some(Route::NotFound));
    if not_found {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    match state.phase() {
        Phase::Setup => render_setup(state, handlers),
        Phase::Active => render_console(state, handlers),
        Phase::Review => render_analysis(state, handlers),
    }
}
