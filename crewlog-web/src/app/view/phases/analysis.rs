use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::analysis::AnalysisPage;
use yew::prelude::*;

pub fn render_analysis(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <AnalysisPage
            resolution={state.session.results().cloned()}
            on_back={handlers.back_to_console.clone()}
        />
    }
}
