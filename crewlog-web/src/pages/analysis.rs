use crate::components::ui::hypothesis_card::HypothesisCard;
use crate::game::Resolution;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// `None` while the request is in flight.
    #[prop_or_default]
    pub resolution: Option<Resolution>,
    pub on_back: Callback<()>,
}

#[function_component(AnalysisPage)]
pub fn analysis_page(p: &Props) -> Html {
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = match p.resolution.as_ref() {
        None => html! {
            <p class="pending" role="status" aria-busy="true">{ t("analysis.pending") }</p>
        },
        Some(resolution) => {
            let count = resolution.hypotheses.len().to_string();
            let mut args = BTreeMap::new();
            args.insert("count", count.as_str());
            html! {
                <>
                    if resolution.is_fallback() {
                        <div class="notice local-mode" role="note">
                            <strong>{ t("analysis.local_mode") }</strong>
                            <p>{ t("analysis.local_mode_hint") }</p>
                        </div>
                    }
                    <p class="result-count">{ tr("analysis.count", Some(&args)) }</p>
                    { for resolution.hypotheses.iter().enumerate().map(|(idx, h)| html! {
                        <HypothesisCard hypothesis={h.clone()} expanded={idx == 0} />
                    }) }
                </>
            }
        }
    };

    html! {
        <section class="panel analysis" aria-labelledby="analysis-title">
            <h2 id="analysis-title">{ t("analysis.title") }</h2>
            { body }
            <button id="back-console-btn" type="button" onclick={on_back}>
                { t("analysis.back") }
            </button>
        </section>
    }
}
