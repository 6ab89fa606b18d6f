use crate::game::{Detail, Hypothesis};
use crate::i18n::{fmt_pct, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub hypothesis: Hypothesis,
    /// The top-ranked card opens expanded.
    #[prop_or_default]
    pub expanded: bool,
}

fn render_detail(detail: &Detail) -> Html {
    let (badge_class, badge) = if detail.is_truth {
        ("badge truth", t("analysis.truth"))
    } else {
        ("badge lie", t("analysis.lie"))
    };
    html! {
        <li class={classes!("detail", (!detail.is_truth).then_some("is-lie"))}>
            <span class="detail__speaker">{ detail.speaker.clone() }</span>
            <span class="detail__role">{ detail.role.clone() }</span>
            <span class={badge_class}>{ badge }</span>
            <p class="detail__content">{ detail.content.clone() }</p>
            { detail.contradiction.as_ref().map(|c| html! {
                <p class="detail__contradiction">{ c.clone() }</p>
            }).unwrap_or_default() }
        </li>
    }
}

#[function_component(HypothesisCard)]
pub fn hypothesis_card(p: &Props) -> Html {
    let open = use_state(|| p.expanded);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let h = &p.hypothesis;
    let rank = h.rank.to_string();
    let pct = fmt_pct(h.weight);
    let clue_count = h.details.len().to_string();
    let rank_label = {
        let mut args = BTreeMap::new();
        args.insert("rank", rank.as_str());
        tr("analysis.rank", Some(&args))
    };
    let likelihood = {
        let mut args = BTreeMap::new();
        args.insert("pct", pct.as_str());
        tr("analysis.likelihood", Some(&args))
    };
    let clues = {
        let mut args = BTreeMap::new();
        args.insert("count", clue_count.as_str());
        tr("analysis.clues", Some(&args))
    };
    let consistent = h.details.iter().all(|d| d.is_truth && d.contradiction.is_none());
    let body_id = format!("hypothesis-{}", h.rank);

    html! {
        <article class="hypothesis-card" data-rank={rank.clone()}>
            <button
                type="button"
                class="hypothesis-card__summary"
                aria-expanded={open.to_string()}
                aria-controls={body_id.clone()}
                onclick={toggle}
            >
                <span class="rank">{ rank_label }</span>
                <span class="impostors">{ h.impostors.join(" + ") }</span>
                <span class="likelihood">{ likelihood }</span>
                <span class="clues">{ clues }</span>
            </button>
            <div class="likelihood-bar" role="presentation">
                <div class="likelihood-bar__fill" style={format!("width: {:.1}%", h.weight)}></div>
            </div>
            if *open {
                <div id={body_id} class="hypothesis-card__body">
                    if consistent {
                        <p class="no-conflict">{ t("analysis.no_conflict") }</p>
                    }
                    <ul class="details">
                        { for h.details.iter().map(render_detail) }
                    </ul>
                </div>
            }
        </article>
    }
}
