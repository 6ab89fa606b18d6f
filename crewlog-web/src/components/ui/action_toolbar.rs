use crate::game::EventKind;
use crate::i18n::t;
use yew::prelude::*;

#[must_use]
pub fn action_label(kind: EventKind) -> String {
    t(&format!("actions.{}", kind.tag()))
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub active: Option<EventKind>,
    pub on_select: Callback<EventKind>,
}

#[function_component(ActionToolbar)]
pub fn action_toolbar(p: &Props) -> Html {
    html! {
        <div class="action-toolbar" role="toolbar" aria-label={t("console.actions")}>
            { for EventKind::ACTIONS.into_iter().map(|kind| {
                let pressed = p.active == Some(kind);
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(kind))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("action-btn", pressed.then_some("active"))}
                        aria-pressed={pressed.to_string()}
                        data-action={kind.tag()}
                        {onclick}
                    >
                        { action_label(kind) }
                    </button>
                }
            }) }
        </div>
    }
}
