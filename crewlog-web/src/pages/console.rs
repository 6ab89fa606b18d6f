use crate::app::phase::{DraftStep, next_step};
use crate::components::ui::action_toolbar::ActionToolbar;
use crate::components::ui::event_log::EventLog;
use crate::components::ui::location_map::LocationMap;
use crate::components::ui::player_avatar::PlayerAvatar;
use crate::game::{EventDraft, EventKind, LogEntry, Player, PlayerId};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub players: Vec<Player>,
    #[prop_or_default]
    pub draft: Option<EventDraft>,
    pub log: Vec<LogEntry>,
    pub on_action: Callback<EventKind>,
    pub on_actor: Callback<PlayerId>,
    pub on_target: Callback<PlayerId>,
    pub on_location: Callback<u8>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_solve: Callback<()>,
}

fn prompt_for(step: Option<DraftStep>) -> String {
    match step {
        None => t("console.pick_action"),
        Some(DraftStep::Actor) => t("console.actor"),
        Some(DraftStep::Target | DraftStep::Ready) => t("console.target"),
        Some(DraftStep::Location) => t("console.location"),
    }
}

#[function_component(ConsolePage)]
pub fn console_page(p: &Props) -> Html {
    let step = p.draft.as_ref().map(next_step);
    let picker = match step {
        Some(DraftStep::Actor) => Some(p.on_actor.clone()),
        Some(DraftStep::Target | DraftStep::Ready) => Some(p.on_target.clone()),
        _ => None,
    };
    let selected = |id: PlayerId| {
        p.draft.is_some_and(|d| d.actor == Some(id) || d.target == Some(id))
    };

    // Only the speaker has to be alive; anyone can be talked about.
    let actor_step = step == Some(DraftStep::Actor);
    let crew = p.players.iter().map(|player| {
        let on_select = picker.clone().unwrap_or_default();
        let selectable = picker.is_some() && (player.is_alive() || !actor_step);
        html! {
            <PlayerAvatar
                player={player.clone()}
                {selectable}
                selected={selected(player.id)}
                {on_select}
            />
        }
    });

    let on_confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_solve = {
        let cb = p.on_solve.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let needs_location = p.draft.is_some_and(|d| d.kind.requires_location());

    html! {
        <section class="panel console" aria-labelledby="console-title">
            <h2 id="console-title" class="sr-only">{ t("console.crew") }</h2>
            <div class="crew-grid" aria-label={t("console.crew")}>{ for crew }</div>
            <ActionToolbar active={p.draft.map(|d| d.kind)} on_select={p.on_action.clone()} />
            <p class="draft-prompt" aria-live="polite">{ prompt_for(step) }</p>
            if needs_location {
                <LocationMap
                    selected={p.draft.and_then(|d| d.location)}
                    interactive={step == Some(DraftStep::Location) || step == Some(DraftStep::Ready)}
                    on_pick={p.on_location.clone()}
                />
            }
            if p.draft.is_some() {
                <div class="draft-actions">
                    <button
                        id="confirm-event-btn"
                        type="button"
                        class="primary"
                        disabled={step != Some(DraftStep::Ready)}
                        onclick={on_confirm}
                    >
                        { t("console.confirm") }
                    </button>
                    <button type="button" onclick={on_cancel}>{ t("console.cancel") }</button>
                </div>
            }
            <EventLog entries={p.log.clone()} />
            <button id="solve-btn" type="button" class="primary" onclick={on_solve}>
                { t("console.solve") }
            </button>
        </section>
    }
}
