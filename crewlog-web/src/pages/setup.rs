use crate::components::ui::player_avatar::PlayerAvatar;
use crate::game::session::{MAX_IMPOSTORS, MIN_IMPOSTORS};
use crate::game::{Player, PlayerColor, PlayerId};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub players: Vec<Player>,
    pub impostor_count: u8,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    pub on_add: Callback<PlayerColor>,
    pub on_remove: Callback<PlayerId>,
    pub on_impostors: Callback<u8>,
    pub on_start: Callback<()>,
}

fn roster_heading(count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    tr("setup.roster", Some(&args))
}

#[function_component(SetupPage)]
pub fn setup_page(p: &Props) -> Html {
    let on_impostors = {
        let cb = p.on_impostors.clone();
        Callback::from(move |e: web_sys::Event| {
            let value = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                .and_then(|sel| sel.value().parse::<u8>().ok());
            if let Some(count) = value {
                cb.emit(count);
            }
        })
    };
    let on_start = {
        let cb = p.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let palette = PlayerColor::ALL.into_iter().map(|color| {
        let taken = p.players.iter().any(|pl| pl.color == color);
        let onclick = {
            let cb = p.on_add.clone();
            Callback::from(move |_| cb.emit(color))
        };
        html! {
            <button
                type="button"
                class="swatch"
                style={format!("--crew-color: {}", color.hex())}
                disabled={taken}
                aria-label={color.name()}
                data-color={color.name()}
                {onclick}
            >
                { color.name() }
            </button>
        }
    });

    let roster = p.players.iter().map(|player| {
        let mut args = BTreeMap::new();
        args.insert("name", player.name.as_str());
        let remove_label = tr("setup.remove", Some(&args));
        let onclick = {
            let cb = p.on_remove.clone();
            let id = player.id;
            Callback::from(move |_| cb.emit(id))
        };
        html! {
            <li class="roster-entry">
                <PlayerAvatar player={player.clone()} />
                <button type="button" class="remove" aria-label={remove_label} {onclick}>{"×"}</button>
            </li>
        }
    });

    html! {
        <section class="panel setup" aria-labelledby="setup-title">
            <h2 id="setup-title">{ t("setup.title") }</h2>
            if let Some(notice) = p.notice.clone() {
                <div class="notice" role="alert">{ notice }</div>
            }
            <label for="impostor-select">{ t("setup.impostors") }</label>
            <select id="impostor-select" onchange={on_impostors}>
                { for (MIN_IMPOSTORS..=MAX_IMPOSTORS).map(|n| html! {
                    <option value={n.to_string()} selected={n == p.impostor_count}>{ n.to_string() }</option>
                }) }
            </select>
            <h3>{ t("setup.palette") }</h3>
            <div class="palette">{ for palette }</div>
            <h3>{ roster_heading(p.players.len()) }</h3>
            if p.players.is_empty() {
                <p class="muted">{ t("setup.empty") }</p>
            } else {
                <ul class="roster">{ for roster }</ul>
            }
            <button id="start-btn" type="button" class="primary" onclick={on_start}>
                { t("setup.start") }
            </button>
        </section>
    }
}
