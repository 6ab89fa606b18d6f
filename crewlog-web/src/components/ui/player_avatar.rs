use crate::game::{Player, PlayerId};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub player: Player,
    #[prop_or_default]
    pub selected: bool,
    /// The caller decides whether a dead player may be picked at this step.
    #[prop_or_default]
    pub selectable: bool,
    #[prop_or_default]
    pub on_select: Callback<PlayerId>,
}

#[function_component(PlayerAvatar)]
pub fn player_avatar(p: &Props) -> Html {
    let player = &p.player;
    let alive = player.is_alive();
    let onclick = {
        let cb = p.on_select.clone();
        let id = player.id;
        Callback::from(move |_| cb.emit(id))
    };
    let mut class = classes!("player-avatar");
    if !alive {
        class.push("dead");
    }
    if p.selected {
        class.push("selected");
    }
    let label = if alive {
        player.name.clone()
    } else {
        format!("{} ({})", player.name, crate::i18n::t("console.dead"))
    };
    html! {
        <button
            type="button"
            {class}
            style={format!("--crew-color: {}", player.color.hex())}
            disabled={!p.selectable}
            aria-pressed={p.selected.to_string()}
            aria-label={label}
            data-player={player.name.clone()}
            {onclick}
        >
            <span class="player-avatar__dot" aria-hidden="true"></span>
            <span class="player-avatar__name">{ player.name.clone() }</span>
        </button>
    }
}
