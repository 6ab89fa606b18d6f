use crate::game::{LOCATIONS, Location};
use crate::i18n::t;
use yew::prelude::*;

/// Localized label for a map point.
#[must_use]
pub fn location_label(location: &Location) -> String {
    t(&format!("locations.{}", location.id))
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub selected: Option<u8>,
    #[prop_or_default]
    pub interactive: bool,
    #[prop_or_default]
    pub on_pick: Callback<u8>,
}

#[function_component(LocationMap)]
pub fn location_map(p: &Props) -> Html {
    html! {
        <div class="location-map" role="group" aria-label={t("console.location")}>
            { for LOCATIONS.iter().map(|location| {
                let id = location.id;
                let onclick = {
                    let cb = p.on_pick.clone();
                    Callback::from(move |_| cb.emit(id))
                };
                let selected = p.selected == Some(id);
                let class = classes!("map-pin", selected.then_some("selected"));
                html! {
                    <button
                        type="button"
                        {class}
                        style={format!("left: {}%; top: {}%", location.x, location.y)}
                        disabled={!p.interactive}
                        aria-pressed={selected.to_string()}
                        data-location={id.to_string()}
                        {onclick}
                    >
                        { location_label(location) }
                    </button>
                }
            }) }
        </div>
    }
}
