use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Id of the end-game button, used to return focus after the reset dialog.
pub const END_GAME_BUTTON_ID: &str = "end-game-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    /// Shown only while a session is running or under review.
    #[prop_or_default]
    pub show_end_game: bool,
    #[prop_or_default]
    pub on_end_game: Callback<AttrValue>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let end_game = {
        let cb = p.on_end_game.clone();
        Callback::from(move |_| cb.emit(AttrValue::from(END_GAME_BUTTON_ID)))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-title">
                    <h1>{ t("app.title") }</h1>
                    <p class="subtitle">{ t("app.subtitle") }</p>
                </div>
                <nav aria-label={t("nav.language")} class="header-left">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
                if p.show_end_game {
                    <div class="header-right">
                        <button id={END_GAME_BUTTON_ID} type="button" onclick={end_game}>
                            { t("header.end_game") }
                        </button>
                    </div>
                }
            </div>
        </header>
    }
}
