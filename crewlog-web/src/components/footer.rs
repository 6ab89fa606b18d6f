use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ t("footer.note") }</footer>
    }
}
