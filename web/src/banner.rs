use yew::prelude::*;

#[function_component]
pub(crate) fn Banner() -> Html {
    html! {
        <header class="banner">
            <h3>{"Welcome to the game! Have Fun!"}</h3>
            <div>
                <a href="/" title="About">{"About"}</a>
                <a href="/" title="Contact">{"Contacts"}</a>
            </div>
        </header>
    }
}
