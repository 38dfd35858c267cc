use yew::prelude::*;

pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-shield-halved"></i> {" AI Disproval System"}</h1>
            <p class="subtitle">
                {"Upload any media file to verify authenticity. Text, images and video are checked for AI patterns in one place."}
            </p>
        </header>
    }
}
