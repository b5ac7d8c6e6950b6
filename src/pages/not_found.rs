use crate::components::BackNav;
use leptos::*;

#[component]
pub fn NotFoundPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <main class="container">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"Page not found"</p>
            </header>

            <BackNav on_back=on_back/>
        </main>
    }
}
