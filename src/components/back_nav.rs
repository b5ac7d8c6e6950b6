use leptos::*;

/// Back button handing navigation to whoever hosts the page.
#[component]
pub fn BackNav(
    #[prop(into)] on_back: Callback<()>,
    #[prop(optional)] bottom: bool,
    #[prop(default = "< Back home")] label: &'static str,
) -> impl IntoView {
    view! {
        <nav class="back-nav" class:bottom=bottom>
            <button class="link-button" on:click=move |_| on_back.call(())>{label}</button>
        </nav>
    }
}
