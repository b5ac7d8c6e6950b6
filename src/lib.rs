pub mod analytics;
pub mod components;
pub mod config;
pub mod contact;
pub mod dates;
pub mod error;
pub mod logging;
pub mod pages;
pub mod status;
pub mod storage;
pub mod trips;

use components::NavBar;
use config::SiteConfig;
use leptos::*;
use leptos_router::*;
use pages::{
    AboutPage, ContactPage, FeaturesPage, HomePage, MobileAppPage, NotFoundPage,
    PrivacyPolicyPage, StatusPage, TermsOfServicePage,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Leptos 0.6's router doesn't always re-render `<Routes>` on browser
/// back/forward, so reload on `popstate` instead. Scroll position survives
/// through session storage.
fn setup_popstate_reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The callback every page receives: leave the page for the landing page.
fn back_home() -> Callback<()> {
    let navigate = use_navigate();
    Callback::new(move |_| navigate("/", NavigateOptions::default()))
}

/// Root component with the error fallback
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"Try refreshing the page. If that doesn't help, reset and reload."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        storage::clear_all();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Provides configuration and owns navigation for every page.
#[component]
fn RootInner() -> impl IntoView {
    provide_context(SiteConfig::load());

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/about" view=|| view! { <AboutPage on_back=back_home()/> }/>
                <Route path="/contact" view=|| view! { <ContactPage on_back=back_home()/> }/>
                <Route path="/features" view=|| view! { <FeaturesPage on_back=back_home()/> }/>
                <Route path="/mobile" view=|| view! { <MobileAppPage on_back=back_home()/> }/>
                <Route path="/privacy" view=|| view! { <PrivacyPolicyPage on_back=back_home()/> }/>
                <Route path="/terms" view=|| view! { <TermsOfServicePage on_back=back_home()/> }/>
                <Route path="/status" view=|| view! { <StatusPage on_back=back_home()/> }/>
                <Route path="/*" view=|| view! { <NotFoundPage on_back=back_home()/> }/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    storage::setup_scroll_restoration();
    setup_popstate_reload();
    mount_to_body(Root);
    logging::log_info("site mounted");
    // Give the first render a moment before jumping to the saved position
    storage::restore_scroll_after_delay(50);
}
