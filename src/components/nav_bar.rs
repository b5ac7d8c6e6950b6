use crate::config::SiteConfig;
use leptos::*;
use leptos_router::{use_location, A};

const LINKS: [(&str, &str); 5] = [
    ("/features", "Features"),
    ("/mobile", "Mobile App"),
    ("/about", "About"),
    ("/status", "Status"),
    ("/contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        if pathname().starts_with(href) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">{config.app_name}</A>
                <div class="nav-links">
                    {LINKS
                        .into_iter()
                        .map(move |(href, label)| view! {
                            <A href=href class=move || link_class(href)>{label}</A>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
