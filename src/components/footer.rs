use crate::config::SiteConfig;
use leptos::*;
use leptos_router::A;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="site-footer">
            <p class="footer-links">
                <A href="/privacy">"Privacy Policy"</A>
                " · "
                <A href="/terms">"Terms of Service"</A>
                " · "
                <A href="/status">"System Status"</A>
            </p>
            <p>
                "Questions? "
                <a href=format!("mailto:{}", config.support_email)>{config.support_email.clone()}</a>
            </p>
            <p>{format!("\u{a9} 2025 {}", config.app_name)}</p>
        </footer>
    }
}
