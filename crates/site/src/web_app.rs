use desktop_runtime::{DesktopProvider, DesktopShell, SITE_TITLE};
use leptos::*;
use leptos_meta::*;

const SITE_DESCRIPTION: &str = "Nygosaki | Developer & Security Researcher. Building tools for web automation, reverse engineering, digital reconnaissance, and more.";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en" />
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="author" content="Nygosaki" />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
