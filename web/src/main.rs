use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{register_cta, AppNavbar, CtaBuilder};
use ui::views::{DocsIntro, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/docs/intro")]
    DocsIntro {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_docs(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::DocsIntro {},
        "{label}"
    })
}

/// Call-to-action targets are plain paths; the router resolves them.
fn cta_link(to: &str, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: to.to_string(),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            docs: nav_docs,
        });
        register_cta(CtaBuilder { link: cta_link });
    }

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
