use dioxus::prelude::*;

use crate::components::cta::cta_link;
use crate::core::site;

/// Landing page behind the homepage "Get Started" action.
#[component]
pub fn DocsIntro() -> Element {
    // Subscribe to the global language code so this view re-renders on switch.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let site_title = site::config().title.clone();
    let back = cta_link("/", "button button--ghost", &crate::t!("docs-intro-back"));

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-docs",
            div { class: "container",
                h1 { {crate::t!("docs-intro-heading", site = site_title)} }
                p { {crate::t!("docs-intro-body")} }
                {back}
            }
        }
    }
}
