//! Call-to-action links.
//!
//! Navigation belongs to the platform router, so the homepage only describes
//! the link (target, class, label) and hands it to a registered builder. Until
//! a shell registers one, a plain anchor is rendered.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Builds a router link for `to`, carrying `class` and the localized `label`.
pub struct CtaBuilder {
    pub link: fn(to: &str, class: &str, label: &str) -> Element,
}

static CTA_BUILDER: OnceCell<CtaBuilder> = OnceCell::new();

pub fn register_cta(builder: CtaBuilder) {
    if CTA_BUILDER.set(builder).is_err() {
        tracing::debug!("[cta] builder already registered; keeping the first one");
    }
}

pub fn cta_link(to: &str, class: &str, label: &str) -> Element {
    match CTA_BUILDER.get() {
        Some(builder) => (builder.link)(to, class, label),
        None => rsx! {
            a { class: "{class}", href: "{to}", "{label}" }
        },
    }
}
