use dioxus::prelude::*;

use crate::components::cta::cta_link;
use crate::core::features::FEATURES;
use crate::core::presenter::{self, BackgroundImage, BannerSection, FeatureCard, FeatureGrid};
use crate::core::site;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");
const HOME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/home.css"
));

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code; the CTA label is resolved here and
    // handed down so the header re-renders when it changes.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    let layout = use_hook(|| presenter::render(site::config(), FEATURES));

    tracing::debug!(
        "[home] render lang={_lang_current} cards={}",
        layout.features.as_ref().map_or(0, |grid| grid.cards.len())
    );

    let cta_label = crate::i18n::lookup(layout.banner.cta.label_key);
    let title = layout.meta.title;
    let description = layout.meta.description;

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Link { rel: "stylesheet", href: HOME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HOME_CSS_INLINE}" }
        }

        HomepageHeader { banner: layout.banner, cta_label: cta_label }
        main {
            if let Some(grid) = layout.features {
                HomepageFeatures { grid: grid }
            }
            div { class: "container" }
        }
    }
}

#[component]
pub fn HomepageHeader(banner: BannerSection, cta_label: String) -> Element {
    let style = banner.background.as_ref().map(BackgroundImage::style);
    let BannerSection {
        class,
        title,
        title_class,
        tagline,
        tagline_class,
        buttons_class,
        cta,
        ..
    } = banner;
    let action = cta_link(cta.to, cta.class, &cta_label);

    rsx! {
        header { class: "{class}", style: style,
            div { class: "container",
                h1 { class: "{title_class}", "{title}" }
                p { class: "{tagline_class}", "{tagline}" }
                div { class: "{buttons_class}", {action} }
            }
        }
    }
}

#[component]
pub fn HomepageFeatures(grid: FeatureGrid) -> Element {
    let FeatureGrid { class, cards } = grid;

    rsx! {
        section { class: "{class}",
            div { class: "container",
                div { class: "row",
                    for (idx, card) in cards.into_iter().enumerate() {
                        Feature { key: "{idx}", card: card }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Feature(card: FeatureCard) -> Element {
    let FeatureCard {
        column_class,
        image,
        title,
        description,
    } = card;

    rsx! {
        div { class: column_class,
            if let Some(image) = image {
                div { class: "text--center",
                    img { class: "{image.class}", alt: "{image.alt}", src: "{image.src}" }
                }
            }
            div { class: "text--center padding-horiz--md",
                h3 { "{title}" }
                p { "{description}" }
            }
        }
    }
}
