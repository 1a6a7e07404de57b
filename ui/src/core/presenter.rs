//! Homepage presenter.
//!
//! `render` turns the site configuration and the static feature list into a
//! [`PageLayout`]: a plain value describing every element, class and link of
//! the page. The Dioxus views only walk this value, so everything the page
//! shows can be checked here without a renderer.
//!
//! The function is pure. Equal inputs always produce equal layouts.

use crate::core::features::FeatureEntry;
use crate::core::site::{SiteConfig, GET_STARTED_PATH};
use crate::core::styles::{class_names, BannerVariant, ClassTable, HOME_STYLES};

/// Fluent key of the call-to-action label ("Get Started →").
pub const CTA_LABEL_KEY: &str = "home-cta";

const CTA_CLASS: &str = "button button--secondary button--lg";
const FEATURE_COLUMN_CLASS: &str = "col col--4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub meta: PageMeta,
    pub banner: BannerSection,
    /// `None` when there is nothing to show; an empty grid is never rendered.
    pub features: Option<FeatureGrid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSection {
    pub variant: BannerVariant,
    pub class: String,
    pub background: Option<BackgroundImage>,
    pub title: String,
    pub title_class: String,
    pub tagline: String,
    pub tagline_class: String,
    pub buttons_class: String,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage(pub String);

impl BackgroundImage {
    /// Inline style value for the banner element.
    pub fn style(&self) -> String {
        format!("background-image: url(\"{}\")", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label_key: &'static str,
    pub to: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGrid {
    pub class: String,
    pub cards: Vec<FeatureCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub column_class: &'static str,
    pub image: Option<CardImage>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub class: String,
}

pub fn render(config: &SiteConfig, features: &[FeatureEntry]) -> PageLayout {
    render_with_styles(config, features, &HOME_STYLES)
}

/// Same as [`render`] against an explicit class table.
pub fn render_with_styles(
    config: &SiteConfig,
    features: &[FeatureEntry],
    styles: &ClassTable,
) -> PageLayout {
    PageLayout {
        meta: PageMeta {
            title: config.title.clone(),
            description: config.tagline.clone(),
        },
        banner: render_banner(config, styles),
        features: render_features(features, styles),
    }
}

fn render_banner(config: &SiteConfig, styles: &ClassTable) -> BannerSection {
    let image = config.custom_fields.banner_image();
    let variant = BannerVariant::from_image(image);
    let background = image
        .filter(|_| variant.has_background())
        .map(|url| BackgroundImage(url.to_string()));

    BannerSection {
        variant,
        class: class_names(["hero", styles.get("heroBanner")]),
        background,
        title: config.title.clone(),
        title_class: variant.title_class(styles),
        tagline: config.tagline.clone(),
        tagline_class: variant.tagline_class(styles),
        buttons_class: styles.get("buttons").to_string(),
        cta: CallToAction {
            label_key: CTA_LABEL_KEY,
            to: GET_STARTED_PATH,
            class: CTA_CLASS,
        },
    }
}

fn render_features(features: &[FeatureEntry], styles: &ClassTable) -> Option<FeatureGrid> {
    if features.is_empty() {
        return None;
    }

    let image_class = styles.get("featureSvg");
    let cards = features
        .iter()
        .map(|entry| FeatureCard {
            column_class: FEATURE_COLUMN_CLASS,
            image: entry.image.map(|src| CardImage {
                src: src.to_string(),
                alt: entry.title.to_string(),
                class: image_class.to_string(),
            }),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
        })
        .collect();

    Some(FeatureGrid {
        class: styles.get("features").to_string(),
        cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FEATURES;

    fn plain() -> SiteConfig {
        SiteConfig::new("Luau DS", "Typed data structures")
    }

    #[test]
    fn banner_image_sets_background_and_contrast_classes() {
        let layout = render(&plain().with_banner_image("/img/banner.png"), FEATURES);
        let banner = &layout.banner;
        assert_eq!(banner.variant, BannerVariant::WithBanner);
        assert_eq!(
            banner.background.as_ref().map(BackgroundImage::style).as_deref(),
            Some("background-image: url(\"/img/banner.png\")")
        );
        assert!(banner.title_class.contains("home-hero__title--on-banner"));
        assert!(banner.tagline_class.contains("home-hero__tagline--on-banner"));
    }

    #[test]
    fn no_banner_image_keeps_default_styling() {
        for config in [plain(), plain().with_banner_image("")] {
            let banner = render(&config, FEATURES).banner;
            assert_eq!(banner.variant, BannerVariant::WithoutBanner);
            assert!(banner.background.is_none());
            assert_eq!(banner.title_class, "hero__title");
            assert_eq!(banner.tagline_class, "hero__subtitle");
        }
    }

    #[test]
    fn banner_url_is_passed_through_untouched() {
        let blank = SiteConfig::from_json(r#"{"title":"T","customFields":{"bannerImage":"  "}}"#).unwrap();
        let banner = render(&blank, FEATURES).banner;
        assert_eq!(banner.variant, BannerVariant::WithBanner);
        assert_eq!(banner.background, Some(BackgroundImage("  ".to_string())));

        let padded = render(&plain().with_banner_image(" /img/a b.png "), FEATURES).banner;
        assert_eq!(
            padded.background.map(|bg| bg.style()).as_deref(),
            Some("background-image: url(\" /img/a b.png \")")
        );
    }

    #[test]
    fn empty_feature_list_omits_grid() {
        assert!(render(&plain(), &[]).features.is_none());
    }

    #[test]
    fn cards_follow_input_order() {
        let grid = render(&plain(), FEATURES).features.expect("grid");
        assert_eq!(grid.class, "home-features");
        assert_eq!(grid.cards.len(), 4);
        for (card, entry) in grid.cards.iter().zip(FEATURES) {
            assert_eq!(card.title, entry.title);
            assert_eq!(card.description, entry.description);
            assert_eq!(card.column_class, "col col--4");
            assert!(card.image.is_none());
        }
    }

    #[test]
    fn card_image_uses_title_as_alt() {
        let entries = [
            FeatureEntry::new("Fast", "Quick").with_image("/img/fast.svg"),
            FeatureEntry::new("Typed", "Safe"),
        ];
        let grid = render(&plain(), &entries).features.unwrap();
        let image = grid.cards[0].image.as_ref().expect("image");
        assert_eq!(image.src, "/img/fast.svg");
        assert_eq!(image.alt, "Fast");
        assert_eq!(image.class, "home-feature__svg");
        assert!(grid.cards[1].image.is_none());
    }

    #[test]
    fn cta_always_points_at_docs_intro() {
        let with = render(&plain().with_banner_image("/b.png"), FEATURES);
        let without = render(&SiteConfig::new("Other", ""), &[]);
        for layout in [with, without] {
            assert_eq!(layout.banner.cta.to, "/docs/intro");
            assert_eq!(layout.banner.cta.label_key, CTA_LABEL_KEY);
        }
    }

    #[test]
    fn meta_mirrors_title_and_tagline() {
        let layout = render(&plain(), FEATURES);
        assert_eq!(layout.meta.title, "Luau DS");
        assert_eq!(layout.meta.description, "Typed data structures");
    }

    #[test]
    fn missing_classes_render_unstyled() {
        let bare = ClassTable::new(&[]);
        let layout = render_with_styles(&plain().with_banner_image("/b.png"), FEATURES, &bare);
        assert_eq!(layout.banner.class, "hero");
        assert_eq!(layout.banner.buttons_class, "");
        assert_eq!(layout.banner.title_class, "hero__title");
        assert!(layout.banner.background.is_some());
        assert_eq!(layout.features.unwrap().class, "");
    }
}
