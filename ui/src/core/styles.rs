//! Class-name lookup and composition for the homepage.
//!
//! Components never spell scoped class names directly; they ask a
//! [`ClassTable`] by logical key. A key the table does not know resolves to an
//! empty string so the element renders unstyled instead of failing, and
//! [`class_names`] drops empty parts so no stray whitespace leaks into markup.

/// Logical key → class name mapping for one stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct ClassTable {
    entries: &'static [(&'static str, &'static str)],
}

impl ClassTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Class for `key`, or `""` when the stylesheet has no such class.
    pub fn get(&self, key: &str) -> &'static str {
        match self.entries.iter().find(|(k, _)| *k == key) {
            Some((_, class)) => *class,
            None => {
                tracing::debug!("[styles] missing class for key `{key}`");
                ""
            }
        }
    }
}

/// Homepage stylesheet (`assets/styling/home.css`).
pub const HOME_STYLES: ClassTable = ClassTable::new(&[
    ("heroBanner", "home-hero"),
    ("buttons", "home-hero__buttons"),
    ("features", "home-features"),
    ("featureSvg", "home-feature__svg"),
    ("titleOnBannerImage", "home-hero__title--on-banner"),
    ("taglineOnBannerImage", "home-hero__tagline--on-banner"),
]);

/// Join non-empty class parts with single spaces.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Banner styling has exactly two outcomes, picked by whether a background
/// image is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerVariant {
    WithBanner,
    WithoutBanner,
}

impl BannerVariant {
    pub fn from_image(image: Option<&str>) -> Self {
        match image {
            Some(url) if !url.is_empty() => Self::WithBanner,
            _ => Self::WithoutBanner,
        }
    }

    pub fn has_background(self) -> bool {
        matches!(self, Self::WithBanner)
    }

    /// Style-table keys layered on top of the base title class.
    fn title_keys(self) -> &'static [&'static str] {
        match self {
            Self::WithBanner => &["titleOnBannerImage"],
            Self::WithoutBanner => &[],
        }
    }

    /// Style-table keys layered on top of the base tagline class.
    fn tagline_keys(self) -> &'static [&'static str] {
        match self {
            Self::WithBanner => &["taglineOnBannerImage"],
            Self::WithoutBanner => &[],
        }
    }

    pub fn title_class(self, table: &ClassTable) -> String {
        compose(TITLE_BASE, self.title_keys(), table)
    }

    pub fn tagline_class(self, table: &ClassTable) -> String {
        compose(TAGLINE_BASE, self.tagline_keys(), table)
    }
}

const TITLE_BASE: &str = "hero__title";
const TAGLINE_BASE: &str = "hero__subtitle";

fn compose(base: &str, keys: &[&str], table: &ClassTable) -> String {
    let mut parts = vec![base];
    parts.extend(keys.iter().map(|key| table.get(key)));
    class_names(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(HOME_STYLES.get("heroBanner"), "home-hero");
        assert_eq!(HOME_STYLES.get("noSuchClass"), "");
        assert_eq!(HOME_STYLES.get("featureSvg"), "home-feature__svg");
    }

    #[test]
    fn class_names_skips_empty_parts() {
        assert_eq!(class_names(["hero", "", "  ", "home-hero"]), "hero home-hero");
        assert_eq!(class_names(Vec::<&str>::new()), "");
    }

    #[test]
    fn variant_follows_image_presence() {
        assert_eq!(BannerVariant::from_image(Some("/a.png")), BannerVariant::WithBanner);
        assert_eq!(BannerVariant::from_image(Some("")), BannerVariant::WithoutBanner);
        assert_eq!(BannerVariant::from_image(Some("  ")), BannerVariant::WithBanner);
        assert_eq!(BannerVariant::from_image(None), BannerVariant::WithoutBanner);
    }

    #[test]
    fn banner_variant_adds_contrast_classes() {
        let with = BannerVariant::WithBanner;
        assert_eq!(with.title_class(&HOME_STYLES), "hero__title home-hero__title--on-banner");
        assert_eq!(
            with.tagline_class(&HOME_STYLES),
            "hero__subtitle home-hero__tagline--on-banner"
        );

        let without = BannerVariant::WithoutBanner;
        assert_eq!(without.title_class(&HOME_STYLES), "hero__title");
        assert_eq!(without.tagline_class(&HOME_STYLES), "hero__subtitle");
    }

    #[test]
    fn unstyled_table_degrades_to_base_classes() {
        let empty = ClassTable::new(&[]);
        assert_eq!(BannerVariant::WithBanner.title_class(&empty), "hero__title");
        assert_eq!(BannerVariant::WithBanner.tagline_class(&empty), "hero__subtitle");
    }
}
