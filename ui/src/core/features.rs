//! Static feature list shown in the homepage grid. Order is display order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Optional illustration URL rendered above the title.
    pub image: Option<&'static str>,
}

impl FeatureEntry {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            image: None,
        }
    }

    pub const fn with_image(self, image: &'static str) -> Self {
        Self {
            image: Some(image),
            ..self
        }
    }
}

pub static FEATURES: &[FeatureEntry] = &[
    FeatureEntry::new(
        "High Performance",
        "These data structures are designed to be as fast as possible, so that way your bottleneck should never be the library.",
    ),
    FeatureEntry::new(
        "Documentation",
        "The data structures here are documented so that way there is never any confusion.",
    ),
    FeatureEntry::new(
        "Strict Typing",
        "Since Luau is a typed language, these data structures are typed so that you will reduce the amount of bugs caused by type errors.",
    ),
    FeatureEntry::new(
        "Ultra Strict Mode",
        "For added protections against mistakes, you can enable the global ultra strict mode flag to get more errors.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_four_entries_in_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            ["High Performance", "Documentation", "Strict Typing", "Ultra Strict Mode"]
        );
    }

    #[test]
    fn reference_entries_have_no_images() {
        assert!(FEATURES.iter().all(|f| f.image.is_none()));
    }

    #[test]
    fn with_image_sets_url() {
        let entry = FeatureEntry::new("A", "B").with_image("/img/a.svg");
        assert_eq!(entry.image, Some("/img/a.svg"));
    }
}
