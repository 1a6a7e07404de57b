//! Shared UI crate for the documentation site. Views, navigation glue and the
//! platform-agnostic homepage presenter live here.

use dioxus::prelude::*;

/// Shared theme stylesheet (tokens, grid, hero and button primitives).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized site navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Router-agnostic call-to-action links (components/cta.rs)
    pub mod cta;
    pub use cta::register_cta;
    pub use cta::CtaBuilder;
}
