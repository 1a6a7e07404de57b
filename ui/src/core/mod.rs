//! Platform-agnostic homepage logic. Nothing in here touches Dioxus.

pub mod features;
pub mod presenter;
pub mod site;
pub mod styles;
