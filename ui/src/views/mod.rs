mod docs;
pub use docs::DocsIntro;

mod home;
pub use home::{Feature, Home, HomepageFeatures, HomepageHeader};
