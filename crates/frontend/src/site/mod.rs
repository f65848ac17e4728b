//! Public pages reachable without signing in.

pub mod docs;
pub mod home;

pub use docs::DocsPage;
pub use home::AboutPage;
