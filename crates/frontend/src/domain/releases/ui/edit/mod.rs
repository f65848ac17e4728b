//! Release edit form.
//!
//! - view_model.rs: form state, conversion to the update body, commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ReleaseEdit;
pub use view_model::{ReleaseEditViewModel, ReleaseForm};
