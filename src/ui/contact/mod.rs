//! Contact UI module
//!
//! The contact section and the reactive context the submission controller
//! drives.

mod contact_form;
mod context;

pub use contact_form::ContactSection;
pub use context::{ContactContext, provide_contact_context, use_contact_context};
