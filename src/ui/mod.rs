pub mod common;
pub mod contact;
pub mod notifications;
pub mod pages;

pub use contact::{ContactContext, ContactSection, provide_contact_context, use_contact_context};
pub use notifications::{NotificationCenter, NotificationToast};
