//! Site pages
//!
//! - Landing page (home, services, contact)
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
