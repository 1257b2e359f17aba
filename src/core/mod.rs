//! Contact form domain: validation, delivery, fallback and notifications

pub mod config;
mod controller;
mod delivery;
mod form;
mod mailto;
pub mod navigation;
mod notification;
#[cfg(test)]
mod tests;
mod validation;

pub use config::ContactConfig;
pub use controller::*;
pub use delivery::*;
pub use form::*;
pub use mailto::*;
pub use notification::*;
pub use validation::*;
