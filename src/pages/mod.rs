//! Pages
//!
//! One component per resolved route.

mod home;
mod about;
mod contact;
mod project_detail;
mod not_found;

pub use home::Home;
pub use about::About;
pub use contact::Contact;
pub use project_detail::ProjectDetail;
pub use not_found::NotFound;
