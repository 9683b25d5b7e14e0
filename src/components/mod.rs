//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod project_card;
mod project_row;
mod navbar;
mod footer;

pub use button::{Button, ButtonVariant};
pub use project_card::ProjectCard;
pub use project_row::ProjectListRow;
pub use navbar::Navbar;
pub use footer::Footer;
