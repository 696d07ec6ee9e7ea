//! UI Components
//!
//! Reusable Leptos components.

mod nav_link;
mod navbar;
mod footer;
mod alert;
mod tab_bar;
mod password_input;
mod course_suggest_input;
mod consultancy_card;
mod require_role;

pub use nav_link::NavLink;
pub use navbar::{nav_items, NavItem, Navbar};
pub use footer::Footer;
pub use alert::{ErrorBanner, LoadingIndicator};
pub use tab_bar::{TabBar, TabItem};
pub use password_input::PasswordInput;
pub use course_suggest_input::CourseSuggestInput;
pub use consultancy_card::ConsultancyCard;
pub use require_role::RequireRole;
