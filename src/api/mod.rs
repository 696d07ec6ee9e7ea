//! Backend API Wrappers
//!
//! Typed bindings to the consultancy REST backend, organized by domain.

mod client;
pub mod endpoints;
mod auth;
mod search;
mod profile;
mod courses;
mod admin;

// Re-export all public items
pub use auth::*;
pub use search::*;
pub use profile::*;
pub use courses::*;
pub use admin::*;
