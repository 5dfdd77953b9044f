//! Roles
//!
//! A role owns a tri-state permission map, an optional super flag and at most
//! one inherited role. Resolution lives in [`permissions`].

mod handle;
mod permissions;
mod types;

pub use handle::RoleHandle;
pub use types::Role;
