//! Users
//!
//! A user holds role bindings keyed by machine name and a credential hash.

mod access;
mod roles;
mod types;

pub use roles::RoleKey;
pub use types::{RoleBinding, User};
