//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

pub mod acl;
pub mod logging;

pub use acl::*;
pub use logging::*;

fn default_false() -> bool {
    false
}
