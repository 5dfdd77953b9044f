//! Error handling for the access control layer
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{AclError, Result};
