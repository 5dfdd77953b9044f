//! Utility modules
//!
//! - **crypto**: credential hashing
//! - **error**: the crate error type
//! - **logging**: tracing subscriber setup

pub mod crypto;
pub mod error;
pub mod logging;
