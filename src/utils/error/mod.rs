//! Error handling utilities
//!
//! This module provides the error type shared by every part of the crate.

pub mod error;

pub use error::*;
