//! Common test utilities for entity-acl

pub mod fixtures;
pub mod stores;

pub use fixtures::{RoleFactory, UserFactory};
pub use stores::FlakyStore;
