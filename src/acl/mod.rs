//! Access control core
//!
//! Roles carry tri-state permission maps with single-parent inheritance and
//! an optional super override. Users collect roles and are granted a
//! permission when any of their resolved roles grants it.

pub mod registry;
pub mod role;
pub mod sanitize;
pub mod system;
pub mod types;
pub mod user;

pub use registry::{DEFAULT_MAX_INHERIT_DEPTH, NoInherit, RoleLookup, RoleRegistry};
pub use role::{Role, RoleHandle};
pub use sanitize::sanitize_password;
pub use system::AclSystem;
pub use types::{PermissionList, PermissionState, ROLE_KIND, RoleRef, USER_KIND};
pub use user::{RoleBinding, RoleKey, User};
