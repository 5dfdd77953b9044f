//! Test fixtures and data factories
//!
//! All factories create real entities, not mocks.

use entity_acl::{Role, RoleHandle, RoleRegistry, User};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Factory for creating test roles
pub struct RoleFactory;

impl RoleFactory {
    /// Role granting the given permissions
    pub fn granting(name: &str, permissions: &[&str]) -> Role {
        let mut role = Role::new(name).with_title(name);
        role.grant(permissions);
        role
    }

    /// The editor/admin pair: admin inherits from editor
    pub fn editor_and_admin(registry: &RoleRegistry) -> (RoleHandle, RoleHandle) {
        let editor = registry.insert(Self::granting("editor", &["edit"]));

        let mut admin = Role::new("admin").with_title("Admin").inheriting("editor");
        admin.grant("publish");
        let admin = registry.insert(admin);

        (editor, admin)
    }
}

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// User with a unique email and no roles
    pub fn create() -> User {
        User::new(format!("user-{}@example.com", next_id())).with_display_name("Test User")
    }

    /// User holding the given resolved roles
    pub fn with_roles(roles: &[&RoleHandle]) -> User {
        let mut user = Self::create();
        for role in roles {
            user.grant(*role);
        }
        user
    }
}
