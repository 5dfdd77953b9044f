//! Permission resolution integration tests
//!
//! Exercises roles, inheritance and users through the public API only.

#[cfg(test)]
mod tests {
    use crate::common::{RoleFactory, UserFactory};
    use entity_acl::{NoInherit, PermissionState, Role, RoleHandle, RoleRegistry};

    // ==================== Role Resolution ====================

    #[test]
    fn test_editor_admin_scenario() {
        let registry = RoleRegistry::default();
        let (editor, admin) = RoleFactory::editor_and_admin(&registry);

        assert!(admin.read().granted(&["edit", "publish"], &registry));

        admin.write().revoke("edit");
        assert!(!admin.read().granted("edit", &registry));
        assert!(editor.read().granted("edit", &registry));
        assert!(admin.read().granted("publish", &registry));
    }

    #[test]
    fn test_lifecycle_returns_to_baseline() {
        let registry = RoleRegistry::default();
        let (_editor, admin) = RoleFactory::editor_and_admin(&registry);

        // Baseline: inherited
        assert_eq!(admin.read().state("edit"), PermissionState::Unset);
        assert!(admin.read().granted("edit", &registry));

        admin.write().grant("edit");
        assert!(admin.read().granted("edit", &registry));

        admin.write().revoke("edit");
        assert!(!admin.read().granted("edit", &registry));

        admin.write().reset("edit");
        assert_eq!(admin.read().state("edit"), PermissionState::Unset);
        assert!(admin.read().granted("edit", &registry));
    }

    #[test]
    fn test_super_role_ignores_revocations() {
        let mut root = Role::new("root").with_super(true);
        root.revoke(&["delete", "drop"]);

        assert!(root.granted(&["delete", "drop", "anything"], &NoInherit));
    }

    #[test]
    fn test_batch_fails_when_any_member_fails() {
        let role = RoleFactory::granting("ops", &["p1", "p2", "p3"]);

        assert!(role.granted(&["p1", "p2", "p3"], &NoInherit));
        assert!(!role.granted(&["p1", "p2", "p3", "p4"], &NoInherit));
    }

    #[test]
    fn test_cyclic_registry_terminates() {
        let registry = RoleRegistry::new(8);
        let a = registry.insert(Role::new("a").inheriting("c"));
        registry.insert(Role::new("b").inheriting("a"));
        let c = registry.insert(Role::new("c").inheriting("b"));

        a.write().grant("from-a");

        assert!(c.read().granted("from-a", &registry));
        assert!(!c.read().granted("nowhere", &registry));
    }

    // ==================== User Access ====================

    #[test]
    fn test_user_access_unions_roles() {
        let r1 = RoleHandle::new(RoleFactory::granting("r1", &["a"]));
        let r2 = RoleHandle::new(RoleFactory::granting("r2", &["b"]));

        let both = UserFactory::with_roles(&[&r1, &r2]);
        assert!(both.access(&["a", "b"], &NoInherit));

        assert!(!UserFactory::with_roles(&[&r1]).access(&["a", "b"], &NoInherit));
        assert!(!UserFactory::with_roles(&[&r2]).access(&["a", "b"], &NoInherit));
    }

    #[test]
    fn test_user_access_through_inherited_role() {
        let registry = RoleRegistry::default();
        let (_editor, admin) = RoleFactory::editor_and_admin(&registry);
        let user = UserFactory::with_roles(&[&admin]);

        assert!(user.access(&["edit", "publish"], &registry));

        admin.write().revoke("edit");
        assert!(!user.access("edit", &registry));
    }

    #[test]
    fn test_explicit_revoke_in_one_role_does_not_block_another() {
        let mut denies = Role::new("denies");
        denies.revoke("edit");
        let denies = RoleHandle::new(denies);
        let allows = RoleHandle::new(RoleFactory::granting("allows", &["edit"]));

        let user = UserFactory::with_roles(&[&denies, &allows]);
        assert!(user.access("edit", &NoInherit));
    }

    #[test]
    fn test_user_without_roles_has_no_access() {
        let user = UserFactory::create();
        assert!(!user.access("read", &NoInherit));
        assert!(!user.access(&["read"], &NoInherit));
    }

    #[test]
    fn test_grant_by_name_is_not_granted_until_resolved() {
        let registry = RoleRegistry::default();
        let (editor, _admin) = RoleFactory::editor_and_admin(&registry);

        let mut user = UserFactory::create();
        user.grant("editor");
        assert!(!user.granted("editor"));
        assert!(!user.access("edit", &registry));

        // Granting the loaded role does not upgrade the placeholder
        user.grant(&editor);
        assert!(!user.granted("editor"));

        user.revoke("editor");
        user.grant(&editor);
        assert!(user.granted("editor"));
        assert!(user.access("edit", &registry));
    }
}
