//! Persistence and hydration integration tests

#[cfg(test)]
mod tests {
    use crate::common::{FlakyStore, RoleFactory};
    use entity_acl::config::AclConfig;
    use entity_acl::{AclError, AclSystem, Argon2Hasher, EntityKind, MemoryStore, Role, User};
    use serde_json::json;

    fn system() -> AclSystem<FlakyStore, Argon2Hasher> {
        AclSystem::new(&AclConfig::default(), FlakyStore::new(), Argon2Hasher).unwrap()
    }

    #[tokio::test]
    async fn test_failed_save_is_forwarded_without_rollback() {
        let acl = system();
        let editor = acl.create_role(Role::new("editor")).await.unwrap();

        acl.store().fail_saves(true);
        let err = acl.grant_permissions(&editor, "edit").await.unwrap_err();

        assert!(matches!(err, AclError::Storage(ref msg) if msg.contains("editor")));
        assert!(acl.role_granted(&editor, "edit"));

        // The store still holds the pre-grant document
        let raw = acl.store().inner().raw(EntityKind::Role, "editor").unwrap();
        assert_eq!(raw["permissions"], json!({}));

        // Retrying after recovery persists the in-memory state
        acl.store().fail_saves(false);
        acl.save_role(&editor).await.unwrap();
        let raw = acl.store().inner().raw(EntityKind::Role, "editor").unwrap();
        assert_eq!(raw["permissions"], json!({ "edit": true }));
    }

    #[tokio::test]
    async fn test_assign_existing_role_does_not_save() {
        let acl = system();
        let mut user = User::new("jane@example.com");

        acl.assign_role(&mut user, "editor").await.unwrap();
        acl.assign_role(&mut user, "editor").await.unwrap();

        assert_eq!(acl.store().saves(), 1);
    }

    #[tokio::test]
    async fn test_round_trip_user_through_store() {
        let acl = system();
        let editor = acl
            .create_role(RoleFactory::granting("editor", &["edit"]))
            .await
            .unwrap();
        let mut admin = Role::new("admin").inheriting("editor");
        admin.grant("publish");
        let admin = acl.create_role(admin).await.unwrap();

        let mut user = acl
            .register_user("jane@example.com", Some("Jane"), &json!("password"))
            .await
            .unwrap();
        acl.assign_role(&mut user, &admin).await.unwrap();
        assert!(acl.access(&user, &["edit", "publish"]));

        let stored = acl.store().inner().raw(EntityKind::User, "jane@example.com").unwrap();
        assert_eq!(
            stored["roles"],
            json!({ "admin": { "type": "acl-role", "machineName": "admin" } })
        );

        let loaded = acl.load_user("jane@example.com").await.unwrap().unwrap();
        assert!(loaded.granted("admin"));
        assert!(acl.access(&loaded, &["edit", "publish"]));

        // Later role changes reach the loaded user through the shared handle
        acl.revoke_permissions(&editor, "edit").await.unwrap();
        assert!(!acl.access(&loaded, "edit"));
    }

    #[tokio::test]
    async fn test_fresh_system_loads_roles_for_users() {
        let writer = AclSystem::new(&AclConfig::default(), MemoryStore::new(), Argon2Hasher).unwrap();
        writer
            .create_role(RoleFactory::granting("editor", &["edit"]))
            .await
            .unwrap();
        writer
            .create_role(Role::new("admin").inheriting("editor"))
            .await
            .unwrap();
        let mut user = User::new("jane@example.com");
        writer.assign_role(&mut user, "admin").await.unwrap();

        // Same store, empty registry
        let reader =
            AclSystem::new(&AclConfig::default(), writer.into_store(), Argon2Hasher).unwrap();
        assert!(reader.registry().is_empty());

        let loaded = reader.load_user("jane@example.com").await.unwrap().unwrap();
        assert!(loaded.granted("admin"));
        assert!(reader.registry().contains("editor"));
        assert!(reader.access(&loaded, "edit"));
    }

    #[tokio::test]
    async fn test_authenticate_hydrates_roles() {
        let acl = system();
        acl.create_role(RoleFactory::granting("viewer", &["read"]))
            .await
            .unwrap();
        let mut user = acl
            .register_user("jane@example.com", None, &json!(" hunter2 "))
            .await
            .unwrap();
        acl.assign_role(&mut user, "viewer").await.unwrap();

        let authed = acl
            .authenticate("jane@example.com", "hunter2")
            .await
            .unwrap()
            .unwrap();
        assert!(acl.access(&authed, "read"));

        assert!(acl
            .authenticate("jane@example.com", " hunter2 ")
            .await
            .unwrap()
            .is_none());
    }
}
