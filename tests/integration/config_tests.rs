//! Configuration and bootstrap integration tests

#[cfg(test)]
mod tests {
    use entity_acl::{AclSystem, Argon2Hasher, Config, EntityKind, MemoryStore, User};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
acl:
  max_inherit_depth: 4
  default_roles:
    - machine_name: "editor"
      title: "Editor"
      grant: ["edit", "comment"]
    - machine_name: "admin"
      title: "Admin"
      inherit: "editor"
      grant: ["publish"]
      revoke: ["comment"]
    - machine_name: "root"
      title: "Root"
      is_super: true
logging:
  level: "debug"
"#;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_bootstrap_from_config_file() {
        let file = config_file(CONFIG);
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.logging().level, "debug");

        let acl = AclSystem::new(config.acl(), MemoryStore::new(), Argon2Hasher).unwrap();
        assert_eq!(acl.bootstrap().await.unwrap(), 3);
        assert_eq!(acl.registry().names(), vec!["admin", "editor", "root"]);
        assert_eq!(acl.config().max_inherit_depth, 4);

        let admin = acl.registry().get("admin").unwrap();
        assert!(acl.role_granted(&admin, &["edit", "publish"]));
        assert!(!acl.role_granted(&admin, "comment"));

        let root = acl.registry().get("root").unwrap();
        assert!(acl.role_granted(&root, &["edit", "drop-tables"]));

        let stored = acl.store().raw(EntityKind::Role, "admin").unwrap();
        assert_eq!(stored["permissions"], json!({ "comment": false, "publish": true }));
        assert_eq!(stored["inherit"]["machineName"], json!("editor"));
    }

    #[tokio::test]
    async fn test_bootstrap_keeps_stored_roles() {
        let config = Config::from_yaml(CONFIG).unwrap();

        let first = AclSystem::new(config.acl(), MemoryStore::new(), Argon2Hasher).unwrap();
        first.bootstrap().await.unwrap();
        let editor = first.registry().get("editor").unwrap();
        first.revoke_permissions(&editor, "edit").await.unwrap();

        let second = AclSystem::new(config.acl(), first.into_store(), Argon2Hasher).unwrap();
        assert_eq!(second.bootstrap().await.unwrap(), 0);

        let editor = second.registry().get("editor").unwrap();
        assert!(!second.role_granted(&editor, "edit"));
    }

    #[tokio::test]
    async fn test_bootstrapped_roles_reach_users() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let acl = AclSystem::new(config.acl(), MemoryStore::new(), Argon2Hasher).unwrap();
        acl.bootstrap().await.unwrap();

        let mut user = User::new("jane@example.com");
        let admin = acl.registry().get("admin").unwrap();
        acl.assign_role(&mut user, &admin).await.unwrap();

        assert!(acl.access(&user, &["edit", "publish"]));
        assert!(!acl.access(&user, "comment"));
    }

    #[tokio::test]
    async fn test_invalid_config_file_is_rejected() {
        let file = config_file(
            r#"
acl:
  default_roles:
    - machine_name: "loop"
      inherit: "loop"
"#,
        );

        assert!(Config::from_file(file.path()).await.is_err());
        assert!(Config::from_file("/nonexistent/acl.yaml").await.is_err());
    }

    #[test]
    fn test_config_yaml_round_trip_preserves_seeds() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }
}
