#![cfg(feature = "kernel")]

use conwire::prelude::*;
use conwire::kernel::ConfigError;
use conwire::{WiringError, WiringErrorExt, wire_from_files};
use tempfile::TempDir;

const PROFILES: &str = r#"
[[conventions]]
mode = "singleton"
root_namespaces = ["App"]
interface_suffixes = ["Service"]

[[conventions]]
mode = "transient"
root_namespaces = ["App"]
interface_suffixes = ["Repository"]
restrict_implementations_to_interface_namespace = true
"#;

const CATALOG: &str = r#"{
  "types": [
    { "qualified_name": "App.IWidgetService", "name": "IWidgetService", "namespace": "App", "is_interface": true },
    { "qualified_name": "App.WidgetService", "name": "WidgetService", "namespace": "App", "interfaces": ["App.IWidgetService"] },
    { "qualified_name": "App.Data.IUserRepository", "name": "IUserRepository", "namespace": "App.Data", "is_interface": true },
    { "qualified_name": "App.Data.UserRepository", "name": "UserRepository", "namespace": "App.Data", "interfaces": ["App.Data.IUserRepository"] }
  ]
}"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("conwire.toml"), PROFILES).unwrap();
    std::fs::create_dir(dir.path().join("catalogs")).unwrap();
    std::fs::write(dir.path().join("catalogs/app.json"), CATALOG).unwrap();
    dir
}

#[test]
fn test_wire_from_files() {
    let dir = workspace();
    let mut services = ServiceCollection::new();

    let reports =
        wire_from_files(&mut services, dir.path().join("conwire.toml"), dir.path().join("catalogs"))
            .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(services.get("App.IWidgetService").unwrap().lifetime, Lifetime::Singleton);
    assert_eq!(services.get("App.Data.IUserRepository").unwrap().lifetime, Lifetime::Transient);
    assert!(conwire::features::is_enabled("kernel"));
}

#[test]
fn test_missing_catalog_dir() {
    let dir = workspace();
    let mut services = ServiceCollection::new();

    let err = wire_from_files(&mut services, dir.path().join("conwire.toml"), dir.path().join("nope"))
        .unwrap_err();

    assert!(matches!(err, WiringError::Config { .. }));
    assert!(services.is_empty());
}

#[test]
fn test_unknown_lifetime_reaches_caller_with_context() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("conwire.toml"),
        "[[conventions]]\nmode = \"pooled\"\nroot_namespaces = [\"App\"]\ninterface_suffixes = [\"Service\"]\n",
    )
    .unwrap();
    let mut services = ServiceCollection::new();

    let err = wire_from_files(&mut services, dir.path().join("conwire.toml"), dir.path().join("catalogs"))
        .context("startup")
        .unwrap_err();

    match &err {
        WiringError::Config { source: ConfigError::Convention { .. }, context } => {
            assert_eq!(context.as_deref(), Some("startup"));
        },
        other => panic!("unexpected error: {other}"),
    }
    let text = err.to_string();
    assert!(text.starts_with("Loading failed (startup)"), "{text}");
    assert!(text.contains("profile #0") && text.contains("pooled"), "{text}");
    assert!(services.is_empty());
}
