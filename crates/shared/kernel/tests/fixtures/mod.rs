use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROFILES_TOML: &str = r#"
[[conventions]]
mode = "singleton"
root_namespaces = [" App ", ""]
interface_suffixes = ["Service"]

[[conventions]]
lifetime = "scoped"
interface_prefix = "Abstract"
root_namespaces = ["Shop", "Billing"]
interface_suffixes = ["Repository", "Store"]
enforce_strict_naming = false
allowed_implementation_namespaces = ["Infra.Storage"]
"#;

pub const WIDGET_CATALOG: &str = r#"{
  "types": [
    { "qualified_name": "App.IWidgetService", "name": "IWidgetService", "namespace": "App", "is_interface": true },
    { "qualified_name": "App.WidgetService", "name": "WidgetService", "namespace": "App", "interfaces": ["App.IWidgetService"] }
  ]
}"#;

pub const CLOCK_CATALOG: &str = r#"{
  "types": [
    { "qualified_name": "App.IClockService", "name": "IClockService", "namespace": "App", "is_interface": true },
    { "qualified_name": "App.ClockService", "name": "ClockService", "namespace": "App", "interfaces": ["App.IClockService"] }
  ]
}"#;

/// Writes `content` to `dir/name`, creating parent directories.
///
/// # Panics
/// * If the file cannot be written.
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture dir");
    }
    std::fs::write(&path, content).expect("write fixture");
    path
}

/// # Panics
/// * If the temporary directory cannot be created.
#[must_use]
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("temp dir")
}
