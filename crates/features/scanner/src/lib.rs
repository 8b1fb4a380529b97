//! # Scanner
//!
//! Infers interface-to-implementation bindings from a type snapshot and hands them to a
//! [`conwire_registry::Registry`].
//!
//! A pass runs in a fixed order: validate the convention, load the snapshot, filter candidate
//! interfaces and implementations, resolve every interface, then register. Nothing is written
//! before every interface has been resolved, so a forced pass that fails leaves the registry as
//! it was.
//!
//! # Example
//!
//! ```rust
//! use conwire_convention::ConventionSettings;
//! use conwire_domain::{Lifetime, TypeDescriptor};
//! use conwire_registry::ServiceCollection;
//! use conwire_scanner::RegistryExt;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let types = vec![
//!     TypeDescriptor::interface("App.IWidgetService"),
//!     TypeDescriptor::class("App.WidgetService").implements("App.IWidgetService"),
//! ];
//! let settings = ConventionSettings::builder()
//!     .with_mode(Lifetime::Singleton)
//!     .with_root_namespace("App")
//!     .allow_any_namespace()
//!     .with_default_prefix()
//!     .with_suffix("Service")
//!     .with_strict_naming()?;
//!
//! let mut services = ServiceCollection::new();
//! let report = services.inject_by_convention(&settings, &types)?;
//!
//! assert!(report.is_complete());
//! assert_eq!(services.get("App.IWidgetService").unwrap().implementation, "App.WidgetService");
//! # Ok(())
//! # }
//! ```

mod error;
mod extension;
mod filter;
mod matcher;
mod scanner;
mod source;

pub use error::{ResolutionFailure, ScanError, ScanErrorExt};
pub use extension::{InjectionManager, RegistryExt};
pub use filter::{filter_implementation_candidates, filter_interfaces};
pub use matcher::resolve_implementation;
pub use scanner::{ScanReport, Scanner, register};
pub use source::TypeSource;
