//! Facade crate for convention-based wiring.
//! Re-exports the domain, convention, registry and scanner crates and, with the `kernel`
//! feature, file-based loading.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use conwire::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let types = vec![
//!     TypeDescriptor::interface("App.Orders.IOrderService"),
//!     TypeDescriptor::class("App.Orders.OrderService").implements("App.Orders.IOrderService"),
//! ];
//!
//! let settings = ConventionSettings::builder()
//!     .with_mode(Lifetime::Scoped)
//!     .with_root_namespace_of(&types[0])?
//!     .limit_to_interface_namespace()
//!     .with_default_prefix()
//!     .with_suffix("Service")
//!     .with_strict_naming()?;
//!
//! let mut services = ServiceCollection::new();
//! services.inject_by_convention(&settings, &types)?;
//! assert!(services.contains("App.Orders.IOrderService"));
//! # Ok(())
//! # }
//! ```

pub use conwire_convention as convention;
pub use conwire_domain as domain;
#[cfg(feature = "kernel")]
pub use conwire_kernel as kernel;
pub use conwire_registry as registry;
pub use conwire_scanner as scanner;

/// The types needed to configure and run a scan.
pub mod prelude {
    pub use conwire_convention::{ConventionError, ConventionSettings};
    pub use conwire_domain::{Binding, Lifetime, TypeCatalog, TypeDescriptor};
    pub use conwire_registry::{Registry, ServiceCollection};
    pub use conwire_scanner::{
        InjectionManager, RegistryExt, ResolutionFailure, ScanError, ScanReport, Scanner,
        TypeSource,
    };
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "kernel")]
        "kernel",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "kernel")]
pub use wiring::{WiringError, WiringErrorExt, wire_from_files};

#[cfg(feature = "kernel")]
mod wiring {
    use conwire_kernel::{ConfigError, load_catalog_dir, load_conventions};
    use conwire_registry::Registry;
    use conwire_scanner::{RegistryExt, ScanError, ScanReport};
    use std::borrow::Cow;
    use std::path::Path;
    use tracing::info;

    /// Failure of [`wire_from_files`].
    #[conwire_derive::conwire_error]
    pub enum WiringError {
        #[error("Loading failed{}: {source}", format_context(.context))]
        Config { source: ConfigError, context: Option<Cow<'static, str>> },

        #[error("Scan failed{}: {source}", format_context(.context))]
        Scan { source: ScanError, context: Option<Cow<'static, str>> },
    }

    /// Loads the convention profiles in `config_path` and the type catalogs beneath
    /// `catalog_dir`, then applies every profile to `registry` in file order.
    ///
    /// # Errors
    /// * [`WiringError::Config`] if either input cannot be loaded.
    /// * [`WiringError::Scan`] on the first profile whose scan fails.
    pub fn wire_from_files<R>(
        registry: &mut R,
        config_path: impl AsRef<Path>,
        catalog_dir: impl AsRef<Path>,
    ) -> Result<Vec<ScanReport>, WiringError>
    where
        R: Registry + ?Sized,
    {
        let conventions = load_conventions(config_path)?;
        let catalog = load_catalog_dir(catalog_dir)?;

        let reports = registry.inject_by_conventions(&conventions, &catalog)?;

        info!(
            profiles = reports.len(),
            registered = reports.iter().map(ScanReport::registered).sum::<usize>(),
            "Wiring complete"
        );
        Ok(reports)
    }
}
