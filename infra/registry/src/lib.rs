//! # Registry
//!
//! The sink that receives inferred bindings.
//!
//! * **[`Registry`]**: the three registration primitives a container must offer. Object safe, so
//!   hosts can hand in `&mut dyn Registry` wrapping their own container.
//! * **[`ServiceCollection`]**: an in-memory implementation keyed by interface that keeps
//!   first-registration order.
//!
//! # Example
//!
//! ```rust
//! use conwire_domain::{Binding, Lifetime};
//! use conwire_registry::{Registry, ServiceCollection};
//!
//! let mut services = ServiceCollection::new();
//! let binding = Binding::new("App.IClock", "App.Clock", Lifetime::Scoped);
//!
//! assert!(services.try_add_scoped(&binding));
//! assert!(!services.try_add_scoped(&binding));
//! assert_eq!(services.len(), 1);
//! ```

mod collection;

pub use collection::{Iter, ServiceCollection};

use conwire_domain::Binding;

/// Registration primitives of a service container.
pub trait Registry {
    /// Registers the binding unless its interface is already registered.
    ///
    /// Returns `true` if the binding was added.
    fn try_add_scoped(&mut self, binding: &Binding) -> bool;

    /// Registers the binding, replacing any earlier registration of the interface.
    fn add_singleton(&mut self, binding: &Binding);

    /// Registers the binding, replacing any earlier registration of the interface.
    fn add_transient(&mut self, binding: &Binding);
}

impl<R: Registry + ?Sized> Registry for &mut R {
    fn try_add_scoped(&mut self, binding: &Binding) -> bool {
        (**self).try_add_scoped(binding)
    }

    fn add_singleton(&mut self, binding: &Binding) {
        (**self).add_singleton(binding);
    }

    fn add_transient(&mut self, binding: &Binding) {
        (**self).add_transient(binding);
    }
}
