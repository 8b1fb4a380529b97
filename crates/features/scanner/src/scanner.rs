use crate::error::{ResolutionFailure, ScanError};
use crate::filter::{filter_implementation_candidates, filter_interfaces};
use crate::matcher::resolve_implementation;
use crate::source::TypeSource;
use conwire_convention::ConventionSettings;
use conwire_domain::{Binding, Lifetime, TypeDescriptor};
use conwire_registry::Registry;
use tracing::{debug, info, instrument, trace, warn};

/// Outcome of a scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Resolved bindings in resolution order.
    pub bindings: Vec<Binding>,
    /// Interfaces without a single implementation.
    pub failures: Vec<ResolutionFailure>,
    /// Interfaces left untouched because a scoped registration already existed.
    pub skipped: Vec<String>,
}

impl ScanReport {
    /// `true` when every candidate interface was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of bindings actually written to the registry.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.bindings.len() - self.skipped.len()
    }
}

/// Runs one convention over a type snapshot.
///
/// A pass validates the settings, loads the snapshot, filters interfaces and implementation
/// candidates, resolves every interface and only then writes to the registry. The settings are
/// borrowed for the scanner's whole life.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'s> {
    settings: &'s ConventionSettings,
}

impl<'s> Scanner<'s> {
    #[must_use]
    pub const fn new(settings: &'s ConventionSettings) -> Self {
        Self { settings }
    }

    /// Resolves and registers every interface the convention selects.
    ///
    /// # Errors
    /// * [`ScanError::Convention`] if the settings fail validation.
    /// * [`ScanError::Unresolved`] if `force_implementation_for_all_definitions` is set and any
    ///   interface could not be resolved.
    ///
    /// In both cases the registry is left untouched.
    #[instrument(skip_all, fields(lifetime = %self.settings.lifetime))]
    pub fn scan<S, R>(&self, source: &S, registry: &mut R) -> Result<ScanReport, ScanError>
    where
        S: TypeSource + ?Sized,
        R: Registry + ?Sized,
    {
        let mut report = self.plan(source)?;

        if self.settings.force_implementation_for_all_definitions && !report.is_complete() {
            warn!(unresolved = report.failures.len(), "Aborting scan, every definition must be implemented");
            return Err(ScanError::Unresolved { failures: report.failures, context: None });
        }

        for binding in &report.bindings {
            if register(registry, binding) {
                debug!(%binding, "Registered");
            } else {
                trace!(interface = %binding.interface, "Kept existing registration");
                report.skipped.push(binding.interface.clone());
            }
        }

        info!(
            registered = report.registered(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Convention scan complete"
        );
        Ok(report)
    }

    /// Resolves every interface without touching a registry.
    ///
    /// # Errors
    /// Returns [`ScanError::Convention`] if the settings fail validation.
    pub fn plan<S>(&self, source: &S) -> Result<ScanReport, ScanError>
    where
        S: TypeSource + ?Sized,
    {
        self.settings.validate()?;

        let types = source.types();
        trace!(types = types.len(), "Loaded type snapshot");

        let (bindings, failures) = self.resolve(&types);
        Ok(ScanReport { bindings, failures, skipped: Vec::new() })
    }

    fn resolve(&self, types: &[TypeDescriptor]) -> (Vec<Binding>, Vec<ResolutionFailure>) {
        let interfaces = filter_interfaces(types, self.settings);
        let candidates = filter_implementation_candidates(types, self.settings);
        trace!(interfaces = interfaces.len(), candidates = candidates.len(), "Filtered types");

        let mut bindings = Vec::with_capacity(interfaces.len());
        let mut failures = Vec::new();

        for interface in interfaces {
            match resolve_implementation(interface, &candidates, self.settings) {
                Ok(implementation) => bindings.push(Binding::new(
                    interface.qualified_name.as_str(),
                    implementation.qualified_name.as_str(),
                    self.settings.lifetime,
                )),
                Err(failure) => {
                    warn!(
                        interface = %failure.interface,
                        matches = failure.matches,
                        candidates = ?failure.candidates,
                        "Injection error"
                    );
                    failures.push(failure);
                },
            }
        }

        (bindings, failures)
    }
}

/// Hands a binding to the registry primitive matching its lifetime.
///
/// Returns `false` when a scoped binding was skipped because its interface was already
/// registered.
pub fn register<R: Registry + ?Sized>(registry: &mut R, binding: &Binding) -> bool {
    match binding.lifetime {
        Lifetime::Scoped => registry.try_add_scoped(binding),
        Lifetime::Singleton => {
            registry.add_singleton(binding);
            true
        },
        Lifetime::Transient => {
            registry.add_transient(binding);
            true
        },
    }
}
