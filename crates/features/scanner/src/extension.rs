use crate::error::{ScanError, ScanErrorExt};
use crate::scanner::{ScanReport, Scanner};
use crate::source::TypeSource;
use conwire_convention::ConventionSettings;
use conwire_registry::Registry;
use tracing::{debug, instrument};

/// A caller-supplied component that wires a registry on its own terms.
///
/// Useful when conventions alone cannot express the wiring, e.g. a module that runs its own scans
/// and adds a few explicit bindings.
pub trait InjectionManager {
    /// # Errors
    /// Any [`ScanError`] the manager's own scans produce.
    fn inject_services(&self, registry: &mut dyn Registry) -> Result<(), ScanError>;
}

/// Convention scanning as methods on any [`Registry`].
pub trait RegistryExt: Registry {
    /// Runs one convention over `source` and registers what it resolves.
    ///
    /// # Errors
    /// See [`Scanner::scan`].
    fn inject_by_convention<S>(
        &mut self,
        settings: &ConventionSettings,
        source: &S,
    ) -> Result<ScanReport, ScanError>
    where
        S: TypeSource + ?Sized,
    {
        Scanner::new(settings).scan(source, self)
    }

    /// Runs several conventions in order over the same source.
    ///
    /// Every convention is validated before the first scan, so an invalid one leaves the registry
    /// untouched. A forced scan that fails later stops the run; conventions processed before it
    /// keep their registrations.
    ///
    /// # Errors
    /// The first [`ScanError`] encountered, with the failing convention's position as context.
    #[instrument(skip_all)]
    fn inject_by_conventions<'a, I, S>(
        &mut self,
        settings: I,
        source: &S,
    ) -> Result<Vec<ScanReport>, ScanError>
    where
        I: IntoIterator<Item = &'a ConventionSettings>,
        S: TypeSource + ?Sized,
    {
        let settings: Vec<&ConventionSettings> = settings.into_iter().collect();
        for (position, convention) in settings.iter().enumerate() {
            convention.validate().context(format!("convention #{position}"))?;
        }

        let mut reports = Vec::with_capacity(settings.len());
        for (position, convention) in settings.into_iter().enumerate() {
            debug!(position, "Applying convention");
            let report = Scanner::new(convention)
                .scan(source, self)
                .context(format!("convention #{position}"))?;
            reports.push(report);
        }
        Ok(reports)
    }

    /// Lets `manager` wire this registry.
    ///
    /// # Errors
    /// Whatever the manager returns.
    fn inject_from_manager(&mut self, manager: &dyn InjectionManager) -> Result<(), ScanError> {
        let mut registry = self;
        manager.inject_services(&mut registry)
    }
}

impl<R: Registry + ?Sized> RegistryExt for R {}
