use crate::error::{ConventionError, ConventionErrorExt};
use crate::namespace::derive_namespaces;
use crate::settings::{ANY_SUFFIX, ConventionSettings, DEFAULT_INTERFACE_PREFIX};
use conwire_domain::{Lifetime, TypeDescriptor};
use private::Sealed;
use std::marker::PhantomData;

#[derive(Debug, Default)]
pub struct ModeStage;
#[derive(Debug)]
pub struct RootStage;
#[derive(Debug)]
pub struct LimitsStage;
#[derive(Debug)]
pub struct PrefixStage;
#[derive(Debug)]
pub struct SuffixStage;
#[derive(Debug)]
pub struct NamingStage;

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for ModeStage {}
impl Sealed for RootStage {}
impl Sealed for LimitsStage {}
impl Sealed for PrefixStage {}
impl Sealed for SuffixStage {}
impl Sealed for NamingStage {}

/// A staged builder for [`ConventionSettings`].
///
/// Each decision consumes the builder and returns the next stage, so the order
/// mode → root namespaces → implementation limits → prefix → suffixes → naming is enforced at
/// compile time. The final stage validates and yields the settings.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct ConventionBuilder<S: Sealed = ModeStage> {
    settings: ConventionSettings,
    _stage: PhantomData<S>,
}

#[allow(private_bounds)]
impl<S: Sealed> ConventionBuilder<S> {
    /// When set, a single unresolved interface aborts the whole scan before anything is registered.
    #[must_use = "The builder must be walked through every stage"]
    pub const fn force_implementation_for_all_definitions(mut self, enabled: bool) -> Self {
        self.settings.force_implementation_for_all_definitions = enabled;
        self
    }

    fn transition<N: Sealed>(self) -> ConventionBuilder<N> {
        ConventionBuilder { settings: self.settings, _stage: PhantomData }
    }
}

impl Default for ConventionBuilder<ModeStage> {
    fn default() -> Self {
        Self { settings: ConventionSettings::default(), _stage: PhantomData }
    }
}

impl ConventionBuilder<ModeStage> {
    #[must_use = "The builder must be walked through every stage"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "The builder must be walked through every stage"]
    pub fn with_mode(mut self, lifetime: Lifetime) -> ConventionBuilder<RootStage> {
        self.settings.set_lifetime(lifetime);
        self.transition()
    }
}

impl ConventionBuilder<RootStage> {
    #[must_use = "The builder must be walked through every stage"]
    pub fn with_root_namespace(self, name: impl AsRef<str>) -> ConventionBuilder<LimitsStage> {
        self.with_root_namespaces([name])
    }

    #[must_use = "The builder must be walked through every stage"]
    pub fn with_root_namespaces<I, T>(mut self, names: I) -> ConventionBuilder<LimitsStage>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.settings.set_root_namespaces(names);
        self.transition()
    }

    /// Uses the root segment of the example type's namespace.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if the type has no qualified name.
    pub fn with_root_namespace_of(
        self,
        example: &TypeDescriptor,
    ) -> Result<ConventionBuilder<LimitsStage>, ConventionError> {
        self.with_root_namespaces_of([example])
    }

    /// Uses the distinct root segments of the example types' namespaces.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if no example has a qualified name.
    pub fn with_root_namespaces_of<'a, I>(
        self,
        examples: I,
    ) -> Result<ConventionBuilder<LimitsStage>, ConventionError>
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        let roots = derive_namespaces(examples, true).context("Deriving root namespaces")?;
        Ok(self.with_root_namespaces(roots))
    }

    /// Uses the full namespace of the example type as a narrower scan root.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if the type has no qualified name.
    pub fn in_namespace_of(
        self,
        example: &TypeDescriptor,
    ) -> Result<ConventionBuilder<LimitsStage>, ConventionError> {
        self.in_namespaces_of([example])
    }

    /// Uses the minimal covering set of the example types' full namespaces.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if no example has a qualified name.
    pub fn in_namespaces_of<'a, I>(
        self,
        examples: I,
    ) -> Result<ConventionBuilder<LimitsStage>, ConventionError>
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        let roots = derive_namespaces(examples, false).context("Deriving scan namespaces")?;
        Ok(self.with_root_namespaces(roots))
    }
}

impl ConventionBuilder<LimitsStage> {
    /// Only implementations living under a root namespace are considered.
    #[must_use = "The builder must be walked through every stage"]
    pub fn limit_to_interface_namespace(mut self) -> ConventionBuilder<PrefixStage> {
        self.settings.set_restrict_implementations_to_interface_namespace(true);
        self.transition()
    }

    /// Implementations may live anywhere. Clears any explicit allow-list.
    #[must_use = "The builder must be walked through every stage"]
    pub fn allow_any_namespace(mut self) -> ConventionBuilder<PrefixStage> {
        self.settings.set_restrict_implementations_to_interface_namespace(false);
        self.settings.set_allowed_implementation_namespaces(Vec::<String>::new());
        self.transition()
    }

    #[must_use = "The builder must be walked through every stage"]
    pub fn allow_in_namespace(self, name: impl AsRef<str>) -> ConventionBuilder<PrefixStage> {
        self.allow_in_namespaces([name])
    }

    /// Implementations must live in (or under) one of these namespaces.
    ///
    /// Entries may be fully qualified (`App.Utilities.Dates`) or a trailing part of the
    /// namespace (`Utilities.Dates`, `Dates`).
    #[must_use = "The builder must be walked through every stage"]
    pub fn allow_in_namespaces<I, T>(mut self, names: I) -> ConventionBuilder<PrefixStage>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.settings.set_restrict_implementations_to_interface_namespace(false);
        self.settings.set_allowed_implementation_namespaces(names);
        self.transition()
    }

    /// Allows the full namespace of the example type.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if the type has no qualified name.
    pub fn allow_in_namespace_of(
        self,
        example: &TypeDescriptor,
    ) -> Result<ConventionBuilder<PrefixStage>, ConventionError> {
        self.allow_in_namespaces_of([example])
    }

    /// Allows the minimal covering set of the example types' full namespaces.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if no example has a qualified name.
    pub fn allow_in_namespaces_of<'a, I>(
        self,
        examples: I,
    ) -> Result<ConventionBuilder<PrefixStage>, ConventionError>
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        let allowed =
            derive_namespaces(examples, false).context("Deriving implementation namespaces")?;
        Ok(self.allow_in_namespaces(allowed))
    }

    /// Allows everything under the root segments of the example types' namespaces.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidArgument`] if no example has a qualified name.
    pub fn allow_in_root_namespaces_of<'a, I>(
        self,
        examples: I,
    ) -> Result<ConventionBuilder<PrefixStage>, ConventionError>
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        let allowed =
            derive_namespaces(examples, true).context("Deriving implementation root namespaces")?;
        Ok(self.allow_in_namespaces(allowed))
    }
}

impl ConventionBuilder<PrefixStage> {
    #[must_use = "The builder must be walked through every stage"]
    pub fn with_interface_prefix(mut self, prefix: impl Into<String>) -> ConventionBuilder<SuffixStage> {
        self.settings.set_interface_prefix(prefix);
        self.transition()
    }

    #[must_use = "The builder must be walked through every stage"]
    pub fn with_default_prefix(self) -> ConventionBuilder<SuffixStage> {
        self.with_interface_prefix(DEFAULT_INTERFACE_PREFIX)
    }
}

impl ConventionBuilder<SuffixStage> {
    #[must_use = "The builder must be walked through every stage"]
    pub fn with_suffix(self, suffix: impl AsRef<str>) -> ConventionBuilder<NamingStage> {
        self.with_suffixes([suffix])
    }

    #[must_use = "The builder must be walked through every stage"]
    pub fn with_suffixes<I, T>(mut self, suffixes: I) -> ConventionBuilder<NamingStage>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.settings.set_interface_suffixes(suffixes);
        self.transition()
    }

    /// Matches every prefixed interface regardless of how its name ends.
    #[must_use = "The builder must be walked through every stage"]
    pub fn without_suffixes(mut self) -> ConventionBuilder<NamingStage> {
        self.settings.set_interface_suffixes([ANY_SUFFIX]);
        self.transition()
    }
}

impl ConventionBuilder<NamingStage> {
    /// Implementations must be named like the interface without its prefix.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidConfiguration`] if the collected settings are invalid.
    pub fn with_strict_naming(self) -> Result<ConventionSettings, ConventionError> {
        self.finish(true)
    }

    /// Any implementing type may be bound, whatever its name.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidConfiguration`] if the collected settings are invalid.
    pub fn without_strict_naming(self) -> Result<ConventionSettings, ConventionError> {
        self.finish(false)
    }

    fn finish(mut self, strict: bool) -> Result<ConventionSettings, ConventionError> {
        self.settings.set_enforce_strict_naming(strict);
        self.settings.validate()?;
        Ok(self.settings)
    }
}
