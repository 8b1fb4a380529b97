use crate::builder::{ConventionBuilder, ModeStage};
use crate::error::ConventionError;
use conwire_domain::Lifetime;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::debug;

/// Interface prefix used when none is configured.
pub const DEFAULT_INTERFACE_PREFIX: &str = "I";

/// Suffix entry that every interface name satisfies.
///
/// Stored by [`crate::SuffixStage::without_suffixes`] so that "any suffix" still passes validation.
pub const ANY_SUFFIX: &str = "*";

/// The resolved convention for one scan pass.
///
/// Build it with [`ConventionSettings::builder`] or deserialize it from configuration and call
/// [`ConventionSettings::normalize`] plus [`ConventionSettings::validate`]. A scan borrows the
/// settings immutably for its whole duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConventionSettings {
    pub interface_prefix: String,
    /// Name endings that select interfaces. The entry [`ANY_SUFFIX`] (`"*"`) is the wildcard,
    /// also when it comes from configuration; no interface name can end in a literal `*`.
    pub interface_suffixes: Vec<String>,
    pub root_namespaces: Vec<String>,
    pub enforce_strict_naming: bool,
    pub restrict_implementations_to_interface_namespace: bool,
    pub allowed_implementation_namespaces: Vec<String>,
    #[serde(alias = "mode")]
    pub lifetime: Lifetime,
    pub force_implementation_for_all_definitions: bool,
}

impl Default for ConventionSettings {
    fn default() -> Self {
        Self {
            interface_prefix: DEFAULT_INTERFACE_PREFIX.to_owned(),
            interface_suffixes: Vec::new(),
            root_namespaces: Vec::new(),
            enforce_strict_naming: true,
            restrict_implementations_to_interface_namespace: false,
            allowed_implementation_namespaces: Vec::new(),
            lifetime: Lifetime::Scoped,
            force_implementation_for_all_definitions: false,
        }
    }
}

impl ConventionSettings {
    /// Starts the staged builder at the lifetime decision.
    ///
    /// ```rust
    /// use conwire_convention::ConventionSettings;
    /// use conwire_domain::Lifetime;
    ///
    /// let settings = ConventionSettings::builder()
    ///     .with_mode(Lifetime::Singleton)
    ///     .with_root_namespace("App")
    ///     .allow_any_namespace()
    ///     .with_default_prefix()
    ///     .with_suffixes(["Service", "Repository"])
    ///     .with_strict_naming()?;
    ///
    /// assert_eq!(settings.root_namespaces, ["App"]);
    /// # Ok::<(), conwire_convention::ConventionError>(())
    /// ```
    #[must_use = "The builder must be walked through every stage"]
    pub fn builder() -> ConventionBuilder<ModeStage> {
        ConventionBuilder::new()
    }

    /// One root namespace with the default prefix, strict naming and unrestricted implementations.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidConfiguration`] if `root` is blank or `suffixes` holds
    /// no usable entry.
    pub fn for_root<I, S>(
        lifetime: Lifetime,
        root: impl AsRef<str>,
        suffixes: I,
    ) -> Result<Self, ConventionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self { lifetime, ..Self::default() };
        settings.set_root_namespaces([root]);
        settings.set_interface_suffixes(suffixes);
        settings.validate()?;
        Ok(settings)
    }

    pub fn set_lifetime(&mut self, lifetime: Lifetime) {
        self.lifetime = lifetime;
    }

    pub fn set_root_namespaces<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root_namespaces = clean_list(names);
    }

    pub fn set_interface_prefix(&mut self, prefix: impl Into<String>) {
        self.interface_prefix = prefix.into();
    }

    pub fn set_interface_suffixes<I, S>(&mut self, suffixes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interface_suffixes = clean_list(suffixes);
    }

    pub fn set_allowed_implementation_namespaces<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_implementation_namespaces = clean_list(names);
    }

    pub fn set_enforce_strict_naming(&mut self, enabled: bool) {
        self.enforce_strict_naming = enabled;
    }

    pub fn set_restrict_implementations_to_interface_namespace(&mut self, enabled: bool) {
        self.restrict_implementations_to_interface_namespace = enabled;
    }

    pub fn set_force_implementation_for_all_definitions(&mut self, enabled: bool) {
        self.force_implementation_for_all_definitions = enabled;
    }

    /// Re-applies list normalization, e.g. after deserializing raw configuration.
    pub fn normalize(&mut self) {
        self.root_namespaces = clean_list(&self.root_namespaces);
        self.interface_suffixes = clean_list(&self.interface_suffixes);
        self.allowed_implementation_namespaces = clean_list(&self.allowed_implementation_namespaces);
    }

    /// Checks the settings for minimum viable usability.
    ///
    /// # Errors
    /// Returns [`ConventionError::InvalidConfiguration`] listing every unmet invariant: at least
    /// one interface suffix and at least one root namespace are required.
    pub fn validate(&self) -> Result<(), ConventionError> {
        let mut messages: Vec<Cow<'static, str>> = Vec::new();

        if self.interface_suffixes.is_empty() {
            messages.push("interface_suffixes must contain at least one element".into());
        }

        if self.root_namespaces.is_empty() {
            messages.push("root_namespaces must contain at least one element".into());
        }

        if messages.is_empty() {
            return Ok(());
        }

        debug!(failures = messages.len(), "Convention settings failed validation");
        Err(ConventionError::InvalidConfiguration { messages, context: None })
    }

    /// The implementation name strict naming requires for an interface name.
    ///
    /// `None` when the name does not start with the interface prefix: such an interface has no
    /// strict-naming match.
    #[must_use]
    pub fn implementation_name_for<'n>(&self, interface_name: &'n str) -> Option<&'n str> {
        interface_name.strip_prefix(self.interface_prefix.as_str())
    }
}

/// `true` if `name` satisfies a single suffix entry.
#[must_use]
pub fn suffix_matches(name: &str, suffix: &str) -> bool {
    suffix == ANY_SUFFIX || name.ends_with(suffix)
}

/// Parses a lifetime name (`scoped`, `singleton`, `transient`, case-insensitive).
///
/// # Errors
/// Returns [`ConventionError::UnknownLifetime`] for any other value; it is never defaulted.
pub fn parse_lifetime(value: &str) -> Result<Lifetime, ConventionError> {
    Lifetime::from_str(value.trim()).map_err(|_| ConventionError::UnknownLifetime {
        value: value.to_owned().into(),
        context: Some("expected one of: scoped, singleton, transient".into()),
    })
}

/// Trims entries, drops blank ones and removes duplicates while keeping the first occurrence.
fn clean_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    values
        .into_iter()
        .filter_map(|value| {
            let trimmed = value.as_ref().trim();
            (!trimmed.is_empty() && seen.insert(trimmed.to_owned())).then(|| trimmed.to_owned())
        })
        .collect()
}
