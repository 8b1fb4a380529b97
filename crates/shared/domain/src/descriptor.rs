use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace separator used in qualified type names.
pub const SEPARATOR: char = '.';

/// Read-only metadata describing one loaded type (an interface or a class).
///
/// Descriptors are produced by whatever introspection the host has available and handed to the
/// scanner as plain values. Nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub qualified_name: String,
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub is_interface: bool,
}

impl TypeDescriptor {
    /// Describes an interface from its dot-qualified name.
    ///
    /// ```rust
    /// use conwire_domain::TypeDescriptor;
    ///
    /// let ty = TypeDescriptor::interface("App.Services.IWidgetService");
    /// assert_eq!(ty.name, "IWidgetService");
    /// assert_eq!(ty.namespace.as_deref(), Some("App.Services"));
    /// assert!(ty.is_interface);
    /// ```
    #[must_use]
    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::parse(qualified_name.into(), true)
    }

    /// Describes a concrete class from its dot-qualified name.
    #[must_use]
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::parse(qualified_name.into(), false)
    }

    /// Adds an implemented interface by qualified name.
    #[must_use = "Returns the descriptor with the interface appended"]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    fn parse(qualified_name: String, is_interface: bool) -> Self {
        let trimmed = qualified_name.trim();
        let (namespace, name) = match trimmed.rsplit_once(SEPARATOR) {
            Some((ns, name)) if !ns.is_empty() => (Some(ns.to_owned()), name.to_owned()),
            Some((_, name)) => (None, name.to_owned()),
            None => (None, trimmed.to_owned()),
        };

        Self {
            qualified_name: trimmed.to_owned(),
            name,
            namespace,
            interfaces: Vec::new(),
            is_interface,
        }
    }

    /// A descriptor without a qualified name cannot take part in matching.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.qualified_name.trim().is_empty()
    }

    /// First dot-segment of the namespace, if any.
    #[must_use]
    pub fn root_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().and_then(|ns| ns.split(SEPARATOR).next())
    }

    #[must_use]
    pub fn implements_interface(&self, qualified_name: &str) -> bool {
        self.interfaces.iter().any(|i| i == qualified_name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name)
    }
}

/// A serializable snapshot of type metadata, e.g. shipped as `{"types": [...]}` JSON.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeCatalog {
    pub types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    pub fn extend(&mut self, other: Self) {
        self.types.extend(other.types);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Self { types: iter.into_iter().collect() }
    }
}
