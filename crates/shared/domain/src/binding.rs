use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Registration lifetime for a resolved binding.
///
/// Each lifetime maps to a distinct registry operation:
/// * [`Lifetime::Scoped`] registers only if the interface has no mapping yet.
/// * [`Lifetime::Singleton`] and [`Lifetime::Transient`] overwrite any prior mapping.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Lifetime {
    /// One instance per logical unit of work.
    #[default]
    Scoped,
    /// One instance for the process.
    Singleton,
    /// A new instance per request.
    Transient,
}

/// Serde goes through the same case-insensitive parser as [`FromStr`].
impl TryFrom<String> for Lifetime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.trim()).map_err(|_| {
            format!("unknown lifetime `{value}`, expected one of: scoped, singleton, transient")
        })
    }
}

/// A resolved `(interface, implementation, lifetime)` triple handed to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    pub interface: String,
    pub implementation: String,
    pub lifetime: Lifetime,
}

impl Binding {
    #[must_use]
    pub fn new(
        interface: impl Into<String>,
        implementation: impl Into<String>,
        lifetime: Lifetime,
    ) -> Self {
        Self { interface: interface.into(), implementation: implementation.into(), lifetime }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.interface, self.implementation, self.lifetime)
    }
}
