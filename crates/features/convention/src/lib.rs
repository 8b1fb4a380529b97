//! # Conventions
//!
//! Naming and namespace rules used to infer interface-to-implementation bindings without
//! configuring each pair explicitly.
//!
//! * **[`ConventionSettings`]**: the resolved, validated convention for one scan pass.
//! * **[`ConventionBuilder`]**: a typestate builder walking through mode, root namespaces,
//!   implementation limits, prefix, suffixes and naming strictness, in that order.
//! * **[`derive_namespaces`]**: turns example types into scan-root or allow-list namespaces.
//!
//! # Example
//!
//! ```rust
//! use conwire_convention::{ConventionError, ConventionSettings};
//! use conwire_domain::{Lifetime, TypeDescriptor};
//!
//! fn main() -> Result<(), ConventionError> {
//!     let anchor = TypeDescriptor::interface("Shop.Orders.IOrderService");
//!
//!     let settings = ConventionSettings::builder()
//!         .force_implementation_for_all_definitions(true)
//!         .with_mode(Lifetime::Transient)
//!         .with_root_namespace_of(&anchor)?
//!         .limit_to_interface_namespace()
//!         .with_interface_prefix("I")
//!         .with_suffixes(["Service", "Repository"])
//!         .with_strict_naming()?;
//!
//!     assert_eq!(settings.root_namespaces, ["Shop"]);
//!     assert!(settings.restrict_implementations_to_interface_namespace);
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod namespace;
mod settings;

pub use builder::{
    ConventionBuilder, LimitsStage, ModeStage, NamingStage, PrefixStage, RootStage, SuffixStage,
};
pub use error::{ConventionError, ConventionErrorExt};
pub use namespace::{contains_segments, derive_namespaces, is_within};
pub use settings::{
    ANY_SUFFIX, ConventionSettings, DEFAULT_INTERFACE_PREFIX, parse_lifetime, suffix_matches,
};
