//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it is the only place that touches the filesystem, turning
//! config files into validated conventions and JSON files into type catalogs.
//!
//! ## Convention profiles
//! ```rust,no_run
//! use conwire_kernel::load_conventions;
//!
//! let conventions = load_conventions("conwire.toml")?;
//! # Ok::<(), conwire_kernel::ConfigError>(())
//! ```
//!
//! ## Type catalogs
//! ```rust,no_run
//! use conwire_kernel::load_catalog_dir;
//!
//! let catalog = load_catalog_dir("target/catalogs")?;
//! println!("{} types", catalog.len());
//! # Ok::<(), conwire_kernel::ConfigError>(())
//! ```
pub mod catalog;
pub mod config;
mod error;

pub use crate::catalog::{load_catalog, load_catalog_dir};
pub use crate::config::{
    ConventionProfile, ConventionProfiles, load_config, load_config_with_env, load_conventions,
    load_conventions_with_env,
};
pub use crate::error::{ConfigError, ConfigErrorExt};

pub use conwire_domain as domain;
