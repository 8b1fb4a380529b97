use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File, Map};
use conwire_convention::{ConventionSettings, parse_lifetime};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `CONWIRE__FORCE_IMPLEMENTATION_FOR_ALL_DEFINITIONS`.
pub const ENV_PREFIX: &str = "CONWIRE";

/// Layered configuration loader.
///
/// 1. **Base file**: `path`, any format the `config` crate recognizes by extension (the
///    extension may be omitted).
/// 2. **Environment overrides**: variables prefixed with `CONWIRE__`. Nested keys are separated
///    with double underscores.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or does not match `T`.
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref(), None)
}

/// Same as [`load_config`], reading overrides from `vars` instead of the process environment.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or does not match `T`.
pub fn load_config_with_env<T, I, K, V>(path: impl AsRef<Path>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    load_layered(path.as_ref(), Some(vars))
}

fn load_layered<T>(path: &Path, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = Config::builder().add_source(File::from(path).required(true)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .source(vars),
    );

    info!("Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// File layout for convention profiles.
///
/// ```toml
/// force_implementation_for_all_definitions = true   # optional, applies to every profile
///
/// [[conventions]]
/// mode = "singleton"
/// root_namespaces = ["App"]
/// interface_suffixes = ["Service", "Repository"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConventionProfiles {
    pub force_implementation_for_all_definitions: Option<bool>,
    pub conventions: Vec<ConventionProfile>,
}

/// One `[[conventions]]` entry.
///
/// The lifetime stays raw text until [`ConventionProfiles::into_settings`] parses it, so an
/// unknown name surfaces as [`conwire_convention::ConventionError::UnknownLifetime`] with the
/// profile position instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct ConventionProfile {
    #[serde(alias = "mode")]
    pub lifetime: Option<String>,
    #[serde(flatten)]
    pub settings: ConventionSettings,
}

impl ConventionProfiles {
    /// Parses lifetimes, applies global overrides, normalizes every profile and validates it.
    ///
    /// # Errors
    /// Returns [`ConfigError::Convention`] naming the first profile with an unknown lifetime or
    /// failing validation.
    pub fn into_settings(self) -> Result<Vec<ConventionSettings>, ConfigError> {
        let mut settings = Vec::with_capacity(self.conventions.len());

        for (position, profile) in self.conventions.into_iter().enumerate() {
            let ConventionProfile { lifetime, settings: mut convention } = profile;
            if let Some(raw) = lifetime {
                let parsed = parse_lifetime(&raw).context(format!("profile #{position}"))?;
                convention.set_lifetime(parsed);
            }
            if let Some(force) = self.force_implementation_for_all_definitions {
                convention.set_force_implementation_for_all_definitions(force);
            }
            convention.normalize();
            convention.validate().context(format!("profile #{position}"))?;
            debug!(position, lifetime = %convention.lifetime, roots = ?convention.root_namespaces, "Convention profile ready");
            settings.push(convention);
        }

        Ok(settings)
    }
}

/// Loads and validates the `[[conventions]]` profiles of a config file.
///
/// # Errors
/// * [`ConfigError::Config`] if the file cannot be read or parsed.
/// * [`ConfigError::Convention`] if any profile fails validation.
pub fn load_conventions(path: impl AsRef<Path>) -> Result<Vec<ConventionSettings>, ConfigError> {
    finish_profiles(load_config(path)?)
}

/// Same as [`load_conventions`], reading overrides from `vars` instead of the process
/// environment.
///
/// # Errors
/// See [`load_conventions`].
pub fn load_conventions_with_env<I, K, V>(
    path: impl AsRef<Path>,
    vars: I,
) -> Result<Vec<ConventionSettings>, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    finish_profiles(load_config_with_env(path, vars)?)
}

fn finish_profiles(profiles: ConventionProfiles) -> Result<Vec<ConventionSettings>, ConfigError> {
    let settings = profiles.into_settings()?;
    info!(profiles = settings.len(), "Loaded convention profiles");
    Ok(settings)
}
