use conwire_convention::ConventionError;
use std::borrow::Cow;

/// Errors raised while loading convention profiles or type catalogs.
#[conwire_derive::conwire_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed catalog{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid convention{}: {source}", format_context(.context))]
    Convention { source: ConventionError, context: Option<Cow<'static, str>> },
}
