use std::borrow::Cow;

/// Errors raised while building, validating or parsing a convention.
///
/// All of these are fail-fast: a scan never starts with a convention that produced one.
#[conwire_derive::conwire_error]
pub enum ConventionError {
    /// Namespace derivation received no usable type.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Settings failed validation. Every unmet invariant is listed.
    #[error("Invalid configuration{}: {}", format_context(.context), .messages.join("; "))]
    InvalidConfiguration { messages: Vec<Cow<'static, str>>, context: Option<Cow<'static, str>> },

    /// A lifetime name outside `scoped`, `singleton` and `transient`.
    #[error("Unknown lifetime{}: {value}", format_context(.context))]
    UnknownLifetime { value: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
