#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the conwire crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! conwire-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for the workspace error enums.
///
/// Every variant must use named fields. A variant may carry a `context:
/// Option<Cow<'static, str>>` field; a variant with a source (a field named `source`, or marked
/// `#[source]` / `#[from]`) must carry one.
///
/// # Generated items
///
/// * **Derives**: `Debug` and `thiserror::Error` when missing.
/// * **`{Name}Ext<T>`**: a `context(..)` method on `Result<T, Name>` that sets the context of
///   the error, and on `Result<T, Source>` for every source type, wrapping it into its variant.
/// * **`From<Source>`** for every source variant, with an empty context.
/// * **`format_context`**: renders the context as ` (..)` for `#[error(..)]` strings.
///
/// # Examples
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[conwire_derive::conwire_error]
/// pub enum LoadError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Empty input{}", format_context(.context))]
///     Empty { context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context(format!("reading {path}"))
/// }
/// ```
#[proc_macro_attribute]
pub fn conwire_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
