use conwire_convention::ConventionError;
use std::borrow::Cow;

/// An interface for which no single implementation could be chosen.
///
/// `matches` is 0 when nothing qualified and greater than 1 when the convention was ambiguous.
/// `candidates` names every qualifying implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot bind {interface}: {matches} matching implementation(s){}", format_candidates(.candidates))]
pub struct ResolutionFailure {
    pub interface: String,
    pub matches: usize,
    pub candidates: Vec<String>,
}

/// Errors that abort a scan pass.
#[conwire_derive::conwire_error]
pub enum ScanError {
    /// The convention failed validation. Nothing was registered.
    #[error("Convention rejected{}: {source}", format_context(.context))]
    Convention { source: ConventionError, context: Option<Cow<'static, str>> },

    /// At least one interface was unresolved while every definition had to be implemented.
    /// Nothing was registered.
    #[error("Unresolved interfaces{}: {}", format_context(.context), format_failures(.failures))]
    Unresolved { failures: Vec<ResolutionFailure>, context: Option<Cow<'static, str>> },
}

fn format_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() { String::new() } else { format!(" [{}]", candidates.join(", ")) }
}

fn format_failures(failures: &[ResolutionFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
