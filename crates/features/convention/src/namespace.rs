//! Namespace derivation and dot-segment matching.

use crate::error::ConventionError;
use conwire_domain::{SEPARATOR, TypeDescriptor};
use fxhash::FxHashSet;
use tracing::trace;

/// Computes scan-root namespaces from example types.
///
/// * `root_only = true`: the first dot-segment of every namespace, deduplicated in first-seen order.
/// * `root_only = false`: the minimal covering set of full namespaces. Every input namespace is
///   either in the result or a descendant of an entry in it, and no entry is an ancestor of
///   another.
///
/// Types without a namespace take part in the identity check but contribute no namespace.
///
/// # Errors
///
/// Returns [`ConventionError::InvalidArgument`] if `types` is empty or none of them has a
/// qualified name.
///
/// # Examples
///
/// ```rust
/// use conwire_convention::derive_namespaces;
/// use conwire_domain::TypeDescriptor;
///
/// let types = [
///     TypeDescriptor::class("App.Data.Users.UserRepository"),
///     TypeDescriptor::class("App.Data.OrderRepository"),
///     TypeDescriptor::class("Tools.Clock"),
/// ];
///
/// assert_eq!(derive_namespaces(&types, true)?, ["App", "Tools"]);
/// assert_eq!(derive_namespaces(&types, false)?, ["Tools", "App.Data"]);
/// # Ok::<(), conwire_convention::ConventionError>(())
/// ```
pub fn derive_namespaces<'a, I>(types: I, root_only: bool) -> Result<Vec<String>, ConventionError>
where
    I: IntoIterator<Item = &'a TypeDescriptor>,
{
    let types: Vec<&TypeDescriptor> = types.into_iter().filter(|t| t.has_identity()).collect();
    if types.is_empty() {
        return Err(ConventionError::InvalidArgument {
            message: "At least one type must be provided".into(),
            context: Some("Namespace derivation".into()),
        });
    }

    let named = types
        .iter()
        .copied()
        .filter(|t| t.namespace.as_deref().is_some_and(|ns| !ns.trim().is_empty()));

    let derived = if root_only {
        distinct(named.filter_map(TypeDescriptor::root_namespace))
    } else {
        minimal_cover(named.filter_map(|t| t.namespace.as_deref()))
    };

    trace!(root_only, count = derived.len(), "Derived namespaces");
    Ok(derived)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    values.filter(|v| seen.insert(*v)).map(str::to_owned).collect()
}

fn minimal_cover<'a>(namespaces: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();
    let mut seen = FxHashSet::default();
    for ns in namespaces {
        if seen.insert(ns) {
            candidates.push(ns);
        }
    }
    candidates.sort_by_key(|ns| ns.len());

    let mut selected: Vec<&str> = Vec::new();
    let mut index: FxHashSet<&str> = FxHashSet::default();

    for ns in candidates {
        if index.contains(ns) {
            continue;
        }

        let mut end = 0;
        for segment in ns.split(SEPARATOR) {
            end += segment.len();
            let prefix = &ns[..end];

            if prefix == ns {
                selected.push(ns);
                index.insert(ns);
            }

            if index.contains(prefix) {
                break;
            }

            end += SEPARATOR.len_utf8();
        }
    }

    selected.into_iter().map(str::to_owned).collect()
}

/// `true` if `namespace` is `root` or a dot-descendant of it.
#[must_use]
pub fn is_within(namespace: &str, root: &str) -> bool {
    namespace
        .strip_prefix(root)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}

/// `true` if the dot-segments of `pattern` occur as a contiguous run inside `namespace`.
///
/// Accepts fully qualified entries (`App.Utilities.Dates`), trailing partial entries
/// (`Utilities.Dates`, `Dates`) and ancestors (`App.Utilities`).
#[must_use]
pub fn contains_segments(namespace: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let haystack = format!("{SEPARATOR}{namespace}{SEPARATOR}");
    haystack.contains(&format!("{SEPARATOR}{pattern}{SEPARATOR}"))
}
