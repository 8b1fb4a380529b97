//! Partitioning of a type snapshot into candidate interfaces and candidate implementations.

use conwire_convention::{ConventionSettings, is_within, suffix_matches};
use conwire_domain::TypeDescriptor;
use fxhash::FxHashSet;

/// Interfaces the convention asks to bind.
///
/// A type qualifies when it is an interface, has a namespace within one of the root namespaces
/// and its name starts with the interface prefix. Qualifying interfaces are then grouped per
/// configured suffix, in suffix order, keeping input order inside each group. An interface
/// matching several suffixes is reported once, under the first.
#[must_use]
pub fn filter_interfaces<'a>(
    types: &'a [TypeDescriptor],
    settings: &ConventionSettings,
) -> Vec<&'a TypeDescriptor> {
    let eligible: Vec<&TypeDescriptor> = types
        .iter()
        .filter(|t| t.is_interface && t.has_identity())
        .filter(|t| t.name.starts_with(settings.interface_prefix.as_str()))
        .filter(|t| in_roots(t, settings))
        .collect();

    let mut seen = FxHashSet::default();
    let mut selected = Vec::with_capacity(eligible.len());
    for suffix in &settings.interface_suffixes {
        for &ty in &eligible {
            if suffix_matches(&ty.name, suffix) && seen.insert(ty.qualified_name.as_str()) {
                selected.push(ty);
            }
        }
    }
    selected
}

/// Concrete types that may implement a candidate interface.
///
/// With `restrict_implementations_to_interface_namespace` set, only types whose namespace lies
/// within a root namespace are kept.
#[must_use]
pub fn filter_implementation_candidates<'a>(
    types: &'a [TypeDescriptor],
    settings: &ConventionSettings,
) -> Vec<&'a TypeDescriptor> {
    types
        .iter()
        .filter(|t| !t.is_interface && t.has_identity())
        .filter(|t| !settings.restrict_implementations_to_interface_namespace || in_roots(t, settings))
        .collect()
}

fn in_roots(ty: &TypeDescriptor, settings: &ConventionSettings) -> bool {
    ty.namespace
        .as_deref()
        .is_some_and(|ns| settings.root_namespaces.iter().any(|root| is_within(ns, root)))
}
