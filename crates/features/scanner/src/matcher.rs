use crate::error::ResolutionFailure;
use conwire_convention::{ConventionSettings, contains_segments};
use conwire_domain::TypeDescriptor;

/// Picks the single implementation of `interface` among `candidates`.
///
/// A candidate qualifies when it lists the interface among its implemented interfaces, carries
/// the interface name minus the prefix under strict naming, and lives in an allowed
/// implementation namespace when an allow-list is configured.
///
/// # Errors
/// Returns a [`ResolutionFailure`] carrying the match count when zero or several candidates
/// qualify.
pub fn resolve_implementation<'a>(
    interface: &TypeDescriptor,
    candidates: &[&'a TypeDescriptor],
    settings: &ConventionSettings,
) -> Result<&'a TypeDescriptor, ResolutionFailure> {
    let matches: Vec<&'a TypeDescriptor> = candidates
        .iter()
        .copied()
        .filter(|c| c.implements_interface(&interface.qualified_name))
        .filter(|c| !settings.enforce_strict_naming || strict_name_matches(interface, c, settings))
        .filter(|c| in_allowed_namespace(c, settings))
        .collect();

    match matches.as_slice() {
        &[single] => Ok(single),
        _ => Err(ResolutionFailure {
            interface: interface.qualified_name.clone(),
            matches: matches.len(),
            candidates: matches.iter().map(|m| m.qualified_name.clone()).collect(),
        }),
    }
}

/// `prefix + implementation name == interface name`.
fn strict_name_matches(
    interface: &TypeDescriptor,
    candidate: &TypeDescriptor,
    settings: &ConventionSettings,
) -> bool {
    settings.implementation_name_for(&interface.name) == Some(candidate.name.as_str())
}

fn in_allowed_namespace(candidate: &TypeDescriptor, settings: &ConventionSettings) -> bool {
    let allowed = &settings.allowed_implementation_namespaces;
    if allowed.is_empty() {
        return true;
    }
    candidate
        .namespace
        .as_deref()
        .is_some_and(|ns| allowed.iter().any(|pattern| contains_segments(ns, pattern)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conwire_domain::Lifetime;

    fn settings() -> ConventionSettings {
        ConventionSettings::for_root(Lifetime::Scoped, "App", ["Service"]).unwrap()
    }

    #[test]
    fn test_strict_naming_requires_exact_name() {
        let interface = TypeDescriptor::interface("App.IWidgetService");
        let exact = TypeDescriptor::class("App.WidgetService").implements("App.IWidgetService");
        let other = TypeDescriptor::class("App.TheWidgetService").implements("App.IWidgetService");

        let resolved = resolve_implementation(&interface, &[&other, &exact], &settings()).unwrap();
        assert_eq!(resolved.name, "WidgetService");
    }

    #[test]
    fn test_strict_naming_honors_custom_prefix() {
        let interface = TypeDescriptor::interface("Shop.AbstractOrderStore");
        let exact = TypeDescriptor::class("Shop.OrderStore").implements("Shop.AbstractOrderStore");
        let unstripped =
            TypeDescriptor::class("Shop.AbstractOrderStore").implements("Shop.AbstractOrderStore");

        let mut settings = ConventionSettings::for_root(Lifetime::Scoped, "Shop", ["Store"]).unwrap();
        settings.set_interface_prefix("Abstract");

        let resolved = resolve_implementation(&interface, &[&unstripped, &exact], &settings).unwrap();
        assert_eq!(resolved.qualified_name, "Shop.OrderStore");
    }

    #[test]
    fn test_candidate_must_implement_interface() {
        let interface = TypeDescriptor::interface("App.IWidgetService");
        let unrelated = TypeDescriptor::class("App.WidgetService").implements("App.IOtherService");

        let failure = resolve_implementation(&interface, &[&unrelated], &settings()).unwrap_err();
        assert_eq!(failure.matches, 0);
        assert!(failure.candidates.is_empty());
    }

    #[test]
    fn test_allowed_namespace_accepts_partial_entries() {
        let interface = TypeDescriptor::interface("App.IClockService");
        let inside =
            TypeDescriptor::class("Lib.Utilities.Dates.ClockService").implements("App.IClockService");

        let mut settings = settings();
        for allowed in ["Lib.Utilities.Dates", "Utilities.Dates", "Dates", "Lib"] {
            settings.set_allowed_implementation_namespaces([allowed]);
            assert!(resolve_implementation(&interface, &[&inside], &settings).is_ok(), "{allowed}");
        }

        settings.set_allowed_implementation_namespaces(["ities.Dates"]);
        assert!(resolve_implementation(&interface, &[&inside], &settings).is_err());
    }
}
