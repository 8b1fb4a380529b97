use conwire_convention::ConventionSettings;
use conwire_domain::{Lifetime, TypeDescriptor};

/// `App` root, `Service` suffix, default prefix, strict naming, unrestricted implementations.
///
/// # Panics
/// * If the builder rejects the fixture settings.
#[must_use]
pub fn widget_settings(lifetime: Lifetime) -> ConventionSettings {
    ConventionSettings::builder()
        .with_mode(lifetime)
        .with_root_namespace("App")
        .allow_any_namespace()
        .with_default_prefix()
        .with_suffix("Service")
        .with_strict_naming()
        .expect("fixture settings are valid")
}

#[must_use]
pub fn widget_interface() -> TypeDescriptor {
    TypeDescriptor::interface("App.IWidgetService")
}

#[must_use]
pub fn widget_impl(qualified_name: &str) -> TypeDescriptor {
    TypeDescriptor::class(qualified_name).implements("App.IWidgetService")
}

/// A snapshot with `count` interface/implementation pairs spread over a few namespaces, plus
/// unrelated noise types.
#[must_use]
pub fn synthetic_snapshot(count: usize) -> Vec<TypeDescriptor> {
    let mut types = Vec::with_capacity(count * 3);
    for i in 0..count {
        let ns = format!("App.Module{}", i % 8);
        let interface = format!("{ns}.IThing{i}Service");
        types.push(TypeDescriptor::interface(interface.as_str()));
        types.push(TypeDescriptor::class(format!("{ns}.Thing{i}Service")).implements(interface));
        types.push(TypeDescriptor::class(format!("Vendor.Noise{i}")));
    }
    types
}
