use conwire_domain::{Binding, Lifetime};

#[must_use]
pub fn binding(interface: &str, implementation: &str, lifetime: Lifetime) -> Binding {
    Binding::new(interface, implementation, lifetime)
}

/// A registry recording which primitive was called, in call order.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    pub calls: Vec<(&'static str, Binding)>,
}

impl conwire_registry::Registry for RecordingRegistry {
    fn try_add_scoped(&mut self, binding: &Binding) -> bool {
        self.calls.push(("try_add_scoped", binding.clone()));
        true
    }

    fn add_singleton(&mut self, binding: &Binding) {
        self.calls.push(("add_singleton", binding.clone()));
    }

    fn add_transient(&mut self, binding: &Binding) {
        self.calls.push(("add_transient", binding.clone()));
    }
}
