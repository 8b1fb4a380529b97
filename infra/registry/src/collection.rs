use crate::Registry;
use conwire_domain::Binding;
use fxhash::FxHashMap;
use tracing::trace;

/// Ordered in-memory registry.
///
/// One entry per interface. Overwrites keep the slot of the first registration so iteration
/// order only reflects when an interface was first seen.
#[derive(Debug, Clone, Default)]
pub struct ServiceCollection {
    entries: Vec<Binding>,
    index: FxHashMap<String, usize>,
}

impl ServiceCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The binding registered for an interface qualified name.
    #[must_use]
    pub fn get(&self, interface: &str) -> Option<&Binding> {
        self.index.get(interface).map(|&slot| &self.entries[slot])
    }

    #[must_use]
    pub fn contains(&self, interface: &str) -> bool {
        self.index.contains_key(interface)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings in first-registration order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    #[must_use]
    pub fn into_bindings(self) -> Vec<Binding> {
        self.entries
    }

    fn upsert(&mut self, binding: &Binding) {
        if let Some(&slot) = self.index.get(&binding.interface) {
            trace!(interface = %binding.interface, "Replacing registration");
            self.entries[slot] = binding.clone();
            return;
        }

        self.index.insert(binding.interface.clone(), self.entries.len());
        self.entries.push(binding.clone());
    }
}

impl Registry for ServiceCollection {
    fn try_add_scoped(&mut self, binding: &Binding) -> bool {
        if self.contains(&binding.interface) {
            trace!(interface = %binding.interface, "Already registered, skipping");
            return false;
        }
        self.upsert(binding);
        true
    }

    fn add_singleton(&mut self, binding: &Binding) {
        self.upsert(binding);
    }

    fn add_transient(&mut self, binding: &Binding) {
        self.upsert(binding);
    }
}

/// Iterator over the bindings of a [`ServiceCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Binding;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a Binding;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
