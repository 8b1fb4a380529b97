use conwire_domain::{TypeCatalog, TypeDescriptor};
use std::borrow::Cow;

/// Supplies the type metadata a scan pass works on.
///
/// The scanner takes one snapshot per pass. Implementations that compute descriptors on the fly
/// return [`Cow::Owned`]; in-memory collections lend theirs.
pub trait TypeSource {
    fn types(&self) -> Cow<'_, [TypeDescriptor]>;
}

impl TypeSource for [TypeDescriptor] {
    fn types(&self) -> Cow<'_, [TypeDescriptor]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> TypeSource for [TypeDescriptor; N] {
    fn types(&self) -> Cow<'_, [TypeDescriptor]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl TypeSource for Vec<TypeDescriptor> {
    fn types(&self) -> Cow<'_, [TypeDescriptor]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl TypeSource for TypeCatalog {
    fn types(&self) -> Cow<'_, [TypeDescriptor]> {
        Cow::Borrowed(self.types.as_slice())
    }
}

impl<T: TypeSource + ?Sized> TypeSource for &T {
    fn types(&self) -> Cow<'_, [TypeDescriptor]> {
        (**self).types()
    }
}
