//! Name → type bindings stored in bucket chains.

use std::fmt;

/// A single name → type binding.
///
/// The type descriptor is an opaque, already-formatted string; the table
/// never parses or validates it. A binding is immutable once inserted and
/// only ever leaves its chain through removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    name: String,
    ty: String,
}

impl Binding {
    pub(crate) fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
        }
    }

    /// The bound identifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque type descriptor.
    pub fn ty(&self) -> &str {
        &self.ty
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} : {}>", self.name, self.ty)
    }
}
