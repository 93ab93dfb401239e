//! Signature identity used for overload deduplication and override matching.

use std::fmt;

use crate::member::Method;

/// Method name plus the erased parameter types.
///
/// Return type and generic parameters do not take part. Parameter types are
/// compared after erasure to the target type system, so `f(int)` and
/// `f(long)` are the same overload there.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId {
    pub name: String,
    pub params: Vec<String>,
}

impl MethodId {
    pub fn new(method: &Method) -> Self {
        Self {
            name: method.name.clone(),
            params: method
                .params
                .iter()
                .map(|param| param.type_ref.erasure())
                .collect(),
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}
