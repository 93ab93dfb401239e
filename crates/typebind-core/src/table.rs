//! Fully-qualified name → type definition lookup shared by all passes.

use indexmap::IndexMap;

use crate::type_def::TypeDefinition;
use crate::type_ref::TypeRef;
use crate::{Error, Result};

/// Read-only snapshot of every resolved type.
///
/// Top-level definitions keep their input order. Nested definitions are
/// indexed too, so hierarchy edges pointing at them resolve, and remember
/// which top-level definition encloses them.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    /// Top-level definitions in input order.
    roots: IndexMap<String, TypeDefinition>,
    /// Nested definitions, copied out of their enclosing members.
    nested: IndexMap<String, TypeDefinition>,
    /// Nested name → enclosing top-level name.
    owners: IndexMap<String, String>,
}

impl TypeTable {
    pub fn new(types: impl IntoIterator<Item = TypeDefinition>) -> Result<Self> {
        let mut table = Self::default();
        for def in types {
            let name = def.name();
            if table.contains(&name) {
                return Err(Error::DuplicateType(name));
            }
            table.index_nested(&name, &def)?;
            table.roots.insert(name, def);
        }
        Ok(table)
    }

    fn index_nested(&mut self, owner: &str, def: &TypeDefinition) -> Result<()> {
        for inner in def.nested() {
            let name = inner.name();
            if self.contains(&name) {
                return Err(Error::DuplicateType(name));
            }
            self.index_nested(owner, inner)?;
            self.owners.insert(name.clone(), owner.to_string());
            self.nested.insert(name, inner.clone());
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roots.contains_key(name) || self.nested.contains_key(name)
    }

    /// Looks up any definition, top-level or nested.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.roots.get(name).or_else(|| self.nested.get(name))
    }

    /// Resolves a reference by its base name. Type arguments and
    /// nullability are ignored.
    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&TypeDefinition> {
        self.get(&type_ref.name())
    }

    /// Top-level definitions in input order.
    pub fn roots(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.roots.values()
    }

    /// Name of the top-level definition containing `name`; itself if top-level.
    pub fn root_of<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.roots.contains_key(name) {
            return Some(name);
        }
        self.owners.get(name).map(String::as_str)
    }

    /// Number of top-level definitions.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
