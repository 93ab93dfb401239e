//! Hierarchy transformer.
//!
//! Ancestors are read from the shared [`TypeTable`] snapshot; only the
//! definition handed to a pass is mutated. Ancestors missing from the table
//! are leaves: their edge stays, but nothing is pulled from them.

use std::collections::HashSet;

use tracing::{debug, trace};
use typebind_core::{Member, Method, MethodId, MethodKind, TypeDefinition, TypeTable};

use crate::whitelist::MethodWhitelist;

pub struct HierarchyTransformer<'a> {
    table: &'a TypeTable,
    whitelist: &'a MethodWhitelist,
}

impl<'a> HierarchyTransformer<'a> {
    pub fn new(table: &'a TypeTable, whitelist: &'a MethodWhitelist) -> Self {
        Self { table, whitelist }
    }

    /// Every resolvable ancestor of `def`, depth-first, supertypes before
    /// interfaces at each level. Each ancestor appears once even under
    /// diamond inheritance, and `def` itself is never included.
    pub fn ancestors(&self, def: &TypeDefinition) -> Vec<&'a TypeDefinition> {
        let mut visited = HashSet::from([def.name()]);
        let mut out = Vec::new();
        self.visit_ancestors(def, &mut visited, &mut out);
        out
    }

    fn visit_ancestors(
        &self,
        def: &TypeDefinition,
        visited: &mut HashSet<String>,
        out: &mut Vec<&'a TypeDefinition>,
    ) {
        for ancestor in def.ancestors() {
            let Some(parent) = self.table.resolve(ancestor) else {
                continue;
            };
            if !visited.insert(parent.name()) {
                continue;
            }
            out.push(parent);
            self.visit_ancestors(parent, visited, out);
        }
    }

    /// Copy ancestor overloads of names `def` re-declares.
    ///
    /// Only whitelisted methods whose signature `def` lacks are copied, each
    /// at most once.
    pub fn add_missing_overloads(&self, def: &mut TypeDefinition) {
        let type_name = def.name();
        let mut ids: HashSet<MethodId> = def.methods().map(Method::id).collect();
        let mut copied = Vec::new();

        for parent in self.ancestors(def) {
            for method in inheritable(parent) {
                if !def.has_member(&method.name) {
                    continue;
                }
                if self.copy_candidate(&type_name, method, &mut ids) {
                    copied.push(Member::Method(method.clone()));
                }
            }
        }

        debug!(type_name = %type_name, copied = copied.len(), "added missing overloads");
        def.members.extend(copied);
    }

    /// Inline every ancestor into `def` and drop the edges to them.
    pub fn flatten_type(&self, def: &mut TypeDefinition) {
        let type_name = def.name();
        let mut ids: HashSet<MethodId> = def.methods().map(Method::id).collect();
        let mut copied = Vec::new();
        let mut inlined = HashSet::new();

        for parent in self.ancestors(def) {
            for method in inheritable(parent) {
                if self.copy_candidate(&type_name, method, &mut ids) {
                    copied.push(Member::Method(method.clone()));
                }
            }
            inlined.insert(parent.name());
        }

        def.members.extend(copied);
        def.super_types.retain(|ancestor| !inlined.contains(&ancestor.name()));
        def.interfaces.retain(|ancestor| !inlined.contains(&ancestor.name()));
        debug!(type_name = %type_name, inlined = inlined.len(), "flattened");
    }

    /// Give undocumented overrides the documentation of the ancestor method
    /// with the same signature, nearest ancestor first.
    pub fn force_parent_javadocs(&self, def: &mut TypeDefinition) {
        let ancestors = self.ancestors(def);
        for parent in ancestors {
            for parent_method in parent.methods() {
                let id = parent_method.id();
                for method in def.members.iter_mut().filter_map(Member::as_method_mut) {
                    if !lacks_doc(method) || method.id() != id {
                        continue;
                    }
                    trace!(method = %id, from = %parent.name(), "forced parent doc");
                    method.javadoc = parent_method.javadoc.clone();
                }
            }
        }
    }

    fn copy_candidate(
        &self,
        type_name: &str,
        method: &Method,
        ids: &mut HashSet<MethodId>,
    ) -> bool {
        let id = method.id();
        if ids.contains(&id) || !self.whitelist.allows(type_name, &method.name) {
            return false;
        }
        trace!(type_name, method = %id, "copying overload");
        ids.insert(id);
        true
    }
}

/// Ancestor methods that can be re-declared on a subtype. Constructors are
/// not inherited.
fn inheritable(def: &TypeDefinition) -> impl Iterator<Item = &Method> {
    def.methods().filter(|method| method.kind != MethodKind::Constructor)
}

fn lacks_doc(method: &Method) -> bool {
    match method.javadoc.as_deref() {
        None => true,
        Some(doc) => doc.is_empty() || doc.trim() == "@inheritDoc",
    }
}
