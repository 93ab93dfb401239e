//! Member conflict resolution, run per type right before rendering.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};
use typebind_core::{Member, Method, MethodKind, TypeDefinition, TypeRef, TypeTable};

/// Docs longer than this are kept even if they mention `{@inheritDoc}`.
const VALUABLE_DOC_LEN: usize = 50;

/// The public members of one type, being cleaned up for emission.
pub struct MemberConflicts<'a> {
    def: &'a TypeDefinition,
    table: &'a TypeTable,
    members: Vec<Member>,
}

impl<'a> MemberConflicts<'a> {
    /// Collect the public members of `def`, minus methods named in `excluded`.
    pub fn new(def: &'a TypeDefinition, table: &'a TypeTable, excluded: &[String]) -> Self {
        let members = def
            .members
            .iter()
            .filter(|member| member.is_public())
            .filter(|member| match member {
                Member::Method(method) => !excluded.contains(&method.name),
                _ => true,
            })
            .cloned()
            .collect();
        Self {
            def,
            table,
            members,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Run every cleanup step and return the members to render.
    ///
    /// Nested type definitions take part in name grouping but are not part
    /// of the result; they are emitted as declarations of their own.
    pub fn resolve(mut self) -> Vec<Member> {
        self.fix_inherit_doc();
        self.remove_duplicates();
        self.resolve_conflicts();
        self.members
            .into_iter()
            .filter(|member| !matches!(member, Member::Type(_)))
            .collect()
    }

    /// Copy docs from interface methods onto overrides whose own doc is
    /// missing or only defers to the parent.
    ///
    /// Only interfaces are searched: a class can extend its superclass and
    /// inherit docs that way, but interfaces may be merged in afterwards.
    pub fn fix_inherit_doc(&mut self) {
        let inherited: Vec<(usize, String)> = self
            .members
            .iter()
            .enumerate()
            .filter_map(|(index, member)| {
                let method = member.as_method()?;
                if method.is_static || !method.is_override || has_valuable_doc(method) {
                    return None;
                }
                Some((index, self.interface_override_doc(method)?))
            })
            .collect();

        for (index, doc) in inherited {
            if let Some(method) = self.members[index].as_method_mut() {
                trace!(method = %method.name, "inherited interface doc");
                method.javadoc = Some(doc);
            }
        }
    }

    fn interface_override_doc(&self, method: &Method) -> Option<String> {
        for interface in &self.def.interfaces {
            let mut visited = HashSet::new();
            let Some(source) = self.override_source(interface, &method.name, &mut visited) else {
                continue;
            };
            let overridden = source
                .methods()
                .find(|m| m.kind == method.kind && m.name == method.name);
            if let Some(overridden) = overridden {
                return overridden.javadoc.clone();
            }
        }
        None
    }

    /// First type under `type_ref` (itself, then its ancestors depth-first)
    /// declaring a member named `name`.
    fn override_source(
        &self,
        type_ref: &TypeRef,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> Option<&'a TypeDefinition> {
        let def = self.table.resolve(type_ref)?;
        if !visited.insert(def.name()) {
            return None;
        }
        if def.has_member(name) {
            return Some(def);
        }
        def.ancestors()
            .find_map(|ancestor| self.override_source(ancestor, name, visited))
    }

    /// Drop every method whose signature already appeared earlier.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        let before = self.members.len();
        self.members.retain(|member| match member {
            Member::Method(method) => seen.insert(method.id()),
            _ => true,
        });
        let removed = before - self.members.len();
        if removed > 0 {
            debug!(type_name = %self.def.name(), removed, "removed duplicate overloads");
        }
    }

    /// Revert accessors that share a name with anything but their pair.
    pub fn resolve_conflicts(&mut self) {
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (index, member) in self.members.iter().enumerate() {
            groups.entry(member.name()).or_default().push(index);
        }

        for (name, indices) in groups {
            if indices.len() == 1 || self.is_accessor_pair(&indices) {
                continue;
            }
            for index in indices {
                let Member::Method(method) = &mut self.members[index] else {
                    continue;
                };
                if method.is_accessor() {
                    trace!(%name, original = %method.original_name, "reverted accessor");
                    *method = method.clone().into_plain();
                }
            }
        }
    }

    fn is_accessor_pair(&self, indices: &[usize]) -> bool {
        let [first, second] = indices else {
            return false;
        };
        let kind = |index: usize| self.members[index].as_method().map(|m| m.kind);
        matches!(
            (kind(*first), kind(*second)),
            (Some(MethodKind::Getter), Some(MethodKind::Setter))
                | (Some(MethodKind::Setter), Some(MethodKind::Getter))
        )
    }
}

/// Whether a method's doc says more than "see the parent".
fn has_valuable_doc(method: &Method) -> bool {
    match method.javadoc.as_deref() {
        None => false,
        Some(doc) if doc.trim().is_empty() => false,
        Some(doc) => doc.len() > VALUABLE_DOC_LEN || !doc.contains("{@inheritDoc}"),
    }
}
