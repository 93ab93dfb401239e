//! Root-type filter.

use indexmap::IndexSet;
use tracing::{debug, warn};
use typebind_core::{TypeRef, TypeTable};

/// Top-level types reachable from `roots`, in table order.
///
/// Reachability follows hierarchy edges, member signatures, generic
/// parameters and nested definitions. Reaching a nested type pulls in the
/// top-level type enclosing it. Names missing from the table are skipped.
pub fn reachable_roots<S: AsRef<str>>(table: &TypeTable, roots: &[S]) -> IndexSet<String> {
    let mut reached: IndexSet<String> = IndexSet::new();
    let mut worklist: Vec<String> = Vec::new();

    for root in roots {
        let root = root.as_ref();
        match table.root_of(root) {
            Some(top) => worklist.push(top.to_string()),
            None => warn!(root, "root type not found, skipping"),
        }
    }

    while let Some(name) = worklist.pop() {
        if !reached.insert(name.clone()) {
            continue;
        }
        let Some(def) = table.get(&name) else {
            continue;
        };
        def.walk_type_refs(&mut |type_ref| {
            let TypeRef::Simple(referenced) = type_ref else {
                return;
            };
            if let Some(top) = table.root_of(referenced)
                && !reached.contains(top)
            {
                worklist.push(top.to_string());
            }
        });
    }

    let ordered: IndexSet<String> = table
        .roots()
        .map(|def| def.name())
        .filter(|name| reached.contains(name))
        .collect();
    debug!(roots = roots.len(), reached = ordered.len(), "resolved root closure");
    ordered
}
