//! Module grouping and output partitioning.

use indexmap::IndexMap;
use serde::Serialize;
use typebind_core::{Member, TypeDefinition};
use typebind_core::utils::module_name;

use crate::Config;

/// Module for types declared outside any package.
pub const DEFAULT_MODULE: &str = "default";

/// Name of the unit referencing all other units.
pub const INDEX_UNIT: &str = "index.d.ts";

/// One generated file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputUnit {
    /// File name, e.g. `com_acme.d.ts`.
    pub name: String,
    pub contents: String,
}

/// Group definitions by module, lifting nested definitions into a module
/// named after their enclosing type. Builtin types are dropped.
///
/// Modules appear in first-declaration order, definitions in input order
/// with each enclosing type before the types nested in it.
pub fn collect_modules(defs: &[TypeDefinition]) -> IndexMap<String, Vec<TypeDefinition>> {
    let mut modules = IndexMap::new();
    for def in defs {
        add_type(&mut modules, def);
    }
    modules
}

fn add_type(modules: &mut IndexMap<String, Vec<TypeDefinition>>, def: &TypeDefinition) {
    if def.type_ref.is_builtin() {
        return;
    }
    let name = def.name();
    let module = match module_name(&name) {
        "" => DEFAULT_MODULE,
        module => module,
    };
    modules
        .entry(module.to_string())
        .or_default()
        .push(def.clone());

    for member in &def.members {
        if let Member::Type(nested) = member {
            add_type(modules, nested);
        }
    }
}

/// Output unit key for a module: the first two segments of its name (the
/// whole name if shorter), or the whole module name when grouping by
/// module. Dots become underscores.
///
/// ```
/// use typebind_compiler::partition::partition_key;
///
/// assert_eq!(partition_key("com.acme.zoo", false), "com_acme");
/// assert_eq!(partition_key("com.acme.zoo", true), "com_acme_zoo");
/// assert_eq!(partition_key("acme", false), "acme");
/// ```
pub fn partition_key(module: &str, group_by_module: bool) -> String {
    let base = if group_by_module {
        module
    } else {
        match module.match_indices('.').nth(1) {
            Some((second_dot, _)) => &module[..second_dot],
            None => module,
        }
    };
    base.replace('.', "_")
}

/// Gather rendered modules into output units, plus the index if requested.
///
/// Modules sharing a key are concatenated in input order, separated by a
/// blank line.
pub fn partition(rendered: Vec<(String, String)>, config: &Config) -> Vec<OutputUnit> {
    let mut units: IndexMap<String, String> = IndexMap::new();
    for (module, text) in rendered {
        let contents = units
            .entry(partition_key(&module, config.group_by_module))
            .or_default();
        if !contents.is_empty() {
            contents.push('\n');
        }
        contents.push_str(&text);
    }

    let index = config.build_index.then(|| {
        let mut index = String::from("// auto-generated references to packages\n");
        for key in units.keys() {
            index.push_str(&format!("/// <reference path='{key}.d.ts' />\n"));
        }
        index
    });

    let mut out: Vec<OutputUnit> = units
        .into_iter()
        .map(|(key, contents)| OutputUnit {
            name: format!("{key}.d.ts"),
            contents,
        })
        .collect();
    if let Some(contents) = index {
        out.push(OutputUnit {
            name: INDEX_UNIT.to_string(),
            contents,
        });
    }
    out
}
