//! Core emitter struct and module assembly.

use std::collections::HashSet;

use indexmap::IndexMap;
use typebind_core::{TypeDefinition, TypeTable};

use crate::Config;

/// TypeScript emitter for a single module.
pub struct Emitter<'a> {
    pub(super) table: &'a TypeTable,
    pub(super) config: &'a Config,
    /// Module being rendered (a package, or an enclosing type's name).
    pub(super) module: &'a str,

    /// Simple names already bound in the module scope
    pub(super) taken: HashSet<String>,
    /// Qualified name -> local name, in first-reference order
    pub(super) imports: IndexMap<String, String>,
    /// Declarations buffer (imports are prepended on finish)
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(table: &'a TypeTable, config: &'a Config, module: &'a str) -> Self {
        Self {
            table,
            config,
            module,
            taken: HashSet::new(),
            imports: IndexMap::new(),
            output: String::new(),
        }
    }

    /// Render `defs`, all belonging to this module, as one module block.
    pub fn emit(mut self, defs: &[TypeDefinition]) -> String {
        for def in defs {
            self.taken.insert(def.simple_name());
        }

        for (i, def) in defs.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.emit_declaration(def);
        }

        let mut out = format!("declare module '{}' {{\n", self.module);
        let imports = self.import_lines();
        if !imports.is_empty() {
            for line in &imports {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&self.output);
        out.push_str("}\n");
        out
    }

    /// Append `text` on its own line at `depth` levels of indentation.
    pub(super) fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
