//! Pipeline driver: root selection, hierarchy passes, emission, partitioning.

use rayon::prelude::*;
use tracing::debug;
use typebind_core::{Member, TypeDefinition, TypeTable};

use crate::partition::{OutputUnit, collect_modules, partition};
use crate::passes::{HierarchyTransformer, reachable_roots};
use crate::typegen::typescript::Emitter;
use crate::whitelist::MethodWhitelist;
use crate::{Config, Result};

/// A configured pipeline, ready to run over any number of type tables.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
    whitelist: MethodWhitelist,
}

impl Pipeline {
    /// Validate `config`. Whitelist patterns are compiled here, so a bad
    /// pattern fails before any type is processed.
    pub fn new(config: Config) -> Result<Self> {
        let whitelist = MethodWhitelist::new(&config.method_whitelist)?;
        debug!(patterns = whitelist.len(), "compiled method whitelist");
        Ok(Self { config, whitelist })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Selected top-level definitions after the hierarchy passes, in table
    /// order. The table itself is left untouched.
    pub fn transform(&self, table: &TypeTable) -> Vec<TypeDefinition> {
        let selected: Vec<&TypeDefinition> = if self.config.root_types.is_empty() {
            table.roots().collect()
        } else {
            let reached = reachable_roots(table, &self.config.root_types);
            table
                .roots()
                .filter(|def| reached.contains(&def.name()))
                .collect()
        };
        debug!(types = selected.len(), "transforming");

        let transformer = HierarchyTransformer::new(table, &self.whitelist);
        selected
            .into_par_iter()
            .map(|def| {
                let mut def = def.clone();
                self.apply_passes(&transformer, &mut def);
                def
            })
            .collect()
    }

    fn apply_passes(&self, transformer: &HierarchyTransformer<'_>, def: &mut TypeDefinition) {
        if self.config.flatten_types {
            transformer.flatten_type(def);
        } else {
            transformer.add_missing_overloads(def);
        }
        if self.config.force_parent_javadocs {
            transformer.force_parent_javadocs(def);
        }

        for member in &mut def.members {
            if let Member::Type(nested) = member {
                self.apply_passes(transformer, nested);
            }
        }
    }

    /// Generate every output unit for `table`.
    pub fn run(&self, table: &TypeTable) -> Vec<OutputUnit> {
        let defs = self.transform(table);
        let modules: Vec<(String, Vec<TypeDefinition>)> =
            collect_modules(&defs).into_iter().collect();

        let rendered: Vec<(String, String)> = modules
            .par_iter()
            .map(|(module, defs)| {
                let text = Emitter::new(table, &self.config, module).emit(defs);
                debug!(module = %module, types = defs.len(), "emitted module");
                (module.clone(), text)
            })
            .collect();

        partition(rendered, &self.config)
    }
}
