//! Name binding: local names, imports and parameter names.

use indexmap::IndexMap;
use typebind_core::utils::{module_name, simple_name};

use super::Emitter;

/// Words that cannot name a parameter in a declaration file.
const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Parameter name safe to declare, with `_` appended to reserved words.
pub fn escape_param_name(name: &str) -> String {
    if RESERVED_WORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

impl Emitter<'_> {
    /// Name under which a qualified type is visible in this module.
    ///
    /// Types of other modules are imported on first use. An import whose
    /// simple name is already bound is aliased as `<module path>_<name>`.
    pub(super) fn local_name(&mut self, qualified: &str) -> String {
        let module = module_name(qualified);
        if module.is_empty() {
            return qualified.to_string();
        }
        let simple = simple_name(qualified);
        if module == self.module {
            return simple.to_string();
        }
        if let Some(local) = self.imports.get(qualified) {
            return local.clone();
        }

        let local = if self.taken.contains(simple) {
            format!("{}_{simple}", module.replace('.', "_"))
        } else {
            simple.to_string()
        };
        self.taken.insert(local.clone());
        self.imports.insert(qualified.to_string(), local.clone());
        local
    }

    /// One `import` statement per source module, in first-reference order.
    pub(super) fn import_lines(&self) -> Vec<String> {
        let mut by_module: IndexMap<&str, Vec<String>> = IndexMap::new();
        for (qualified, local) in &self.imports {
            let simple = simple_name(qualified);
            let specifier = if simple == local.as_str() {
                simple.to_string()
            } else {
                format!("{simple} as {local}")
            };
            by_module
                .entry(module_name(qualified))
                .or_default()
                .push(specifier);
        }

        by_module
            .into_iter()
            .map(|(module, specifiers)| {
                format!("import {{ {} }} from '{module}';", specifiers.join(", "))
            })
            .collect()
    }
}
