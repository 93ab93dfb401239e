//! Output rendering methods.

use std::collections::HashSet;

use typebind_core::{Member, Method, MethodKind, Parameter, TypeDefinition, TypeKind, TypeRef};

use super::Emitter;
use super::naming::escape_param_name;
use crate::passes::MemberConflicts;

/// Extra member every iterable declaration gets.
const ITERATOR_MEMBER: &str = "[Symbol.iterator](): globalThis.Iterator<T>;";

impl Emitter<'_> {
    pub(super) fn emit_declaration(&mut self, def: &TypeDefinition) {
        if let Some(doc) = &def.javadoc {
            self.doc(1, doc);
        }

        if def.kind == TypeKind::FunctionalInterface
            && let Some(Member::Method(method)) = def.members.first()
            && !method.is_static
        {
            let name = self.declared_name(def);
            let function = self.function_type(method);
            self.line(1, &format!("export type {name} = {function};"));
            return;
        }

        let name = self.declared_name(def);
        let ancestors: Vec<&TypeRef> = def
            .ancestors()
            .filter(|ancestor| **ancestor != TypeRef::OBJECT)
            .collect();

        let in_interface;
        let mut header;
        if self.config.use_getters_and_setters {
            // Interfaces cannot declare accessors, so everything is a class
            // extending its first ancestor; the rest are merged in below.
            in_interface = false;
            header = format!("export class {name}");
            if let Some(first) = ancestors.first() {
                header.push_str(" extends ");
                header.push_str(&self.heritage(first));
            }
        } else {
            match def.kind {
                TypeKind::Class | TypeKind::Enum => {
                    in_interface = false;
                    header = format!("export class {name}");
                    let supers: Vec<&TypeRef> = def
                        .super_types
                        .iter()
                        .filter(|ancestor| **ancestor != TypeRef::OBJECT)
                        .collect();
                    self.push_heritage(&mut header, " extends ", &supers);
                    let interfaces: Vec<&TypeRef> = def.interfaces.iter().collect();
                    self.push_heritage(&mut header, " implements ", &interfaces);
                }
                TypeKind::Interface | TypeKind::FunctionalInterface => {
                    in_interface = true;
                    header = format!("export interface {name}");
                    self.push_heritage(&mut header, " extends ", &ancestors);
                }
            }
        }

        let members: Vec<Member> =
            MemberConflicts::new(def, self.table, &self.config.excluded_methods)
                .resolve()
                .into_iter()
                .filter(|member| !in_interface || renders_in_interface(member))
                .collect();
        let iterable = def.name() == TypeRef::ITERABLE_NAME;

        if members.is_empty() && !iterable {
            self.line(1, &format!("{header} {{}}"));
        } else {
            self.line(1, &format!("{header} {{"));
            if iterable {
                self.line(2, ITERATOR_MEMBER);
            }
            let setters: HashSet<&str> = members
                .iter()
                .filter_map(Member::as_method)
                .filter(|method| method.kind == MethodKind::Setter)
                .map(|method| method.name.as_str())
                .collect();
            for member in &members {
                self.emit_member(member, &setters);
            }
            self.line(1, "}");
        }

        // Declaration merging: a same-named interface extending every
        // ancestor gives the class all of their member signatures.
        if self.config.use_getters_and_setters && ancestors.len() > 1 {
            let parents: Vec<String> = ancestors
                .iter()
                .filter(|ancestor| ancestor.base_type() != &TypeRef::LIST)
                .map(|ancestor| self.type_to_ts(ancestor))
                .collect();
            if !parents.is_empty() {
                self.line(
                    1,
                    &format!("export interface {name} extends {} {{}}", parents.join(", ")),
                );
            }
        }
    }

    fn emit_member(&mut self, member: &Member, setters: &HashSet<&str>) {
        let text = match member {
            Member::Field(field) => {
                let modifiers = match (field.is_static, field.is_final) {
                    (true, true) => "static readonly ",
                    (true, false) => "static ",
                    (false, true) => "readonly ",
                    (false, false) => "",
                };
                let ty = self.type_to_ts(&field.type_ref);
                format!("{modifiers}{}: {ty};", field.name)
            }
            Member::Method(method) => self.method_signature(method, setters),
            Member::Type(_) => return,
        };
        if let Some(doc) = member.javadoc() {
            self.doc(2, doc);
        }
        self.line(2, &text);
    }

    fn method_signature(&mut self, method: &Method, setters: &HashSet<&str>) -> String {
        let modifier = if method.is_static { "static " } else { "" };
        let accessors = self.config.use_getters_and_setters;
        match method.kind {
            MethodKind::Constructor => format!("constructor({});", self.params(&method.params)),
            MethodKind::Getter if accessors => {
                let ty = self.type_to_ts(&method.return_type);
                if self.config.emit_read_only && !setters.contains(method.name.as_str()) {
                    format!("{modifier}readonly {}: {ty};", method.name)
                } else {
                    format!("{modifier}get {}(): {ty};", method.name)
                }
            }
            MethodKind::Setter if accessors => {
                format!("{modifier}set {}({});", method.name, self.params(&method.params))
            }
            _ => {
                let name = if method.is_accessor() {
                    &method.original_name
                } else {
                    &method.name
                };
                let generics = self.generics(&method.type_params);
                let params = self.params(&method.params);
                let ret = self.type_to_ts(&method.return_type);
                format!("{modifier}{name}{generics}({params}): {ret};")
            }
        }
    }

    /// `<generics>(params) => ret`
    fn function_type(&mut self, method: &Method) -> String {
        let generics = self.generics(&method.type_params);
        let params = self.params(&method.params);
        let ret = self.type_to_ts(&method.return_type);
        format!("{generics}({params}) => {ret}")
    }

    fn params(&mut self, params: &[Parameter]) -> String {
        let rendered: Vec<String> = params
            .iter()
            .map(|param| {
                let spread = if param.varargs { "..." } else { "" };
                let name = escape_param_name(&param.name);
                format!("{spread}{name}: {}", self.type_to_ts(&param.type_ref))
            })
            .collect();
        rendered.join(", ")
    }

    /// Simple name plus declared generic parameters.
    fn declared_name(&mut self, def: &TypeDefinition) -> String {
        format!("{}{}", def.simple_name(), self.generics(def.type_ref.type_args()))
    }

    /// Declaration-site generics: `<T extends Bound, U>`, or nothing.
    fn generics(&mut self, params: &[TypeRef]) -> String {
        if params.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = params
            .iter()
            .map(|param| match param {
                TypeRef::Parametrized { base, args } => {
                    let bounds: Vec<String> = args.iter().map(|b| self.type_to_ts(b)).collect();
                    format!("{} extends {}", base.name(), bounds.join(" & "))
                }
                other => other.name(),
            })
            .collect();
        format!("<{}>", rendered.join(", "))
    }

    fn push_heritage(&mut self, header: &mut String, keyword: &str, ancestors: &[&TypeRef]) {
        if ancestors.is_empty() {
            return;
        }
        let rendered: Vec<String> = ancestors.iter().map(|a| self.heritage(a)).collect();
        header.push_str(keyword);
        header.push_str(&rendered.join(", "));
    }

    /// Ancestor in a heritage clause, where array shorthand is not allowed.
    fn heritage(&mut self, ancestor: &TypeRef) -> String {
        if ancestor.base_type() == &TypeRef::LIST {
            let element = match ancestor.type_args() {
                [element] => self.type_to_ts(element),
                _ => "any".to_string(),
            };
            return format!("Array<{element}>");
        }
        self.type_to_ts(ancestor)
    }

    /// Usage-site rendering of a type.
    pub(super) fn type_to_ts(&mut self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Simple(name) => match ty.builtin_ts_name() {
                Some(ts) => ts.to_string(),
                None => self.local_name(name),
            },
            TypeRef::Parametrized { base, args } => {
                if base.base_type() == &TypeRef::LIST {
                    return match args.as_slice() {
                        [element] => format!("{}[]", self.type_to_ts(element)),
                        _ => "any[]".to_string(),
                    };
                }
                let base = self.type_to_ts(base);
                let args: Vec<String> = args.iter().map(|arg| self.type_to_ts(arg)).collect();
                format!("{base}<{}>", args.join(", "))
            }
            TypeRef::Array {
                component,
                dimensions,
            } => format!(
                "{}{}",
                self.type_to_ts(component),
                "[]".repeat(*dimensions as usize)
            ),
            TypeRef::Wildcard(bound) => self.type_to_ts(bound),
            TypeRef::Nullable(inner) => self.type_to_ts(inner),
        }
    }

    /// `/** ... */` block, one ` * ` line per source line.
    pub(super) fn doc(&mut self, depth: usize, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.line(depth, "/**");
        for line in text.lines() {
            let line = line.trim_end().replace("*/", "*\\/");
            if line.is_empty() {
                self.line(depth, " *");
            } else {
                self.line(depth, &format!(" * {line}"));
            }
        }
        self.line(depth, " */");
    }
}

/// Interfaces declare neither statics nor constructors.
fn renders_in_interface(member: &Member) -> bool {
    match member {
        Member::Method(method) => !method.is_static && method.kind != MethodKind::Constructor,
        other => !other.is_static(),
    }
}
