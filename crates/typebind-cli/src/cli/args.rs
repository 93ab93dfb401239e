//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `dump` can share
//! definitions, hiding the ones that do not affect their output.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Resolver output (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("MODEL")
        .value_parser(value_parser!(PathBuf))
        .help("Resolver JSON output (stdin if omitted or \"-\")")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Directory receiving the .d.ts files")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Emit index.d.ts (--index).
pub fn index_arg() -> Arg {
    Arg::new("index")
        .long("index")
        .action(ArgAction::SetTrue)
        .help("Emit index.d.ts referencing every output file")
}

/// Readonly getters (--emit-read-only).
pub fn emit_read_only_arg() -> Arg {
    Arg::new("emit_read_only")
        .long("emit-read-only")
        .action(ArgAction::SetTrue)
        .help("Render getters without a setter as readonly properties")
}

/// Excluded member names (--exclude-methods).
pub fn exclude_methods_arg() -> Arg {
    Arg::new("exclude_methods")
        .long("exclude-methods")
        .value_name("NAMES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Member names never emitted (comma-separated)")
}

/// Plain methods instead of accessors (--no-getters-and-setters).
pub fn no_getters_and_setters_arg() -> Arg {
    Arg::new("no_getters_and_setters")
        .long("no-getters-and-setters")
        .action(ArgAction::SetTrue)
        .help("Render accessors as plain methods")
}

/// One file per module (--group-by-module).
pub fn group_by_module_arg() -> Arg {
    Arg::new("group_by_module")
        .long("group-by-module")
        .action(ArgAction::SetTrue)
        .help("Emit one file per module instead of per package prefix")
}

/// Inline ancestors (--flatten-types).
pub fn flatten_types_arg() -> Arg {
    Arg::new("flatten_types")
        .long("flatten-types")
        .action(ArgAction::SetTrue)
        .help("Copy ancestor members into each type and drop the hierarchy")
}

/// Ancestor docs onto overrides (--force-parent-javadocs).
pub fn force_parent_javadocs_arg() -> Arg {
    Arg::new("force_parent_javadocs")
        .long("force-parent-javadocs")
        .action(ArgAction::SetTrue)
        .help("Copy ancestor docs onto undocumented overriding methods")
}

/// Whitelist patterns (--method-whitelist, repeatable).
pub fn method_whitelist_arg() -> Arg {
    Arg::new("method_whitelist")
        .long("method-whitelist")
        .value_name("REGEX")
        .action(ArgAction::Append)
        .help("Pattern matched against <type>.<method>; gates copied methods")
}

/// Root types (--root-types).
pub fn root_types_arg() -> Arg {
    Arg::new("root_types")
        .long("root-types")
        .value_name("TYPES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Only emit these types and what they reference (comma-separated)")
}
