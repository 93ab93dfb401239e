//! Command builders for the CLI.
//!
//! `dump` accepts every `generate` flag so the two can share an invocation;
//! the ones that only shape rendered text are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Flags read by the hierarchy passes.
fn with_transform_args(cmd: Command) -> Command {
    cmd.arg(flatten_types_arg())
        .arg(force_parent_javadocs_arg())
        .arg(method_whitelist_arg())
        .arg(root_types_arg())
}

/// Add hidden rendering args (for commands that don't render declarations).
fn with_hidden_render_args(cmd: Command) -> Command {
    cmd.arg(index_arg().hide(true))
        .arg(emit_read_only_arg().hide(true))
        .arg(exclude_methods_arg().hide(true))
        .arg(no_getters_and_setters_arg().hide(true))
        .arg(group_by_module_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typebind")
        .about("TypeScript declarations from a resolved class-hierarchy model")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(dump_command())
}

/// Write one `.d.ts` file per partition.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate TypeScript declaration files")
        .after_help(
            r#"EXAMPLES:
  typebind generate model.json -o types          # one file per package prefix
  typebind generate model.json -o types --index  # plus index.d.ts
  typebind generate - --group-by-module          # read from stdin
  typebind generate model.json --root-types com.acme.Dog
  typebind generate model.json --method-whitelist 'com\.acme\..*'"#,
        )
        .arg(input_arg())
        .arg(out_dir_arg())
        .arg(index_arg())
        .arg(emit_read_only_arg())
        .arg(exclude_methods_arg())
        .arg(no_getters_and_setters_arg())
        .arg(group_by_module_arg());

    with_transform_args(cmd)
}

/// Print the transformed model as JSON.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the model after the hierarchy passes as JSON")
        .after_help(
            r#"EXAMPLES:
  typebind dump model.json                   # pretty JSON on stdout
  typebind dump model.json --flatten-types   # after flattening
  typebind dump model.json --compact -o out.json"#,
        )
        .arg(input_arg())
        .arg(output_file_arg())
        .arg(compact_arg());

    with_hidden_render_args(with_transform_args(cmd))
}
