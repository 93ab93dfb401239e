//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the flags a command reads; the `Into<*Args>` impls fold
//! them into a [`Config`] for the command handlers. Hidden flags are parsed
//! but never extracted.

use std::path::PathBuf;

use clap::ArgMatches;
use typebind_compiler::Config;

use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;

/// Flags consumed by the hierarchy passes, shared by both commands.
#[derive(Debug)]
pub struct TransformParams {
    pub flatten_types: bool,
    pub force_parent_javadocs: bool,
    pub method_whitelist: Vec<String>,
    pub root_types: Vec<String>,
}

impl TransformParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            flatten_types: m.get_flag("flatten_types"),
            force_parent_javadocs: m.get_flag("force_parent_javadocs"),
            method_whitelist: strings(m, "method_whitelist"),
            root_types: strings(m, "root_types"),
        }
    }

    fn apply(self, config: Config) -> Config {
        config
            .flatten_types(self.flatten_types)
            .force_parent_javadocs(self.force_parent_javadocs)
            .method_whitelist(self.method_whitelist)
            .root_types(self.root_types)
    }
}

pub struct GenerateParams {
    pub input: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub index: bool,
    pub emit_read_only: bool,
    pub exclude_methods: Vec<String>,
    pub no_getters_and_setters: bool,
    pub group_by_module: bool,
    pub transform: TransformParams,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            index: m.get_flag("index"),
            emit_read_only: m.get_flag("emit_read_only"),
            exclude_methods: strings(m, "exclude_methods"),
            no_getters_and_setters: m.get_flag("no_getters_and_setters"),
            group_by_module: m.get_flag("group_by_module"),
            transform: TransformParams::from_matches(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let config = Config::new()
            .build_index(p.index)
            .emit_read_only(p.emit_read_only)
            .excluded_methods(p.exclude_methods)
            .use_getters_and_setters(!p.no_getters_and_setters)
            .group_by_module(p.group_by_module);

        Self {
            input: p.input,
            out_dir: p.out_dir,
            config: p.transform.apply(config),
        }
    }
}

pub struct DumpParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub compact: bool,
    pub transform: TransformParams,
    // Note: index, emit_read_only, exclude_methods, no_getters_and_setters,
    // group_by_module are parsed but not extracted (rendering only)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            compact: m.get_flag("compact"),
            transform: TransformParams::from_matches(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            compact: p.compact,
            config: p.transform.apply(Config::new()),
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
