use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use typebind_compiler::{Config, Pipeline};

use super::model_loader::load_model;
use crate::error::{Error, Result};

pub struct DumpArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub compact: bool,
    pub config: Config,
}

pub fn run(args: DumpArgs) {
    let output = match dump(&args) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let written = match &args.output {
        Some(path) => fs::write(path, &output).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        }),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| Error::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    };
    if let Err(e) = written {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Serialize the top-level definitions left after the hierarchy passes.
pub fn dump(args: &DumpArgs) -> Result<String> {
    let pipeline = Pipeline::new(args.config.clone())?;
    let table = load_model(args.input.as_deref())?;
    let defs = pipeline.transform(&table);

    let mut output = if args.compact {
        serde_json::to_string(&defs)?
    } else {
        serde_json::to_string_pretty(&defs)?
    };
    output.push('\n');
    Ok(output)
}
