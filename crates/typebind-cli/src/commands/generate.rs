use std::fs;
use std::path::PathBuf;

use tracing::info;
use typebind_compiler::{Config, Pipeline};

use super::model_loader::load_model;
use crate::error::{Error, Result};

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = generate(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Run the pipeline and write every output unit into `out_dir`.
///
/// Nothing is written unless the whole pipeline succeeds. Returns the
/// written paths in output order.
pub fn generate(args: &GenerateArgs) -> Result<Vec<PathBuf>> {
    let pipeline = Pipeline::new(args.config.clone())?;
    let table = load_model(args.input.as_deref())?;
    let units = pipeline.run(&table);

    fs::create_dir_all(&args.out_dir).map_err(|source| Error::Write {
        path: args.out_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = args.out_dir.join(&unit.name);
        fs::write(&path, &unit.contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote declarations");
        written.push(path);
    }
    Ok(written)
}
