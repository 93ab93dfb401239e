use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use typebind_core::{TypeTable, parse_model};

use crate::error::{Error, Result};

/// Read resolver output from a file, or from stdin for `-` or no path,
/// and index it.
pub fn load_model(input: Option<&Path>) -> Result<TypeTable> {
    let json = match input {
        Some(path) if path.as_os_str() == "-" => load_stdin()?,
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => load_stdin()?,
    };

    let table = TypeTable::new(parse_model(&json)?)?;
    debug!(types = table.len(), "loaded model");
    Ok(table)
}

fn load_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(Error::Stdin)?;
    Ok(buf)
}
