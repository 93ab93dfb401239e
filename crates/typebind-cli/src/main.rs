mod cli;
mod commands;
mod error;
mod logging;

use cli::{DumpParams, GenerateParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
