mod cli;
mod commands;

use cli::{CheckParams, ParamsParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("params", m)) => {
            let params = ParamsParams::from_matches(m);
            commands::params::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
