//! One `clap::Arg` builder per flag. Every command takes every flag; `commands.rs`
//! hides the ones a command ignores.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::ColorMode;

pub fn patterns_arg() -> Arg {
    Arg::new("patterns")
        .value_name("PATTERN")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Route pattern(s) to parse")
}

/// Patterns from a file, one per line (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read patterns from a file, one per line (use \"-\" for stdin)")
}

/// Input is a quoted string literal (--literal).
pub fn literal_arg() -> Arg {
    Arg::new("literal")
        .long("literal")
        .action(ArgAction::SetTrue)
        .help("Treat each pattern as a quoted string literal, e.g. \"{id}\" or r\"...\"")
}

/// Recognize `[controller]` replacement tokens (--token-replacement).
pub fn token_replacement_arg() -> Arg {
    Arg::new("token_replacement")
        .long("token-replacement")
        .action(ArgAction::SetTrue)
        .help("Recognize replacement tokens such as [controller]")
}

pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorMode))
        .help("Color diagnostics")
}

pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON to stdout")
}
