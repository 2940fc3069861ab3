//! Turns `ArgMatches` into command arguments.
//!
//! `*Params` mirror what clap parsed, flags included. Converting them into a command's
//! `*Args` drops the flags that command ignores and settles whether to use color.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorMode;
use crate::commands::check::CheckArgs;
use crate::commands::input::{InputArgs, ParseOptions};
use crate::commands::params::ParamsArgs;
use crate::commands::tree::TreeArgs;

/// Input flags every command shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParams {
    pub patterns: Vec<String>,
    pub file: Option<PathBuf>,
    pub literal: bool,
    pub token_replacement: bool,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns: m
                .get_many::<String>("patterns")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            file: m.get_one::<PathBuf>("file").cloned(),
            literal: m.get_flag("literal"),
            token_replacement: m.get_flag("token_replacement"),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            patterns: p.patterns,
            file: p.file,
            options: ParseOptions {
                literal: p.literal,
                token_replacement: p.token_replacement,
            },
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub json: bool,
    pub color: ColorMode,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            color: p.color.enabled(),
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub spans: bool,
    pub color: ColorMode,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            color: p.color.enabled(),
        }
    }
}

pub struct ParamsParams {
    pub input: InputParams,
    pub spans: bool,
    pub json: bool,
    pub color: ColorMode,
}

impl ParamsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<ParamsParams> for ParamsArgs {
    fn from(p: ParamsParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            json: p.json,
            color: p.color.enabled(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorMode {
    m.get_one::<ColorMode>("color").copied().unwrap_or_default()
}
