mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CheckParams, ParamsParams, TreeParams};

/// When to color rendered diagnostics (`--color`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Diagnostics are written to stderr, so `Auto` looks at that stream.
    pub fn enabled(self) -> bool {
        use std::io::IsTerminal;

        match self {
            ColorMode::Auto => std::io::stderr().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
