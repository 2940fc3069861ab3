//! Command builders for the CLI.
//!
//! Every command accepts the same input and output flags. Flags a command ignores are
//! hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Input args shared by all commands.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(patterns_arg())
        .arg(file_arg())
        .arg(literal_arg())
        .arg(token_replacement_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("route-syntax")
        .about("Check and inspect ASP.NET route patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(params_command())
}

/// Validate route patterns.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate route patterns")
        .override_usage(
            "\
  route-syntax check <PATTERN>...
  route-syntax check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  route-syntax check 'products/{id:int}'       # silent when valid
  route-syntax check -f routes.txt             # one pattern per line
  route-syntax check --literal '"{a}{b}"'      # spans point into the literal
  route-syntax check --json '{a}/{A}'          # diagnostics as JSON"#,
        )
        .arg(json_arg());

    with_input_args(cmd).arg(spans_arg().hide(true))
}

/// Show the concrete syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the syntax tree of route patterns")
        .override_usage(
            "\
  route-syntax tree <PATTERN>...
  route-syntax tree -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  route-syntax tree '{controller=Home}/{action}'
  route-syntax tree --spans 'files/{**path}'
  route-syntax tree --token-replacement '[controller]/{id?}'"#,
        )
        .arg(spans_arg());

    with_input_args(cmd).arg(json_arg().hide(true))
}

/// Show the parameter table.
pub fn params_command() -> Command {
    let cmd = Command::new("params")
        .about("Show the parameters of route patterns")
        .override_usage(
            "\
  route-syntax params <PATTERN>...
  route-syntax params -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  route-syntax params '{id:int:min(1)}/{slug?}'
  route-syntax params --json 'files/{**path}'"#,
        )
        .arg(spans_arg())
        .arg(json_arg());

    with_input_args(cmd)
}
