//! Pattern input: positional arguments, a file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use route_syntax::{CharConverter, ConvertError, RouteTree, RouteTreeBuilder, StringLiteral};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("pattern is required: use positional arguments or -f/--file")]
    Missing,

    #[error("failed to read '{path}': {source}")]
    ReadFile { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    ReadStdin(io::Error),

    #[error("{label}: {source}")]
    Convert { label: String, source: ConvertError },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub literal: bool,
    pub token_replacement: bool,
}

pub struct InputArgs {
    pub patterns: Vec<String>,
    pub file: Option<PathBuf>,
    pub options: ParseOptions,
}

/// One pattern and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// `<arg>`, `<stdin>:3`, or `routes.txt:3`.
    pub label: String,
    pub text: String,
}

/// Positional patterns first, then the lines of the file. Blank lines are skipped.
pub fn load_patterns(patterns: &[String], file: Option<&Path>) -> Result<Vec<Pattern>, InputError> {
    let mut loaded: Vec<Pattern> = patterns
        .iter()
        .map(|text| Pattern {
            label: "<arg>".to_string(),
            text: text.clone(),
        })
        .collect();

    if let Some(path) = file {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::ReadStdin)?;
            loaded.extend(patterns_from_lines("<stdin>", &buf));
        } else {
            let content = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                path: path.display().to_string(),
                source,
            })?;
            loaded.extend(patterns_from_lines(&path.to_string_lossy(), &content));
        }
    }

    if loaded.is_empty() {
        return Err(InputError::Missing);
    }
    Ok(loaded)
}

pub fn patterns_from_lines(name: &str, content: &str) -> Vec<Pattern> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Pattern {
            label: format!("{}:{}", name, index + 1),
            text: line.to_string(),
        })
        .collect()
}

pub fn parse_pattern(pattern: &Pattern, options: ParseOptions) -> Result<RouteTree, InputError> {
    let builder = RouteTreeBuilder::new().with_token_replacement(options.token_replacement);
    if !options.literal {
        return Ok(builder.parse(&pattern.text));
    }

    let text = StringLiteral
        .convert(&pattern.text)
        .map_err(|source| InputError::Convert {
            label: pattern.label.clone(),
            source,
        })?;
    Ok(builder.parse_chars(text))
}

/// Loads every pattern or exits with the error.
pub fn load_or_exit(args: &InputArgs) -> Vec<Pattern> {
    match load_patterns(&args.patterns, args.file.as_deref()) {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Renders the diagnostics of `tree` against the pattern text.
pub fn render_diagnostics(pattern: &Pattern, tree: &RouteTree, color: bool) -> String {
    tree.diagnostics()
        .printer()
        .with_source(&pattern.text)
        .with_path(&pattern.label)
        .with_color(color)
        .render()
}
