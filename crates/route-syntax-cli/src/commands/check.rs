//! Validate route patterns.

use route_syntax::Diagnostic;
use serde::Serialize;

use super::input::{InputArgs, load_or_exit, parse_pattern, render_diagnostics};

pub struct CheckArgs {
    pub input: InputArgs,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    pattern: &'a str,
    label: &'a str,
    valid: bool,
    diagnostics: Vec<&'a Diagnostic>,
}

pub fn run(args: CheckArgs) {
    let patterns = load_or_exit(&args.input);
    let mut trees = Vec::with_capacity(patterns.len());
    let mut failed = 0;

    for pattern in &patterns {
        match parse_pattern(pattern, args.input.options) {
            Ok(tree) => trees.push((pattern, tree)),
            Err(e) => {
                eprintln!("error: {}", e);
                failed += 1;
            }
        }
    }

    if args.json {
        let reports: Vec<Report> = trees
            .iter()
            .map(|(pattern, tree)| Report {
                pattern: &pattern.text,
                label: &pattern.label,
                valid: tree.is_valid(),
                diagnostics: tree.diagnostics().iter().collect(),
            })
            .collect();
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    for (pattern, tree) in &trees {
        if tree.is_valid() {
            continue;
        }
        failed += 1;
        if !args.json {
            eprintln!("{}", render_diagnostics(pattern, tree, args.color));
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
