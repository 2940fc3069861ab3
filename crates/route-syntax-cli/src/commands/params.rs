//! Show the parameters of route patterns.

use route_syntax::ParameterTable;
use serde::Serialize;

use super::input::{InputArgs, load_or_exit, parse_pattern, render_diagnostics};

pub struct ParamsArgs {
    pub input: InputArgs,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct PatternParameters<'a> {
    pattern: &'a str,
    parameters: &'a ParameterTable,
}

pub fn run(args: ParamsArgs) {
    let patterns = load_or_exit(&args.input);
    let mut trees = Vec::with_capacity(patterns.len());

    for pattern in &patterns {
        match parse_pattern(pattern, args.input.options) {
            Ok(tree) => {
                if !tree.is_valid() {
                    eprintln!("{}", render_diagnostics(pattern, &tree, args.color));
                }
                trees.push((pattern, tree));
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if args.json {
        let entries: Vec<PatternParameters> = trees
            .iter()
            .map(|(pattern, tree)| PatternParameters {
                pattern: &pattern.text,
                parameters: tree.parameters(),
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let show_headers = trees.len() > 1;
    for (i, (pattern, tree)) in trees.iter().enumerate() {
        if show_headers {
            if i > 0 {
                println!();
            }
            println!("# {}", pattern.label);
        }
        print!(
            "{}",
            tree.printer()
                .only_parameters(true)
                .with_spans(args.spans)
                .dump()
        );
    }
}
