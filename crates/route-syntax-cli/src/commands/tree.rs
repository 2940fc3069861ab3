//! Show the syntax tree of route patterns.

use super::input::{InputArgs, load_or_exit, parse_pattern, render_diagnostics};

pub struct TreeArgs {
    pub input: InputArgs,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let patterns = load_or_exit(&args.input);
    let show_headers = patterns.len() > 1;

    for (i, pattern) in patterns.iter().enumerate() {
        let tree = match parse_pattern(pattern, args.input.options) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        };

        if show_headers {
            if i > 0 {
                println!();
            }
            println!("# {}", pattern.label);
        }
        print!("{}", tree.printer().with_spans(args.spans).dump());

        // The tree is printed even when invalid; diagnostics go to stderr.
        if !tree.is_valid() {
            eprintln!("{}", render_diagnostics(pattern, &tree, args.color));
        }
    }
}
