use rowan::TextSize;

use crate::{RouteTree, RouteTreeBuilder};

const PATTERNS: &[&str] = &[
    "",
    "/",
    "//",
    "~",
    "~/",
    "hello/world",
    "{id}",
    "{id:foo(wee)}",
    "{*a}/{b}",
    "{a}{b}",
    "a{foob{bar}c",
    "{controller=Home}/{action=Index}/{id?}",
    "{name}.{ext?}",
    r"{a:regex(^\d{{3}}$)}",
    "{a:f(x))y)}",
    "{**path}",
    "{",
    "}",
    "{{",
    "}}",
    "{{{",
    "{a}}",
    "{a:",
    "{a:b(",
    "{a:b(c",
    "{a=",
    "{a?",
    "{?}",
    "{*}",
    "{***}",
    "{a?b?}",
    "?",
    ".{a?}",
    "{a}.{b?}.{c?}",
    "[controller]/[[x]]/[]/[a[b]/[a",
    "a]b]",
    "café/{ü}",
];

#[track_caller]
fn assert_lossless(tree: &RouteTree, input: &str) {
    let root = tree.syntax();
    let mut end = TextSize::from(0);
    let mut text = String::new();

    for token in root.descendants_with_tokens().filter_map(|it| it.into_token()) {
        assert_eq!(
            token.text_range().start(),
            end,
            "gap or overlap before {:?} in {:?}",
            token,
            input
        );
        end = token.text_range().end();
        text.push_str(token.text());
    }

    assert_eq!(end, TextSize::of(input), "tokens do not reach the end of {input:?}");
    assert_eq!(text, input);
    assert_eq!(root.text().to_string(), input);

    for diagnostic in tree.diagnostics() {
        assert!(
            diagnostic.range().end() <= TextSize::of(input),
            "{diagnostic} is out of bounds for {input:?}"
        );
    }
}

#[test]
fn tokens_reproduce_input() {
    for replacement in [false, true] {
        let builder = RouteTreeBuilder::new().with_token_replacement(replacement);
        for input in PATTERNS {
            assert_lossless(&builder.parse(input), input);
        }
    }
}

#[test]
fn every_prefix_and_suffix_parses() {
    let builder = RouteTreeBuilder::new().with_token_replacement(true);
    for input in PATTERNS {
        for (at, _) in input.char_indices().chain([(input.len(), ' ')]) {
            let (prefix, suffix) = input.split_at(at);
            assert_lossless(&builder.parse(prefix), prefix);
            assert_lossless(&builder.parse(suffix), suffix);
        }
    }
}

#[test]
fn end_of_file_is_last_token() {
    for input in PATTERNS {
        let tree = crate::parse(input);
        let last = tree
            .syntax()
            .last_token()
            .expect("every tree has an end-of-file token");

        assert_eq!(last.kind(), crate::parser::SyntaxKind::EndOfFile);
        assert_eq!(last.text(), "");
        assert_eq!(tree.root().end_of_file(), Some(last));
    }
}
