use crate::{RouteTree, RouteTreeBuilder};

fn parse(pattern: &str) -> RouteTree {
    RouteTreeBuilder::new()
        .with_token_replacement(true)
        .parse(pattern)
}

#[test]
fn replacement_tokens() {
    let tree = parse("api/[controller]/[action]");
    assert!(tree.is_valid());

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          Text "api"
      SegmentSeparator
        Slash "/"
      Segment
        Replacement
          OpenBracket "["
          Text "controller"
          CloseBracket "]"
      SegmentSeparator
        Slash "/"
      Segment
        Replacement
          OpenBracket "["
          Text "action"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn escaped_brackets_stay_in_literal() {
    let tree = parse("[[x]]/a[[b]]");
    assert!(tree.is_valid());

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          Text "[[x]]"
      SegmentSeparator
        Slash "/"
      Segment
        Literal
          Text "a[[b]]"
      EndOfFile ""
    "#);
}

#[test]
fn replacement_next_to_parameter() {
    let tree = parse("[action]-{id}");
    assert!(tree.is_valid());

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Replacement
          OpenBracket "["
          Text "action"
          CloseBracket "]"
        Literal
          Text "-"
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "id"
          CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn empty_replacement() {
    let tree = parse("[]");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..2: An empty replacement token ('[]') is not allowed.");
}

#[test]
fn unescaped_bracket_inside_replacement() {
    let tree = parse("[a[b]");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Replacement
          OpenBracket "["
          Text "a[b"
          CloseBracket "]"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 2..3: An unescaped '[' token is not allowed inside of a replacement token. Use '[[' to escape.");
}

#[test]
fn stray_close_bracket() {
    let tree = parse("a]b");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..2: Token delimiters ('[', ']') are imbalanced.");
}

#[test]
fn replacement_value_is_unescaped() {
    let tree = parse("[a]]]]b]");
    let segment = tree.root().segments().next().unwrap();
    let crate::parser::SegmentPart::Replacement(replacement) = segment.parts().next().unwrap()
    else {
        panic!("expected a replacement");
    };

    assert!(tree.is_valid());
    assert_eq!(replacement.name(), "a]]]]b");
    assert_eq!(replacement.value(), "a]]b");
}
