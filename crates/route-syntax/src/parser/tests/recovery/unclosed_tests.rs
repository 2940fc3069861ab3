use crate::{RouteTree, RouteTreeBuilder};

#[test]
fn missing_close_brace() {
    let tree = crate::parse("{id");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "id"
          CloseBrace <missing>
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 3..3: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.");
}

#[test]
fn lone_open_brace() {
    let tree = crate::parse("{");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          CloseBrace <missing>
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @r"
    error at 1..1: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.
    error at 0..1: The route parameter name '' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.
    ");
}

#[test]
fn missing_close_paren() {
    let tree = crate::parse("{a:foo(bar}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          PolicyParameterPart
            Colon ":"
            Text "foo"
            PolicyWithArgumentsPart
              OpenParen "("
              Text "bar"
              CloseParen <missing>
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 10..10: The policy argument list is not closed. Check that each '(' character has a matching ')' character.");
}

#[test]
fn missing_close_bracket() {
    let tree = RouteTreeBuilder::new()
        .with_token_replacement(true)
        .parse("[a/b");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Replacement
          OpenBracket "["
          Text "a"
          CloseBracket <missing>
      SegmentSeparator
        Slash "/"
      Segment
        Literal
          Text "b"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 2..2: A replacement token is not closed.");
}

#[test]
fn open_brace_inside_parameter_name() {
    let tree = crate::parse("a{foob{bar}c");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          Text "a"
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "foob{bar"
          CloseBrace "}"
        Literal
          Text "c"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 6..7: In a route parameter, '{' and '}' must be escaped with '{{' and '}}'.");
}

#[test]
fn escaped_close_brace_runs_to_end() {
    let res = RouteTree::expect_invalid("{a}}");

    insta::assert_snapshot!(res, @r"
    error at 2..3: The route parameter name 'a}}' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.
    error at 4..4: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.
    ");
}
