use crate::RouteTree;

#[test]
fn stray_close_brace_in_literal() {
    let tree = crate::parse("a}b}c");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          Text "a}b}c"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..2: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.");
}

#[test]
fn question_mark_in_literal() {
    let res = RouteTree::expect_invalid("a?b");

    insta::assert_snapshot!(res, @"error at 0..3: The literal section 'a?b' is invalid. Literal sections cannot contain the '?' character.");
}

#[test]
fn slash_inside_parameter_name() {
    let tree = crate::parse("{a/b}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a/b"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 2..3: The route parameter name 'a/b' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.");
}

#[test]
fn question_mark_inside_parameter_name() {
    let res = RouteTree::expect_invalid("{a?b}");

    insta::assert_snapshot!(res, @"error at 2..3: The route parameter name 'a?b' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.");
}

#[test]
fn empty_parameter() {
    let res = RouteTree::expect_invalid("{}");

    insta::assert_snapshot!(res, @"error at 0..2: The route parameter name '' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.");
}

#[test]
fn catch_all_must_be_last() {
    let res = RouteTree::expect_invalid("{*a}/{b}");

    insta::assert_snapshot!(res, @"error at 0..4: A catch-all parameter can only appear as the last segment of the route template.");
}

#[test]
fn consecutive_parameters() {
    let tree = crate::parse("{a}{b}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          CloseBrace "}"
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "b"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 3..6: A path segment cannot contain two consecutive parameters. They must be separated by a '/' or by a literal string.");
}

#[test]
fn repeated_parameter_ignores_case() {
    let tree = crate::parse("{a}/{A}");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 4..7: The route parameter name 'A' appears more than one time in the route template.");
    insta::assert_snapshot!(tree.dump_parameters(), @"a [0..3]");
}

#[test]
fn optional_with_default_value() {
    let res = RouteTree::expect_invalid("{a=b?}");

    insta::assert_snapshot!(res, @"error at 0..6: An optional parameter cannot have default value.");
}

#[test]
fn optional_catch_all() {
    let res = RouteTree::expect_invalid("{*a?}");

    insta::assert_snapshot!(res, @"error at 0..5: A catch-all parameter cannot be marked optional.");
}
