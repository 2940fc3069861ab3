use crate::RouteTree;

#[test]
fn empty_pattern() {
    let res = RouteTree::expect_valid_cst("");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      EndOfFile ""
    "#);
}

#[test]
fn literal_segments() {
    let res = RouteTree::expect_valid_cst("hello/world");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "hello"
      SegmentSeparator
        Slash "/"
      Segment
        Literal
          Text "world"
      EndOfFile ""
    "#);
}

#[test]
fn leading_separator() {
    let res = RouteTree::expect_valid_cst("/a");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      SegmentSeparator
        Slash "/"
      Segment
        Literal
          Text "a"
      EndOfFile ""
    "#);
}

#[test]
fn trailing_separator() {
    let res = RouteTree::expect_valid_cst("a/");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "a"
      SegmentSeparator
        Slash "/"
      EndOfFile ""
    "#);
}

#[test]
fn app_relative_prefix() {
    let res = RouteTree::expect_valid_cst("~/a");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "~"
      SegmentSeparator
        Slash "/"
      Segment
        Literal
          Text "a"
      EndOfFile ""
    "#);
}

#[test]
fn optional_separator_before_trailing_optional() {
    let res = RouteTree::expect_valid_cst("{name}.{ext?}");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "name"
          CloseBrace "}"
        OptionalSeparator
          Dot "."
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "ext"
          OptionalParameterPart
            QuestionMark "?"
          CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn literal_then_optional_separator() {
    let res = RouteTree::expect_valid_cst("file.{ext?}");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "file"
        OptionalSeparator
          Dot "."
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "ext"
          OptionalParameterPart
            QuestionMark "?"
          CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn dot_before_required_parameter_is_literal() {
    let res = RouteTree::expect_valid_cst("{name}.{ext}");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "name"
          CloseBrace "}"
        Literal
          Text "."
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "ext"
          CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn spans_are_source_ranges() {
    let tree = RouteTree::expect_valid("a/{b}");

    insta::assert_snapshot!(tree.dump_cst_with_spans(), @r#"
    CompilationUnit [0..5]
      Segment [0..1]
        Literal [0..1]
          Text [0..1] "a"
      SegmentSeparator [1..2]
        Slash [1..2] "/"
      Segment [2..5]
        Parameter [2..5]
          OpenBrace [2..3] "{"
          NameParameterPart [3..4]
            Text [3..4] "b"
          CloseBrace [4..5] "}"
      EndOfFile [5..5] ""
    "#);
}
