use crate::RouteTree;

#[test]
fn escaped_braces_stay_in_literal() {
    let res = RouteTree::expect_valid_cst("a{{b}}c");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "a{{b}}c"
      EndOfFile ""
    "#);
}

#[test]
fn literal_starting_with_escaped_brace() {
    let res = RouteTree::expect_valid_cst("{{a}}");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "{{a}}"
      EndOfFile ""
    "#);
}

#[test]
fn literal_value_is_unescaped() {
    let tree = RouteTree::expect_valid("{{a}}b");
    let segment = tree.root().segments().next().unwrap();
    let crate::parser::SegmentPart::Literal(literal) = segment.parts().next().unwrap() else {
        panic!("expected a literal");
    };

    assert_eq!(literal.text(), "{{a}}b");
    assert_eq!(literal.value(), "{a}b");
}

#[test]
fn literal_around_parameter() {
    let res = RouteTree::expect_valid_cst("v{version}.json");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "v"
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "version"
          CloseBrace "}"
        Literal
          Text ".json"
      EndOfFile ""
    "#);
}

#[test]
fn non_ascii_literal() {
    let tree = RouteTree::expect_valid("café/ü{id}");

    insta::assert_snapshot!(tree.dump_cst_with_spans(), @r#"
    CompilationUnit [0..12]
      Segment [0..5]
        Literal [0..5]
          Text [0..5] "café"
      SegmentSeparator [5..6]
        Slash [5..6] "/"
      Segment [6..12]
        Literal [6..8]
          Text [6..8] "ü"
        Parameter [8..12]
          OpenBrace [8..9] "{"
          NameParameterPart [9..11]
            Text [9..11] "id"
          CloseBrace [11..12] "}"
      EndOfFile [12..12] ""
    "#);
}

#[test]
fn brackets_are_literal_without_token_replacement() {
    let res = RouteTree::expect_valid_cst("[controller]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Segment
        Literal
          Text "[controller]"
      EndOfFile ""
    "#);
}
