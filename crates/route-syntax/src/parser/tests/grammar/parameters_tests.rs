use crate::RouteTree;

#[test]
fn simple_parameter() {
    let tree = RouteTree::expect_valid("{id}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "id"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @"id [0..4]");
}

#[test]
fn catch_all() {
    let tree = RouteTree::expect_valid("files/{*path}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          Text "files"
      SegmentSeparator
        Slash "/"
      Segment
        Parameter
          OpenBrace "{"
          CatchAllPart
            Asterisk "*"
          NameParameterPart
            Text "path"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @"path [6..13] catch-all");
}

#[test]
fn unescaped_catch_all() {
    let tree = RouteTree::expect_valid("{**path}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          CatchAllPart
            Asterisk "*"
            Asterisk "*"
          NameParameterPart
            Text "path"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @"path [0..8] catch-all unencoded");
}

#[test]
fn default_value() {
    let tree = RouteTree::expect_valid("{page=1}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "page"
          DefaultValueParameterPart
            Equals "="
            Text "1"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @r#"page [0..8] default "1""#);
}

#[test]
fn empty_default_value() {
    let tree = RouteTree::expect_valid("{a=}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          DefaultValueParameterPart
            Equals "="
          CloseBrace "}"
      EndOfFile ""
    "#);
    assert_eq!(
        tree.parameters().get("a").unwrap().default_value.as_deref(),
        Some("")
    );
}

#[test]
fn default_value_with_escaped_braces() {
    let tree = RouteTree::expect_valid("{a={{x}}}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          DefaultValueParameterPart
            Equals "="
            Text "{{x}}"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @r#"a [0..9] default "{x}""#);
}

#[test]
fn optional_with_policy() {
    let tree = RouteTree::expect_valid("{id:int?}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "id"
          PolicyParameterPart
            Colon ":"
            Text "int"
          OptionalParameterPart
            QuestionMark "?"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @"id [0..9] optional :int");
}

#[test]
fn conventional_route() {
    let tree = RouteTree::expect_valid("{controller=Home}/{action=Index}/{id?}");

    insta::assert_snapshot!(tree.dump_parameters(), @r#"
    controller [0..17] default "Home"
    action [18..32] default "Index"
    id [33..38] optional
    "#);
}

#[test]
fn names_are_case_insensitive() {
    let tree = RouteTree::expect_valid("{Id}");
    let parameter = tree.parameters().get("ID").unwrap();

    assert_eq!(parameter.name, "Id");
    assert!(tree.parameters().contains("id"));
}
