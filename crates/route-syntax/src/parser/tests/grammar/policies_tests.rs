use crate::RouteTree;

#[test]
fn policy_with_arguments() {
    let tree = RouteTree::expect_valid("{id:foo(wee)}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "id"
          PolicyParameterPart
            Colon ":"
            Text "foo"
            PolicyWithArgumentsPart
              OpenParen "("
              Text "wee"
              CloseParen ")"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @"id [0..13] :foo(wee)");
}

#[test]
fn several_policies() {
    let tree = RouteTree::expect_valid("{id:int:min(1)}");

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
          PolicyParameterPart
            Colon ":"
            Text "min"
            PolicyWithArgumentsPart
              OpenParen "("
              Text "1"
              CloseParen ")"
          CloseBrace "}"
      EndOfFile ""
    "#);
    assert_eq!(tree.parameters().get("id").unwrap().policies, ["int", "min(1)"]);
}

#[test]
fn regex_arguments_keep_escaped_braces() {
    let tree = RouteTree::expect_valid(r"{a:regex(^\d{{3}}$)}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          PolicyParameterPart
            Colon ":"
            Text "regex"
            PolicyWithArgumentsPart
              OpenParen "("
              Text "^\\d{{3}}$"
              CloseParen ")"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @r"a [0..20] :regex(^\d{3}$)");
}

#[test]
fn escaped_close_paren_in_arguments() {
    let tree = RouteTree::expect_valid("{a:f(x))y)}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "a"
          PolicyParameterPart
            Colon ":"
            Text "f"
            PolicyWithArgumentsPart
              OpenParen "("
              Text "x))y"
              CloseParen ")"
          CloseBrace "}"
      EndOfFile ""
    "#);
    assert_eq!(tree.parameters().get("a").unwrap().policies, ["f(x)y)"]);
}

#[test]
fn policy_then_default_value() {
    let tree = RouteTree::expect_valid("{count:int=10}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          NameParameterPart
            Text "count"
          PolicyParameterPart
            Colon ":"
            Text "int"
          DefaultValueParameterPart
            Equals "="
            Text "10"
          CloseBrace "}"
      EndOfFile ""
    "#);
    insta::assert_snapshot!(tree.dump_parameters(), @r#"count [0..14] default "10" :int"#);
}
