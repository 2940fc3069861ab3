use std::fmt::Write;

use rowan::{NodeOrToken, TextRange, WalkEvent};

use crate::parameters::RouteParameter;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::tree::RouteTree;

/// Text projection of a [`RouteTree`]: the CST, or the parameter table.
///
/// Token text is printed verbatim, escapes included. Zero-width tokens inserted during
/// recovery print as `<missing>`. Spans, when enabled, are ranges in the original source.
pub struct TreePrinter<'t> {
    tree: &'t RouteTree,
    spans: bool,
    parameters: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t RouteTree) -> Self {
        TreePrinter {
            tree,
            spans: false,
            parameters: false,
        }
    }

    pub fn with_spans(self, spans: bool) -> Self {
        TreePrinter { spans, ..self }
    }

    pub fn only_parameters(self, parameters: bool) -> Self {
        TreePrinter { parameters, ..self }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out).expect("String write never fails");
        out
    }

    pub fn write_to(&self, out: &mut impl Write) -> std::fmt::Result {
        match self.parameters {
            true => self
                .tree
                .parameters()
                .iter()
                .try_for_each(|p| self.write_parameter(p, out)),
            false => self.write_cst(&self.tree.syntax(), out),
        }
    }

    fn write_cst(&self, root: &SyntaxNode, out: &mut impl Write) -> std::fmt::Result {
        let mut depth = 0;
        for event in root.preorder_with_tokens() {
            let element = match event {
                WalkEvent::Enter(element) => element,
                WalkEvent::Leave(NodeOrToken::Node(_)) => {
                    depth -= 1;
                    continue;
                }
                WalkEvent::Leave(NodeOrToken::Token(_)) => continue,
            };
            let span = self.cst_span(element.text_range());
            write!(out, "{:indent$}{:?}{span}", "", element.kind(), indent = depth * 2)?;
            match element {
                NodeOrToken::Node(_) => {
                    depth += 1;
                    writeln!(out)?;
                }
                NodeOrToken::Token(token) if is_missing(&token) => writeln!(out, " <missing>")?,
                NodeOrToken::Token(token) => writeln!(out, " {:?}", token.text())?,
            }
        }
        Ok(())
    }

    fn write_parameter(&self, parameter: &RouteParameter, out: &mut impl Write) -> std::fmt::Result {
        let span = Span(self.spans.then_some(parameter.range));
        write!(out, "{}{span}", parameter.name)?;

        if parameter.is_catch_all {
            out.write_str(" catch-all")?;
        }
        if !parameter.encode_slashes {
            out.write_str(" unencoded")?;
        }
        if parameter.is_optional {
            out.write_str(" optional")?;
        }
        if let Some(default) = &parameter.default_value {
            write!(out, " default {default:?}")?;
        }
        for policy in &parameter.policies {
            write!(out, " :{policy}")?;
        }
        writeln!(out)
    }

    fn cst_span(&self, range: TextRange) -> Span {
        Span(self.spans.then(|| self.tree.source_range(range)))
    }
}

/// Zero-width token the parser inserted in place of an absent delimiter.
fn is_missing(token: &SyntaxToken) -> bool {
    token.text().is_empty() && token.kind() != SyntaxKind::EndOfFile
}

/// ` [start..end]` in source coordinates, or nothing when spans are off.
struct Span(Option<TextRange>);

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(range) => write!(f, " [{}..{}]", u32::from(range.start()), u32::from(range.end())),
            None => Ok(()),
        }
    }
}

impl RouteTree {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
