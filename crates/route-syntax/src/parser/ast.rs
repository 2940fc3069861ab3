//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.
//!
//! Text accessors come in two flavors: `text()` is the verbatim source slice with escapes
//! left in place, `value()` is the unescaped string the router would see.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            /// Range in the decoded pattern text.
            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

ast_node!(Root, CompilationUnit);
ast_node!(Segment, Segment);
ast_node!(SegmentSeparator, SegmentSeparator);
ast_node!(Literal, Literal);
ast_node!(Replacement, Replacement);
ast_node!(Parameter, Parameter);
ast_node!(OptionalSeparator, OptionalSeparator);
ast_node!(CatchAllPart, CatchAllPart);
ast_node!(NameParameterPart, NameParameterPart);
ast_node!(PolicyParameterPart, PolicyParameterPart);
ast_node!(PolicyWithArgumentsPart, PolicyWithArgumentsPart);
ast_node!(OptionalParameterPart, OptionalParameterPart);
ast_node!(DefaultValueParameterPart, DefaultValueParameterPart);

/// Direct child of the compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RootPart {
    Segment(Segment),
    Separator(SegmentSeparator),
}

/// Part of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentPart {
    Parameter(Parameter),
    Literal(Literal),
    Replacement(Replacement),
    OptionalSeparator(OptionalSeparator),
}

/// Part of a parameter between its braces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterPart {
    CatchAll(CatchAllPart),
    Name(NameParameterPart),
    Policy(PolicyParameterPart),
    Optional(OptionalParameterPart),
    DefaultValue(DefaultValueParameterPart),
}

impl RootPart {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Segment => Segment::cast(node).map(RootPart::Segment),
            SyntaxKind::SegmentSeparator => SegmentSeparator::cast(node).map(RootPart::Separator),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            RootPart::Segment(n) => n.as_cst(),
            RootPart::Separator(n) => n.as_cst(),
        }
    }
}

impl SegmentPart {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Parameter => Parameter::cast(node).map(SegmentPart::Parameter),
            SyntaxKind::Literal => Literal::cast(node).map(SegmentPart::Literal),
            SyntaxKind::Replacement => Replacement::cast(node).map(SegmentPart::Replacement),
            SyntaxKind::OptionalSeparator => {
                OptionalSeparator::cast(node).map(SegmentPart::OptionalSeparator)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            SegmentPart::Parameter(n) => n.as_cst(),
            SegmentPart::Literal(n) => n.as_cst(),
            SegmentPart::Replacement(n) => n.as_cst(),
            SegmentPart::OptionalSeparator(n) => n.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }

    /// Verbatim source text of the part.
    pub fn text(&self) -> String {
        self.as_cst().text().to_string()
    }
}

impl ParameterPart {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CatchAllPart => CatchAllPart::cast(node).map(ParameterPart::CatchAll),
            SyntaxKind::NameParameterPart => NameParameterPart::cast(node).map(ParameterPart::Name),
            SyntaxKind::PolicyParameterPart => {
                PolicyParameterPart::cast(node).map(ParameterPart::Policy)
            }
            SyntaxKind::OptionalParameterPart => {
                OptionalParameterPart::cast(node).map(ParameterPart::Optional)
            }
            SyntaxKind::DefaultValueParameterPart => {
                DefaultValueParameterPart::cast(node).map(ParameterPart::DefaultValue)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ParameterPart::CatchAll(n) => n.as_cst(),
            ParameterPart::Name(n) => n.as_cst(),
            ParameterPart::Policy(n) => n.as_cst(),
            ParameterPart::Optional(n) => n.as_cst(),
            ParameterPart::DefaultValue(n) => n.as_cst(),
        }
    }
}

/// Replaces each doubled occurrence of a char in `escaped` with a single one.
pub(crate) fn unescape(text: &str, escaped: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if escaped.contains(&c) && chars.peek() == Some(&c) {
            chars.next();
        }
    }
    out
}

const BRACES: &[char] = &['{', '}'];

/// First direct token child of `kind` that was actually present in the source.
fn present_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind && !t.text().is_empty())
}

/// Concatenated text of the direct `Text` token children.
fn text_tokens(node: &SyntaxNode) -> String {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| t.kind() == SyntaxKind::Text)
        .map(|t| t.text().to_string())
        .collect()
}

impl Root {
    pub fn parts(&self) -> impl Iterator<Item = RootPart> + '_ {
        self.0.children().filter_map(RootPart::cast)
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.0.children().filter_map(Segment::cast)
    }

    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.segments().flat_map(|s| s.parameters().collect::<Vec<_>>())
    }

    pub fn end_of_file(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::EndOfFile)
    }
}

impl Segment {
    pub fn parts(&self) -> impl Iterator<Item = SegmentPart> + '_ {
        self.0.children().filter_map(SegmentPart::cast)
    }

    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }

    /// Verbatim source text of the segment.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl SegmentSeparator {
    pub fn slash(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::Slash)
    }
}

impl Literal {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// Literal with `{{` and `}}` collapsed.
    pub fn value(&self) -> String {
        unescape(&self.text(), BRACES)
    }
}

impl OptionalSeparator {
    pub fn dot(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::Dot)
    }
}

impl Replacement {
    pub fn open_bracket(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::OpenBracket)
    }

    pub fn close_bracket(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::CloseBracket)
    }

    pub fn is_closed(&self) -> bool {
        self.close_bracket().is_some()
    }

    /// Verbatim token name between the brackets.
    pub fn name(&self) -> String {
        text_tokens(&self.0)
    }

    /// Token name with `[[` and `]]` collapsed.
    pub fn value(&self) -> String {
        unescape(&self.name(), &['[', ']'])
    }
}

impl Parameter {
    pub fn open_brace(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::OpenBrace)
    }

    /// `None` when the closing brace was synthesized during recovery.
    pub fn close_brace(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::CloseBrace)
    }

    pub fn parts(&self) -> impl Iterator<Item = ParameterPart> + '_ {
        self.0.children().filter_map(ParameterPart::cast)
    }

    pub fn catch_all(&self) -> Option<CatchAllPart> {
        self.0.children().find_map(CatchAllPart::cast)
    }

    pub fn name(&self) -> Option<NameParameterPart> {
        self.0.children().find_map(NameParameterPart::cast)
    }

    /// Name text, empty when the parameter has no name part.
    pub fn name_text(&self) -> String {
        self.name().map(|n| n.text()).unwrap_or_default()
    }

    pub fn policies(&self) -> impl Iterator<Item = PolicyParameterPart> + '_ {
        self.0.children().filter_map(PolicyParameterPart::cast)
    }

    pub fn optional(&self) -> Option<OptionalParameterPart> {
        self.0.children().find_map(OptionalParameterPart::cast)
    }

    pub fn default_value(&self) -> Option<DefaultValueParameterPart> {
        self.0.children().find_map(DefaultValueParameterPart::cast)
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all().is_some()
    }

    pub fn is_optional(&self) -> bool {
        self.optional().is_some()
    }
}

impl CatchAllPart {
    /// `**` keeps slashes in the value unencoded.
    pub fn is_unescaped(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter(|it| it.kind() == SyntaxKind::Asterisk)
            .count()
            > 1
    }
}

impl NameParameterPart {
    /// Verbatim name. Names are never unescaped; escapes in a name are an error.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl PolicyParameterPart {
    pub fn colon(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::Colon)
    }

    pub fn arguments(&self) -> impl Iterator<Item = PolicyWithArgumentsPart> + '_ {
        self.0.children().filter_map(PolicyWithArgumentsPart::cast)
    }

    /// Policy reference after the colon, e.g. `regex(^\d+$)` or `min(1)`.
    ///
    /// Braces are unescaped throughout, parentheses inside argument lists.
    pub fn value(&self) -> String {
        let mut out = String::new();
        for child in self.0.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::Colon => {}
                rowan::NodeOrToken::Token(t) => out.push_str(&unescape(t.text(), BRACES)),
                rowan::NodeOrToken::Node(n) => {
                    if let Some(args) = PolicyWithArgumentsPart::cast(n) {
                        out.push('(');
                        out.push_str(&args.value());
                        out.push(')');
                    }
                }
            }
        }
        out
    }
}

impl PolicyWithArgumentsPart {
    pub fn close_paren(&self) -> Option<SyntaxToken> {
        present_token(&self.0, SyntaxKind::CloseParen)
    }

    pub fn is_closed(&self) -> bool {
        self.close_paren().is_some()
    }

    /// Verbatim argument text between the parentheses.
    pub fn text(&self) -> String {
        text_tokens(&self.0)
    }

    pub fn value(&self) -> String {
        unescape(&self.text(), &['{', '}', '(', ')'])
    }
}

impl DefaultValueParameterPart {
    /// Verbatim text after `=`.
    pub fn text(&self) -> String {
        text_tokens(&self.0)
    }

    pub fn value(&self) -> String {
        unescape(&self.text(), BRACES)
    }
}
