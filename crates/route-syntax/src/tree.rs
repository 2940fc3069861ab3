use rowan::{GreenNode, TextRange};

use crate::diagnostics::Diagnostics;
use crate::parameters::ParameterTable;
use crate::parser::{self, Root, SyntaxNode};
use crate::text::{CharConverter, VirtualCharSequence};
use crate::validate;

pub struct RouteTreeConfig {
    pub token_replacement: bool,
}

/// Configures and runs the parse + validate pipeline.
pub struct RouteTreeBuilder {
    config: RouteTreeConfig,
}

impl Default for RouteTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTreeBuilder {
    pub fn new() -> Self {
        let config = RouteTreeConfig {
            token_replacement: false,
        };

        Self { config }
    }

    /// Recognize MVC replacement tokens such as `[controller]`.
    pub fn with_token_replacement(mut self, enabled: bool) -> Self {
        self.config.token_replacement = enabled;
        self
    }

    pub fn parse(&self, pattern: &str) -> RouteTree {
        self.parse_chars(VirtualCharSequence::from_text(pattern))
    }

    /// Parses an already converted sequence. Never fails.
    pub fn parse_chars(&self, text: VirtualCharSequence) -> RouteTree {
        let parser::ParseResult { green, diagnostics } =
            parser::parse(&text, self.config.token_replacement);

        let root = root_of(&green);
        let validation = validate::validate(&text, &root, diagnostics);

        RouteTree {
            text,
            green,
            diagnostics: validation.diagnostics,
            parameters: validation.parameters,
        }
    }

    /// Converts `input` with `converter` and parses the result. `None` only when the
    /// conversion fails.
    pub fn try_parse(&self, converter: &impl CharConverter, input: &str) -> Option<RouteTree> {
        let text = converter.convert(input).ok()?;
        Some(self.parse_chars(text))
    }
}

fn root_of(green: &GreenNode) -> Root {
    Root::cast(SyntaxNode::new_root(green.clone()))
        .expect("parser always produces a CompilationUnit")
}

/// Immutable result of parsing one route pattern.
///
/// Holds the green tree rather than a `SyntaxNode` so the tree can cross threads; typed
/// views are created on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTree {
    text: VirtualCharSequence,
    green: GreenNode,
    diagnostics: Diagnostics,
    parameters: ParameterTable,
}

impl RouteTree {
    /// Decoded pattern text the tree was built over.
    pub fn text(&self) -> &VirtualCharSequence {
        &self.text
    }

    pub fn as_cst(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> Root {
        root_of(&self.green)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn parameters(&self) -> &ParameterTable {
        &self.parameters
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Maps a range of the tree (decoded text) back to the original source.
    pub fn source_range(&self, range: TextRange) -> TextRange {
        self.text.text_to_source(range)
    }
}
