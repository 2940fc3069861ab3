//! Parser infrastructure for route patterns.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - On-demand lexing: the parser asks the lexer for one token at a time and picks the scan
//!   (`try_scan_literal`, `try_scan_parameter_name`, ...) from grammar context
//! - Zero-copy tokens: tokens carry char ranges, text is sliced only when building tree nodes
//! - Missing tokens: an absent `}`, `)` or `]` is inserted zero-width so every parameter,
//!   argument list, and replacement keeps its closing slot
//!
//! # Recovery Strategy
//!
//! The parser is resilient: every input produces a tree whose tokens reproduce the input
//! verbatim. Lexical problems ride along on the tokens that contain them, structural ones
//! on missing tokens. Semantic checks run later, in `validate`.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    CatchAllPart, DefaultValueParameterPart, Literal, NameParameterPart, OptionalParameterPart,
    OptionalSeparator, Parameter, ParameterPart, PolicyParameterPart, PolicyWithArgumentsPart,
    Replacement, Root, RootPart, Segment, SegmentPart, SegmentSeparator,
};

pub use self::core::{ParseResult, Parser};

use crate::text::VirtualCharSequence;
use lexer::Lexer;

/// Builds the raw tree over `text`. Never fails.
pub fn parse(text: &VirtualCharSequence, token_replacement: bool) -> ParseResult {
    let lexer = Lexer::new(text).with_token_replacement(token_replacement);
    Parser::with_lexer(lexer).parse()
}
