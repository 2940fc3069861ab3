//! Lossless parser and validator for ASP.NET-style route patterns.
//!
//! Every pattern parses into a [`RouteTree`]: a concrete syntax tree whose tokens reproduce
//! the input verbatim, the diagnostics found along the way, and the table of parameters the
//! router would register. Diagnostic wording matches the runtime routing library.
//!
//! # Example
//!
//! ```
//! let tree = route_syntax::parse("products/{id:int}/{*rest}");
//! assert!(tree.is_valid());
//!
//! let id = tree.parameters().get("ID").expect("names are case-insensitive");
//! assert_eq!(id.policies, ["int"]);
//!
//! let broken = route_syntax::parse("{a}{b}");
//! eprintln!("{}", broken.diagnostics().render("{a}{b}"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parameters;
pub mod parser;
pub mod text;

mod dump;
mod printer;
mod tree;
mod validate;


pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parameters::{ParameterTable, RouteParameter};
pub use printer::TreePrinter;
pub use text::{CharConverter, ConvertError, PlainText, StringLiteral, VirtualChar, VirtualCharSequence};
pub use tree::{RouteTree, RouteTreeBuilder, RouteTreeConfig};

/// Parses `pattern` as plain text with default options. Never fails.
pub fn parse(pattern: &str) -> RouteTree {
    RouteTreeBuilder::new().parse(pattern)
}
