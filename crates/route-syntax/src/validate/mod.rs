//! Semantic validation for the typed AST.
//!
//! Runs after parsing and appends to the lexical and structural diagnostics already
//! attached to tokens. Passes, in order:
//! - `~` at the start without a following `/`
//! - consecutive separators and consecutive parameters
//! - catch-all placement
//! - optional parameter placement inside complex segments
//! - parameter semantics, which also builds the parameter table
//! - empty replacement tokens

mod parameters;
mod structure;


use rowan::TextRange;

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticKind, Diagnostics};
use crate::parameters::ParameterTable;
use crate::parser::Root;
use crate::text::VirtualCharSequence;

pub(crate) struct Validation {
    pub diagnostics: Diagnostics,
    pub parameters: ParameterTable,
}

/// Collects `raw` (token diagnostics in document order), then runs every pass over `root`.
pub(crate) fn validate(
    text: &VirtualCharSequence,
    root: &Root,
    raw: Vec<Diagnostic>,
) -> Validation {
    let mut validator = Validator {
        text,
        diagnostics: raw.into_iter().collect(),
        parameters: ParameterTable::new(),
    };

    validator.check_start(root);
    validator.check_consecutive_separators(root);
    validator.check_consecutive_parameters(root);
    validator.check_catch_all_placement(root);
    validator.check_optional_placement(root);
    validator.collect_parameters(root);
    validator.check_replacements(root);

    Validation {
        diagnostics: validator.diagnostics,
        parameters: validator.parameters,
    }
}

struct Validator<'a> {
    text: &'a VirtualCharSequence,
    diagnostics: Diagnostics,
    parameters: ParameterTable,
}

impl Validator<'_> {
    /// Reports `kind` at a tree range, mapped back to the original source.
    fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        let range = self.text.text_to_source(range);
        self.diagnostics.report(kind, range)
    }
}
