mod message;
mod printer;


use indexmap::IndexSet;
use rowan::TextRange;

pub use message::{Diagnostic, DiagnosticKind};
pub(crate) use message::serialize_range;
pub use printer::DiagnosticsPrinter;

/// Ordered, de-duplicated diagnostics.
///
/// Insertion order is preserved; reporting a diagnostic whose message and range equal an
/// earlier one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: IndexSet<Diagnostic>,
}

/// Pending diagnostic; nothing is recorded until [`emit`](Self::emit).
#[must_use = "call .emit() to record the diagnostic"]
pub struct DiagnosticBuilder<'a> {
    target: &'a mut Diagnostics,
    kind: DiagnosticKind,
    range: TextRange,
    details: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Starts a diagnostic of `kind` at `range` (source coordinates).
    ///
    /// Uses the kind's fallback message unless `.arg()` supplies detail.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            target: self,
            kind,
            range,
            details: Vec::new(),
        }
    }

    /// Returns `false` if an identical diagnostic was already present.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        self.entries.insert(diagnostic)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every diagnostic is an error; there are no warnings in route patterns.
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.iter().any(|d| d.kind == kind)
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.entries.extend(other);
    }

    /// Annotated, uncolored rendering against `source`.
    pub fn render(&self, source: &str) -> String {
        self.printer().with_source(source).render()
    }
}

impl DiagnosticBuilder<'_> {
    /// Fills the next placeholder of the kind's detailed message.
    pub fn arg(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn emit(self) {
        let details: Vec<&str> = self.details.iter().map(String::as_str).collect();
        let message = self.kind.message(&details);
        self.target
            .entries
            .insert(Diagnostic::new(self.kind, self.range, message));
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = indexmap::set::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Diagnostics {
            entries: iter.into_iter().collect(),
        }
    }
}
