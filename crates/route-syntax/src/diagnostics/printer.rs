//! Rendering of route diagnostics, plain or as annotated source snippets.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::{Diagnostic, DiagnosticKind, Diagnostics};

/// Without a source, one `error at S..E: message` line per diagnostic.
/// With a source, annotated snippets separated by blank lines.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    color: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        DiagnosticsPrinter {
            diagnostics,
            source: None,
            path: None,
            color: false,
        }
    }

    pub fn with_source(self, source: &'s str) -> Self {
        DiagnosticsPrinter {
            source: Some(source),
            ..self
        }
    }

    /// Label shown in the snippet header, usually a file name.
    pub fn with_path(self, path: &'s str) -> Self {
        DiagnosticsPrinter {
            path: Some(path),
            ..self
        }
    }

    pub fn with_color(self, color: bool) -> Self {
        DiagnosticsPrinter { color, ..self }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out).expect("String write never fails");
        out
    }

    pub fn write_to(&self, out: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.diagnostics.iter().try_for_each(|d| writeln!(out, "{d}"));
        };

        let renderer = match self.color {
            true => Renderer::styled(),
            false => Renderer::plain(),
        };

        let mut first = true;
        for diag in self.diagnostics {
            if !first {
                out.write_char('\n')?;
            }
            first = false;
            let report = snippet_report(diag, source, self.path);
            write!(out, "{}", renderer.render(&report))?;
        }
        Ok(())
    }
}

fn snippet_report<'a>(diag: &'a Diagnostic, source: &'a str, path: Option<&'a str>) -> Vec<Group<'a>> {
    let span = visible_span(diag.range, source.len());

    let mut primary = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(span.clone()));
    if let Some(path) = path {
        primary = primary.path(path);
    }
    let mut report = vec![Level::ERROR.primary_title(diag.message.as_str()).element(primary)];

    if let Some(doubled) = doubling_fix(diag, source) {
        let patched = Snippet::source(source)
            .line_start(1)
            .patch(Patch::new(span, doubled));
        report.push(Level::HELP.secondary_title("escape it by doubling").element(patched));
    }
    report
}

/// Suggested replacement for a lone unescaped delimiter.
fn doubling_fix(diag: &Diagnostic, source: &str) -> Option<&'static str> {
    let fixable = matches!(
        diag.kind,
        DiagnosticKind::UnescapedBrace
            | DiagnosticKind::MismatchedParameter
            | DiagnosticKind::UnescapedReplacementBracket
            | DiagnosticKind::ImbalancedReplacementDelimiters
    );
    if !fixable || diag.range.is_empty() {
        return None;
    }
    match source.get(Range::<usize>::from(diag.range))? {
        "{" => Some("{{"),
        "}" => Some("}}"),
        "[" => Some("[["),
        "]" => Some("]]"),
        _ => None,
    }
}

/// Clamps to the source; a zero-width range points at the following char.
fn visible_span(range: TextRange, len: usize) -> Range<usize> {
    let start = usize::from(range.start()).min(len);
    let end = usize::from(range.end()).min(len);
    match start == end {
        true => start..(start + 1).min(len),
        false => start..end,
    }
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
