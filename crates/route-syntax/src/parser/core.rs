//! Parser state machine and low-level operations.

use rowan::{GreenNode, GreenNodeBuilder};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Lexer, Token};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::text::VirtualCharSequence;

/// Green tree plus every diagnostic raised while building it, in document order.
#[derive(Debug)]
pub struct ParseResult {
    pub green: GreenNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Holds exactly one lookahead token. Longer scans start by rewinding the lexer to the
/// lookahead's start, then the lookahead is refreshed from wherever the scan stopped.
pub struct Parser<'t> {
    pub(super) lexer: Lexer<'t>,
    pub(super) current: Token,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Vec<Diagnostic>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
}

impl<'t> Parser<'t> {
    pub fn new(text: &'t VirtualCharSequence) -> Self {
        Self::with_lexer(Lexer::new(text))
    }

    pub fn with_lexer(mut lexer: Lexer<'t>) -> Self {
        let current = lexer.scan_next_token();
        Self {
            lexer,
            current,
            builder: GreenNodeBuilder::new(),
            diagnostics: Vec::new(),
            debug_fuel: std::cell::Cell::new(256),
        }
    }

    pub fn parse(mut self) -> ParseResult {
        self.parse_root();
        self.finish()
    }

    fn finish(self) -> ParseResult {
        ParseResult {
            green: self.builder.finish(),
            diagnostics: self.diagnostics,
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.ensure_progress();
        self.current.kind
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn eof(&self) -> bool {
        self.current.kind == SyntaxKind::EndOfFile
    }

    /// Lookahead is a `}` that closes the parameter rather than escaping another brace.
    pub(super) fn at_parameter_close(&self) -> bool {
        self.currently_is(SyntaxKind::CloseBrace)
            && self.lexer.is_unescaped_close_brace(self.current.start)
    }

    /// Lookahead is a `?` that marks the parameter optional.
    pub(super) fn at_optional_marker(&self) -> bool {
        self.currently_is(SyntaxKind::QuestionMark)
            && self.lexer.is_closing_question_mark(self.current.start)
    }

    /// Lookahead is a `]` that is not the first half of a `]]` escape.
    pub(super) fn at_replacement_close(&self) -> bool {
        self.currently_is(SyntaxKind::CloseBracket) && !self.next_char_is(']')
    }

    /// The char right after the lookahead token equals `c`.
    pub(super) fn next_char_is(&self, c: char) -> bool {
        self.lexer.peek_char() == Some(c)
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Emits the lookahead into the tree and scans the next one.
    pub(super) fn bump(&mut self) {
        let token = self.take();
        self.push_token(token);
    }

    /// Removes the lookahead without emitting it. The caller either pushes it later or
    /// rewinds to its start.
    pub(super) fn take(&mut self) -> Token {
        self.reset_debug_fuel();
        let next = self.lexer.scan_next_token();
        std::mem::replace(&mut self.current, next)
    }

    pub(super) fn push_token(&mut self, token: Token) {
        let text = self.lexer.text().slice_text(token.range());
        self.builder.token(token.kind.into(), text);
        self.diagnostics.extend(token.diagnostics);
    }

    /// Moves the lexer back to `position` and rescans the lookahead from there.
    pub(super) fn restart_at(&mut self, position: usize) {
        self.reset_debug_fuel();
        self.lexer.reset_to(position);
        self.current = self.lexer.scan_next_token();
    }

    /// Runs a longer scan from the lookahead's start. On success the scanned token is
    /// emitted; either way the lookahead is refreshed.
    pub(super) fn bump_scan(&mut self, scan: impl FnOnce(&mut Lexer<'t>) -> Option<Token>) -> bool {
        self.reset_debug_fuel();
        let start = self.current.start;
        self.lexer.reset_to(start);
        let scanned = scan(&mut self.lexer);
        self.current = self.lexer.scan_next_token();
        match scanned {
            Some(token) => {
                self.assert_scanned(start, &token);
                self.push_token(token);
                true
            }
            None => false,
        }
    }

    /// Runs `scan`, falling back to a plain bump when it consumes nothing.
    pub(super) fn bump_scan_or_char(&mut self, scan: impl FnOnce(&mut Lexer<'t>) -> Option<Token>) {
        if !self.bump_scan(scan) && !self.eof() {
            self.bump();
        }
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Synthesizes a zero-width `kind` token and reports `error` at the lookahead's start,
    /// which is the end of the input at EOF.
    pub(super) fn missing(&mut self, kind: SyntaxKind, error: DiagnosticKind) {
        self.builder.token(kind.into(), "");
        let start = self.current.start;
        let range = self.lexer.text().source_range(start..start);
        self.diagnostics
            .push(Diagnostic::with_default_message(error, range));
    }
}
