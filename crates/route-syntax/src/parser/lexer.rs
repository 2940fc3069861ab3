//! On-demand lexer for route patterns.
//!
//! The grammar is too context-sensitive for a separate tokenization pass: the same `}`
//! closes a parameter, escapes another brace, or is a stray char inside a literal. So the
//! lexer hands out one single-char token per [`Lexer::scan_next_token`] call, and the
//! parser asks for longer runs (`try_scan_*`) once it knows what it is looking at.
//!
//! ## Rewind contract
//!
//! The parser always holds one lookahead token. Before starting a longer scan at the
//! lookahead's position it calls [`Lexer::reset_to`] with the token's start. Doubled
//! escapes (`{{`, `}}`, `((`, `[[`) are recognized through this peek-then-rewind step.

use std::ops::Range;

use super::cst::SyntaxKind;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::text::VirtualCharSequence;

/// Span-based token over the char sequence. Text is sliced from the sequence when the
/// token is pushed into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Char indices into the sequence.
    pub start: usize,
    pub end: usize,
    /// Lexical defects found while scanning this token.
    pub diagnostics: Vec<Diagnostic>,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            diagnostics: Vec::new(),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub struct Lexer<'t> {
    text: &'t VirtualCharSequence,
    position: usize,
    token_replacement: bool,
}

impl<'t> Lexer<'t> {
    pub fn new(text: &'t VirtualCharSequence) -> Self {
        Self {
            text,
            position: 0,
            token_replacement: false,
        }
    }

    /// Treat `[` and `]` as replacement token delimiters.
    pub fn with_token_replacement(mut self, enabled: bool) -> Self {
        self.token_replacement = enabled;
        self
    }

    pub fn token_replacement(&self) -> bool {
        self.token_replacement
    }

    pub fn text(&self) -> &'t VirtualCharSequence {
        self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to `position`, which must not be past the current one.
    pub fn reset_to(&mut self, position: usize) {
        debug_assert!(position <= self.position, "lexer can only rewind");
        self.position = position;
    }

    /// Char at the cursor, i.e. the one after the parser's lookahead token.
    pub fn peek_char(&self) -> Option<char> {
        self.text.value_at(self.position)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.text.value_at(index)
    }

    /// `ch` at `index` is immediately followed by a second `ch`.
    fn is_doubled(&self, index: usize, ch: char) -> bool {
        self.char_at(index) == Some(ch) && self.char_at(index + 1) == Some(ch)
    }

    /// Single `}` at `index`, not part of a `}}` escape.
    pub(crate) fn is_unescaped_close_brace(&self, index: usize) -> bool {
        self.char_at(index) == Some('}') && self.char_at(index + 1) != Some('}')
    }

    /// `?` at `index` that ends a parameter: followed by an unescaped `}` or end of input.
    pub(crate) fn is_closing_question_mark(&self, index: usize) -> bool {
        self.char_at(index) == Some('?')
            && (index + 1 >= self.text.len() || self.is_unescaped_close_brace(index + 1))
    }

    fn error_at(&self, kind: DiagnosticKind, index: usize, args: &[&str]) -> Diagnostic {
        let range = self.text.source_range(index..index + 1);
        Diagnostic::new(kind, range, kind.message(args))
    }

    fn finish(&self, start: usize, diagnostics: Vec<Diagnostic>) -> Option<Token> {
        if self.position == start {
            return None;
        }
        Some(Token {
            kind: SyntaxKind::Text,
            start,
            end: self.position,
            diagnostics,
        })
    }

    /// One char token, or a zero-width `EndOfFile` at the end.
    pub fn scan_next_token(&mut self) -> Token {
        let start = self.position;
        let Some(ch) = self.char_at(start) else {
            return Token::new(SyntaxKind::EndOfFile, start, start);
        };
        self.position += 1;
        Token::new(SyntaxKind::from_char(ch), start, self.position)
    }

    /// Literal text up to `/`, an unescaped `{`, (with token replacement) an unescaped `[`,
    /// or a `.` that introduces a trailing optional parameter as in `file.{ext?}`.
    ///
    /// A stray `}` stays in the literal and is flagged; only the first one per run.
    pub fn try_scan_literal(&mut self) -> Option<Token> {
        let start = self.position;
        let mut diagnostics = Vec::new();
        let mut flagged_brace = false;
        let mut flagged_bracket = false;
        let mut has_question_mark = false;

        while let Some(ch) = self.char_at(self.position) {
            let doubled = self.is_doubled(self.position, ch);
            match ch {
                '/' => break,
                '{' | '}' if doubled => {
                    self.position += 2;
                    continue;
                }
                '{' => break,
                '}' => {
                    if !flagged_brace {
                        flagged_brace = true;
                        diagnostics.push(self.error_at(
                            DiagnosticKind::MismatchedParameter,
                            self.position,
                            &[],
                        ));
                    }
                }
                '[' | ']' if self.token_replacement && doubled => {
                    self.position += 2;
                    continue;
                }
                '[' if self.token_replacement => break,
                ']' if self.token_replacement => {
                    if !flagged_bracket {
                        flagged_bracket = true;
                        diagnostics.push(self.error_at(
                            DiagnosticKind::ImbalancedReplacementDelimiters,
                            self.position,
                            &[],
                        ));
                    }
                }
                '.' if self.position > start && self.optional_parameter_at(self.position + 1) => {
                    break;
                }
                '?' => has_question_mark = true,
                _ => {}
            }
            self.position += 1;
        }

        if has_question_mark {
            let literal = self.text.slice_text(start..self.position);
            let kind = DiagnosticKind::InvalidLiteral;
            diagnostics.insert(
                0,
                Diagnostic::new(
                    kind,
                    self.text.source_range(start..self.position),
                    kind.message(&[literal]),
                ),
            );
        }

        self.finish(start, diagnostics)
    }

    /// Parameter name up to `:`, `=`, an unescaped `}`, a closing `?`, or end of input.
    ///
    /// `/`, `*`, non-closing `?`, and escaped braces inside the run make the name invalid;
    /// a single `{` is an unescaped brace.
    pub fn try_scan_parameter_name(&mut self) -> Option<Token> {
        let start = self.position;
        let mut defects: Vec<(DiagnosticKind, usize)> = Vec::new();

        while let Some(ch) = self.char_at(self.position) {
            match ch {
                ':' | '=' => break,
                '?' if self.is_closing_question_mark(self.position) => break,
                '{' | '}' if self.is_doubled(self.position, ch) => {
                    defects.push((DiagnosticKind::InvalidParameterName, self.position));
                    self.position += 2;
                    continue;
                }
                '}' => break,
                '{' => defects.push((DiagnosticKind::UnescapedBrace, self.position)),
                '/' | '?' | '*' => {
                    defects.push((DiagnosticKind::InvalidParameterName, self.position))
                }
                _ => {}
            }
            self.position += 1;
        }

        let name = self.text.slice_text(start..self.position);
        let diagnostics = defects
            .into_iter()
            .map(|(kind, index)| match kind {
                DiagnosticKind::InvalidParameterName => self.error_at(kind, index, &[name]),
                _ => self.error_at(kind, index, &[]),
            })
            .collect();

        self.finish(start, diagnostics)
    }

    /// Unescaped policy fragment: up to `:`, `=`, a closing `?`, an unescaped `}` or `(`.
    pub fn try_scan_policy_name(&mut self) -> Option<Token> {
        let start = self.position;

        while let Some(ch) = self.char_at(self.position) {
            match ch {
                ':' | '=' => break,
                '?' if self.is_closing_question_mark(self.position) => break,
                '(' | '}' if self.is_doubled(self.position, ch) => {
                    self.position += 2;
                    continue;
                }
                '(' | '}' => break,
                _ => {}
            }
            self.position += 1;
        }

        self.finish(start, Vec::new())
    }

    /// Escaped policy fragment between `(` and `)`: up to an unescaped `)` or `}`.
    pub fn try_scan_policy_argument(&mut self) -> Option<Token> {
        let start = self.position;

        while let Some(ch) = self.char_at(self.position) {
            match ch {
                ')' | '}' if self.is_doubled(self.position, ch) => {
                    self.position += 2;
                    continue;
                }
                ')' | '}' => break,
                _ => {}
            }
            self.position += 1;
        }

        self.finish(start, Vec::new())
    }

    /// Default value up to an unescaped `}` or a closing `?`.
    pub fn try_scan_default_value(&mut self) -> Option<Token> {
        let start = self.position;

        while let Some(ch) = self.char_at(self.position) {
            match ch {
                '?' if self.is_closing_question_mark(self.position) => break,
                '}' if self.is_doubled(self.position, ch) => {
                    self.position += 2;
                    continue;
                }
                '}' => break,
                _ => {}
            }
            self.position += 1;
        }

        self.finish(start, Vec::new())
    }

    /// Replacement token name up to an unescaped `]`, `/`, or end of input.
    pub fn try_scan_replacement(&mut self) -> Option<Token> {
        let start = self.position;
        let mut diagnostics = Vec::new();

        while let Some(ch) = self.char_at(self.position) {
            match ch {
                '/' => break,
                '[' | ']' if self.is_doubled(self.position, ch) => {
                    self.position += 2;
                    continue;
                }
                ']' => break,
                '[' => diagnostics.push(self.error_at(
                    DiagnosticKind::UnescapedReplacementBracket,
                    self.position,
                    &[],
                )),
                _ => {}
            }
            self.position += 1;
        }

        self.finish(start, diagnostics)
    }

    /// Whether the cursor sits on a parameter that is optional and ends its segment,
    /// e.g. the `{ext?}` after the `.` in `{name}.{ext?}`. Does not move the cursor.
    pub fn optional_parameter_follows(&self) -> bool {
        self.optional_parameter_at(self.position)
    }

    fn optional_parameter_at(&self, open: usize) -> bool {
        if self.char_at(open) != Some('{') || self.is_doubled(open, '{') {
            return false;
        }

        let mut index = open + 1;
        while let Some(ch) = self.char_at(index) {
            match ch {
                '/' => return false,
                '}' if self.is_doubled(index, '}') => index += 2,
                '}' => {
                    let after = self.char_at(index + 1);
                    return index > open + 1
                        && self.char_at(index - 1) == Some('?')
                        && matches!(after, None | Some('/'));
                }
                _ => index += 1,
            }
        }
        false
    }
}
