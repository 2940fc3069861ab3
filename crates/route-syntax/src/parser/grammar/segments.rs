use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, token_sets::SEGMENT_END};
use crate::parser::lexer::{Lexer, Token};

impl Parser<'_> {
    /// `CompilationUnit := (Segment | SegmentSeparator)* EndOfFile`
    pub(crate) fn parse_root(&mut self) {
        self.start_node(SyntaxKind::CompilationUnit);

        while !self.eof() {
            if self.currently_is(SyntaxKind::Slash) {
                self.parse_segment_separator();
            } else {
                self.parse_segment();
            }
        }

        self.assert_current(SyntaxKind::EndOfFile);
        self.bump();
        self.finish_node();
    }

    fn parse_segment_separator(&mut self) {
        self.start_node(SyntaxKind::SegmentSeparator);
        self.bump();
        self.finish_node();
    }

    /// Parts up to the next `/` or the end.
    fn parse_segment(&mut self) {
        self.start_node(SyntaxKind::Segment);
        while !self.currently_is_one_of(SEGMENT_END) {
            self.parse_segment_part();
        }
        self.finish_node();
    }

    fn parse_segment_part(&mut self) {
        match self.current() {
            SyntaxKind::OpenBrace => {
                let open = self.take();
                if self.currently_is(SyntaxKind::OpenBrace) {
                    // `{{` is an escaped brace inside a literal
                    self.restart_at(open.start);
                    self.parse_literal();
                } else {
                    self.parse_parameter(open);
                }
            }
            SyntaxKind::OpenBracket if self.lexer.token_replacement() => {
                let open = self.take();
                if self.currently_is(SyntaxKind::OpenBracket) {
                    self.restart_at(open.start);
                    self.parse_literal();
                } else {
                    self.parse_replacement(open);
                }
            }
            SyntaxKind::Dot if self.lexer.optional_parameter_follows() => {
                self.parse_optional_separator();
            }
            _ => self.parse_literal(),
        }
    }

    fn parse_literal(&mut self) {
        self.start_node(SyntaxKind::Literal);
        self.bump_scan_or_char(Lexer::try_scan_literal);
        self.finish_node();
    }

    /// `.` directly before a trailing optional parameter, as in `{name}.{ext?}`.
    fn parse_optional_separator(&mut self) {
        self.start_node(SyntaxKind::OptionalSeparator);
        self.bump();
        self.finish_node();
    }

    /// `[name]`, with the opening bracket already taken.
    fn parse_replacement(&mut self, open: Token) {
        self.start_node(SyntaxKind::Replacement);
        self.push_token(open);

        if !self.at_replacement_close() {
            self.bump_scan(Lexer::try_scan_replacement);
        }

        if self.at_replacement_close() {
            self.bump();
        } else {
            self.missing(
                SyntaxKind::CloseBracket,
                DiagnosticKind::UnclosedReplacementToken,
            );
        }
        self.finish_node();
    }
}
