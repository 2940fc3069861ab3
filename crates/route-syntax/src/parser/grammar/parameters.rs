use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, token_sets::PARAMETER_PART_END};
use crate::parser::lexer::{Lexer, Token};

impl Parser<'_> {
    /// `Parameter := '{' CatchAll? Name? (Policy | Optional | DefaultValue)* '}'`
    ///
    /// The opening brace was already taken by the caller to rule out a `{{` escape.
    pub(crate) fn parse_parameter(&mut self, open: Token) {
        self.start_node(SyntaxKind::Parameter);
        self.push_token(open);

        if self.currently_is(SyntaxKind::Asterisk) {
            self.parse_catch_all();
        }

        if !self.at_part_end() {
            self.parse_parameter_name();
        }

        loop {
            match self.current() {
                SyntaxKind::EndOfFile => break,
                SyntaxKind::CloseBrace if self.at_parameter_close() => break,
                SyntaxKind::Colon => self.parse_policy(),
                SyntaxKind::QuestionMark if self.at_optional_marker() => {
                    self.parse_optional_marker()
                }
                SyntaxKind::Equals => self.parse_default_value(),
                _ => self.parse_parameter_name(),
            }
        }

        if self.at_parameter_close() {
            self.bump();
        } else {
            self.missing(SyntaxKind::CloseBrace, DiagnosticKind::MismatchedParameter);
        }
        self.finish_node();
    }

    /// `*` or `**`. The doubled form leaves slashes unencoded when generating URLs.
    fn parse_catch_all(&mut self) {
        self.start_node(SyntaxKind::CatchAllPart);
        self.bump();
        self.eat_token(SyntaxKind::Asterisk);
        self.finish_node();
    }

    /// End of a name or a policy: `:`, `=`, the end, or a closing `}` or `?`.
    fn at_part_end(&self) -> bool {
        self.currently_is_one_of(PARAMETER_PART_END)
            || self.at_parameter_close()
            || self.at_optional_marker()
    }

    fn parse_parameter_name(&mut self) {
        self.start_node(SyntaxKind::NameParameterPart);
        self.bump_scan_or_char(Lexer::try_scan_parameter_name);
        self.finish_node();
    }

    /// `':' PolicyFragment*`, where a fragment is either plain text or `(` arguments `)`.
    fn parse_policy(&mut self) {
        self.start_node(SyntaxKind::PolicyParameterPart);
        self.bump();

        while !self.at_part_end() {
            if self.currently_is(SyntaxKind::OpenParen) && !self.next_char_is('(') {
                self.parse_policy_arguments();
            } else {
                self.bump_scan_or_char(Lexer::try_scan_policy_name);
            }
        }

        self.finish_node();
    }

    fn parse_policy_arguments(&mut self) {
        self.start_node(SyntaxKind::PolicyWithArgumentsPart);
        self.bump();

        if !self.at_arguments_close() {
            self.bump_scan(Lexer::try_scan_policy_argument);
        }

        if self.at_arguments_close() {
            self.bump();
        } else {
            self.missing(
                SyntaxKind::CloseParen,
                DiagnosticKind::MissingPolicyArgumentsClose,
            );
        }
        self.finish_node();
    }

    fn at_arguments_close(&self) -> bool {
        self.currently_is(SyntaxKind::CloseParen) && !self.next_char_is(')')
    }

    fn parse_optional_marker(&mut self) {
        self.start_node(SyntaxKind::OptionalParameterPart);
        self.bump();
        self.finish_node();
    }

    /// `'=' DefaultValueText?`
    fn parse_default_value(&mut self) {
        self.start_node(SyntaxKind::DefaultValueParameterPart);
        self.bump();
        self.bump_scan(Lexer::try_scan_default_value);
        self.finish_node();
    }
}
