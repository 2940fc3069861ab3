//! Parser invariants, excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;
use super::lexer::Token;

impl Parser<'_> {
    /// Every lookahead spends fuel; consuming or rescanning refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(fuel != 0, "route parser made no progress on {:?}", self.current.kind);
        self.debug_fuel.set(fuel - 1);
    }

    #[inline]
    pub(super) fn assert_current(&self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "route parser expected {:?} at char {} but found {:?}",
            expected, self.current.start, found,
        );
    }

    /// A scan that produced a token starts where it was asked to and consumed something.
    #[inline]
    pub(super) fn assert_scanned(&self, start: usize, token: &Token) {
        assert!(
            token.start == start && token.end > start,
            "scan from char {} produced {:?} at {}..{}",
            start,
            token.kind,
            token.start,
            token.end,
        );
    }
}
