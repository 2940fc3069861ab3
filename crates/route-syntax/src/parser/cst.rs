//! Syntax kinds for route patterns and the rowan glue around them.
//!
//! Tokens and nodes share one `SyntaxKind` enum. Token kinds come first so that
//! `is_token` is a single comparison.

use rowan::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    /// Zero-width token closing every `CompilationUnit`
    EndOfFile = 0,
    Slash,
    Tilde,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Dot,
    Equals,
    Colon,
    Asterisk,
    OpenParen,
    CloseParen,
    QuestionMark,
    Comma,
    /// Any other single char, or a run produced by one of the lexer's scans
    Text,

    // nodes
    CompilationUnit,
    Segment,
    SegmentSeparator,
    Literal,
    Replacement,
    Parameter,
    OptionalSeparator,
    CatchAllPart,
    NameParameterPart,
    PolicyParameterPart,
    PolicyWithArgumentsPart,
    OptionalParameterPart,
    DefaultValueParameterPart,

    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    pub fn is_token(self) -> bool {
        self <= Text
    }

    pub fn is_node(self) -> bool {
        !self.is_token() && self != __LAST
    }

    /// Kind produced by `scan_next_token` for a single char.
    pub fn from_char(c: char) -> Self {
        match c {
            '/' => Slash,
            '~' => Tilde,
            '{' => OpenBrace,
            '}' => CloseBrace,
            '[' => OpenBracket,
            ']' => CloseBracket,
            '.' => Dot,
            '=' => Equals,
            ':' => Colon,
            '*' => Asterisk,
            '(' => OpenParen,
            ')' => CloseParen,
            '?' => QuestionMark,
            ',' => Comma,
            _ => Text,
        }
    }
}

/// Every kind in discriminant order, for raw-to-kind lookup.
const KINDS: [SyntaxKind; __LAST as usize] = [
    EndOfFile,
    Slash,
    Tilde,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Dot,
    Equals,
    Colon,
    Asterisk,
    OpenParen,
    CloseParen,
    QuestionMark,
    Comma,
    Text,
    CompilationUnit,
    Segment,
    SegmentSeparator,
    Literal,
    Replacement,
    Parameter,
    OptionalSeparator,
    CatchAllPart,
    NameParameterPart,
    PolicyParameterPart,
    PolicyWithArgumentsPart,
    OptionalParameterPart,
    DefaultValueParameterPart,
];

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteLang {}

impl Language for RouteLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        match KINDS.get(usize::from(raw.0)) {
            Some(&kind) => kind,
            None => panic!("raw syntax kind {} out of range", raw.0),
        }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<RouteLang>;
pub type SyntaxToken = rowan::SyntaxToken<RouteLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// Set of syntax kinds, one bit per discriminant.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u32);

const _: () = assert!((__LAST as u16) <= u32::BITS as u16, "SyntaxKind outgrew TokenSet");

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[SyntaxKind]) -> TokenSet {
        let mut set = TokenSet::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    pub const fn with(self, kind: SyntaxKind) -> TokenSet {
        TokenSet(self.0 | Self::bit(kind))
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    const fn bit(kind: SyntaxKind) -> u32 {
        match kind {
            __LAST => 0,
            _ => 1 << (kind as u32),
        }
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(KINDS.iter().filter(|&&kind| self.contains(kind)))
            .finish()
    }
}

pub mod token_sets {
    use super::*;

    /// Tokens that end a segment.
    pub const SEGMENT_END: TokenSet = TokenSet::new(&[EndOfFile, Slash]);

    /// Tokens that always end a name or a policy, whatever follows them. A `}` or `?`
    /// ends them too, but only when it closes the parameter.
    pub const PARAMETER_PART_END: TokenSet = TokenSet::new(&[EndOfFile, Colon, Equals]);
}
