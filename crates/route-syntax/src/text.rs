//! Positioned character sequences.
//!
//! The lexer never works on a `&str` directly. Its input is a sequence of characters that
//! each carry the range they occupy in the original source, so a diagnostic raised on a
//! decoded string literal still points at the right place in the enclosing file.
//!
//! A [`CharConverter`] turns host input into a [`VirtualCharSequence`]. Conversion is the
//! only step of the pipeline that can fail; everything after it always produces a tree.

use std::ops::Range;

use rowan::{TextRange, TextSize};

/// One decoded character and the source range it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualChar {
    pub value: char,
    pub span: TextRange,
}

impl VirtualChar {
    pub fn new(value: char, span: TextRange) -> Self {
        Self { value, span }
    }
}

/// Indexed characters with source spans, plus their decoded text.
///
/// The syntax tree is built over the decoded text, so tree ranges are byte offsets into
/// [`as_str`](Self::as_str). Use [`text_to_source`](Self::text_to_source) to map them back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualCharSequence {
    chars: Vec<VirtualChar>,
    text: String,
    /// Byte offset of each char in `text`.
    offsets: Vec<TextSize>,
    /// Source position of the end of input, used for zero-width ranges there.
    end: TextSize,
}

impl VirtualCharSequence {
    pub fn new(chars: Vec<VirtualChar>, end: TextSize) -> Self {
        let mut text = String::with_capacity(chars.len());
        let mut offsets = Vec::with_capacity(chars.len());
        for c in &chars {
            offsets.push(TextSize::of(text.as_str()));
            text.push(c.value);
        }
        Self {
            chars,
            text,
            offsets,
            end,
        }
    }

    /// Identity mapping: every char's span is its own byte range in `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_at(text, TextSize::from(0))
    }

    /// Identity mapping shifted by `base` bytes.
    pub fn from_text_at(text: &str, base: TextSize) -> Self {
        let chars = text
            .char_indices()
            .map(|(offset, value)| {
                let start = base + TextSize::from(offset as u32);
                VirtualChar::new(value, TextRange::at(start, TextSize::of(value)))
            })
            .collect();
        Self::new(chars, base + TextSize::of(text))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<VirtualChar> {
        self.chars.get(index).copied()
    }

    pub fn value_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|c| c.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualChar> + '_ {
        self.chars.iter()
    }

    /// Decoded text of the whole sequence.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Source position just past the last character.
    pub fn source_end(&self) -> TextSize {
        self.end
    }

    /// Decoded text of chars `range.start..range.end`.
    pub fn slice_text(&self, range: Range<usize>) -> &str {
        let start: usize = self.byte_offset(range.start).into();
        let end: usize = self.byte_offset(range.end).into();
        &self.text[start..end]
    }

    /// Source position of the char at `index`, or the end position past the last char.
    pub fn position_at(&self, index: usize) -> TextSize {
        self.chars
            .get(index)
            .map_or(self.end, |c| c.span.start())
    }

    /// Source range covered by chars `range.start..range.end`.
    pub fn source_range(&self, range: Range<usize>) -> TextRange {
        if range.start >= range.end || range.start >= self.chars.len() {
            return TextRange::empty(self.position_at(range.start));
        }
        let last = range.end.min(self.chars.len()) - 1;
        TextRange::new(self.chars[range.start].span.start(), self.chars[last].span.end())
    }

    /// Maps a range of the decoded text (a tree range) to the source.
    pub fn text_to_source(&self, range: TextRange) -> TextRange {
        let start = self.char_index(range.start());
        let end = self.char_index(range.end());
        self.source_range(start..end)
    }

    fn byte_offset(&self, index: usize) -> TextSize {
        self.offsets
            .get(index)
            .copied()
            .unwrap_or_else(|| TextSize::of(self.text.as_str()))
    }

    fn char_index(&self, offset: TextSize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index,
        }
    }
}

/// Failure to turn host input into a character sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("input is not a string literal")]
    NotAStringLiteral,

    #[error("unterminated string literal")]
    Unterminated,

    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },
}

/// Input adapter from host text to positioned characters.
pub trait CharConverter {
    fn convert(&self, input: &str) -> Result<VirtualCharSequence, ConvertError>;
}

/// Takes the input verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl CharConverter for PlainText {
    fn convert(&self, input: &str) -> Result<VirtualCharSequence, ConvertError> {
        Ok(VirtualCharSequence::from_text(input))
    }
}

/// Decodes a quoted string literal as it appears in source code.
///
/// Accepts `"..."` with backslash escapes (`\n \r \t \0 \\ \" \' \u{..}`) and raw strings
/// (`r"..."`, `r#"..."#`). Every decoded char keeps the span of its escape sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLiteral;

impl CharConverter for StringLiteral {
    fn convert(&self, input: &str) -> Result<VirtualCharSequence, ConvertError> {
        if let Some(rest) = input.strip_prefix('r') {
            return convert_raw(input, rest);
        }
        if !input.starts_with('"') {
            return Err(ConvertError::NotAStringLiteral);
        }
        convert_escaped(input)
    }
}

fn span_of(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

fn convert_raw(input: &str, rest: &str) -> Result<VirtualCharSequence, ConvertError> {
    let hashes = rest.chars().take_while(|&c| c == '#').count();
    let body = &rest[hashes..];
    if !body.starts_with('"') {
        return Err(ConvertError::NotAStringLiteral);
    }

    let content_start = 1 + hashes + 1;
    let terminator: String = std::iter::once('"')
        .chain(std::iter::repeat_n('#', hashes))
        .collect();
    let Some(content_len) = input[content_start..].find(terminator.as_str()) else {
        return Err(ConvertError::Unterminated);
    };
    let content_end = content_start + content_len;
    if content_end + terminator.len() != input.len() {
        return Err(ConvertError::NotAStringLiteral);
    }

    let chars = input[content_start..content_end]
        .char_indices()
        .map(|(offset, value)| {
            let start = content_start + offset;
            VirtualChar::new(value, span_of(start, start + value.len_utf8()))
        })
        .collect();
    Ok(VirtualCharSequence::new(
        chars,
        TextSize::from(content_end as u32),
    ))
}

fn convert_escaped(input: &str) -> Result<VirtualCharSequence, ConvertError> {
    let mut chars = Vec::new();
    let mut iter = input.char_indices().skip(1).peekable();

    while let Some((start, c)) = iter.next() {
        match c {
            '"' => {
                if start + 1 != input.len() {
                    return Err(ConvertError::NotAStringLiteral);
                }
                return Ok(VirtualCharSequence::new(chars, TextSize::from(start as u32)));
            }
            '\\' => {
                let Some((_, escape)) = iter.next() else {
                    return Err(ConvertError::Unterminated);
                };
                let value = match escape {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    '0' => '\0',
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    'u' => decode_unicode_escape(&mut iter, start)?,
                    _ => return Err(ConvertError::InvalidEscape { offset: start }),
                };
                let end = iter.peek().map_or(input.len(), |&(offset, _)| offset);
                chars.push(VirtualChar::new(value, span_of(start, end)));
            }
            _ => chars.push(VirtualChar::new(c, span_of(start, start + c.len_utf8()))),
        }
    }

    Err(ConvertError::Unterminated)
}

/// Decodes the `{XXXX}` tail of a `\u` escape starting at `offset`.
fn decode_unicode_escape(
    iter: &mut impl Iterator<Item = (usize, char)>,
    offset: usize,
) -> Result<char, ConvertError> {
    let invalid = ConvertError::InvalidEscape { offset };
    if !matches!(iter.next(), Some((_, '{'))) {
        return Err(invalid);
    }
    let mut digits = String::new();
    loop {
        match iter.next() {
            Some((_, '}')) => break,
            Some((_, c)) if c.is_ascii_hexdigit() && digits.len() < 6 => digits.push(c),
            _ => return Err(invalid),
        }
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(invalid)
}
