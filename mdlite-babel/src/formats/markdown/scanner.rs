//! Inline span scanner
//!
//!     Turns the text of one paragraph into spans of plain, bold (`**`), italic (`_`) and
//!     monospace (`` ` ``) text.
//!
//! Eligibility
//!
//!     A delimiter only counts as markup when its neighbours allow it. Every character falls in
//!     one of four classes: word (alphanumeric), space, marker (`*`, `_`, `` ` ``) and punct
//!     (anything else). The start and end of the paragraph have no class.
//!
//!     - opener: not preceded by a word, followed by something other than space or the end,
//!       and when followed by punct it must not also be preceded by punct.
//!     - closer: preceded by something other than space or the start, not followed by a word,
//!       and when preceded by punct it must not also be followed by punct.
//!
//!     So `snake_case` never opens, `** x **` stays literal, `` (`) `` stays literal, and the inner
//!     underscores of `_Good_night_everybody_` can neither open nor close.
//!
//! Scan
//!
//!     One left-to-right pass with at most one open span. Nesting is an error, so there is never
//!     more than one thing to close and no stack is needed. While a span of kind K is open:
//!
//!     - an eligible K closer closes it, unless nothing sits between the two delimiters, in
//!       which case both stay literal (`****` is text, not an empty bold span);
//!     - any other K delimiter is content;
//!     - an eligible opener of another kind fails with a nested error if a closer of that kind
//!       follows later in the paragraph, and is content otherwise (`` `_` `` is monospace `_`).
//!
//!     Reaching the end with a span still open is an unclosed error.
//!
//!     The last eligible closer of each kind is found once up front, so the look-ahead is a
//!     comparison and the whole scan stays linear.

use crate::ast::{MarkupKind, Span, SpanKind};
use crate::error::MarkupError;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Marker,
    Punct,
}

fn classify(c: char) -> CharClass {
    match c {
        '*' | '_' | '`' => CharClass::Marker,
        c if c.is_alphanumeric() => CharClass::Word,
        c if c.is_whitespace() => CharClass::Space,
        _ => CharClass::Punct,
    }
}

fn can_open(prev: Option<CharClass>, next: Option<CharClass>) -> bool {
    match next {
        None | Some(CharClass::Space) => false,
        Some(CharClass::Punct) => !matches!(prev, Some(CharClass::Word | CharClass::Punct)),
        Some(_) => prev != Some(CharClass::Word),
    }
}

fn can_close(prev: Option<CharClass>, next: Option<CharClass>) -> bool {
    match prev {
        None | Some(CharClass::Space) => false,
        Some(CharClass::Punct) => !matches!(next, Some(CharClass::Word | CharClass::Punct)),
        Some(_) => next != Some(CharClass::Word),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Bold,
    Italic,
    Monospace,
}

impl Delimiter {
    fn len(self) -> usize {
        match self {
            Delimiter::Bold => 2,
            Delimiter::Italic | Delimiter::Monospace => 1,
        }
    }

    fn span_kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Monospace => SpanKind::Monospace,
        }
    }

    fn index(self) -> usize {
        match self {
            Delimiter::Bold => 0,
            Delimiter::Italic => 1,
            Delimiter::Monospace => 2,
        }
    }

    fn markup_kind(self) -> MarkupKind {
        match self {
            Delimiter::Bold => MarkupKind::Bold,
            Delimiter::Italic => MarkupKind::Italic,
            Delimiter::Monospace => MarkupKind::Monospace,
        }
    }
}

/// Scan one paragraph into spans.
///
/// `base` is the byte offset of `text` within the whole source and is only used for error
/// offsets.
pub fn scan_inline(text: &str, base: usize) -> Result<Vec<Span>, MarkupError> {
    let mut scanner = Scanner::new(text, base);
    scanner.run()?;
    Ok(scanner.spans)
}

struct Scanner {
    chars: Vec<(usize, char)>,
    base: usize,
    spans: Vec<Span>,
    buffer: String,
    /// Delimiter of the open span and the char index it was opened at
    active: Option<(Delimiter, usize)>,
    /// Char index of the last eligible closer, per [`Delimiter::index`]
    last_closer: [Option<usize>; 3],
}

impl Scanner {
    fn new(text: &str, base: usize) -> Self {
        let mut scanner = Self {
            chars: text.char_indices().collect(),
            base,
            spans: Vec::new(),
            buffer: String::new(),
            active: None,
            last_closer: [None; 3],
        };
        for j in 0..scanner.chars.len() {
            if let Some(delim) = scanner.delimiter_at(j) {
                if scanner.is_closer(j, delim) {
                    scanner.last_closer[delim.index()] = Some(j);
                }
            }
        }
        scanner
    }

    fn run(&mut self) -> Result<(), MarkupError> {
        let mut i = 0;
        while i < self.chars.len() {
            let Some(delim) = self.delimiter_at(i) else {
                self.buffer.push(self.chars[i].1);
                i += 1;
                continue;
            };

            let active = self.active;
            match active {
                None if self.is_opener(i, delim) => {
                    self.flush_plain();
                    self.active = Some((delim, i));
                }
                Some((open, at)) if open == delim && self.is_closer(i, delim) => {
                    if self.buffer.is_empty() {
                        self.reopen_plain();
                        self.push_literal(at, open);
                        self.push_literal(i, delim);
                    } else {
                        let text = std::mem::take(&mut self.buffer);
                        self.spans.push(Span::new(open.span_kind(), text));
                    }
                    self.active = None;
                }
                Some((open, _))
                    if open != delim
                        && self.is_opener(i, delim)
                        && self.has_closer_from(i + delim.len(), delim) =>
                {
                    trace!(outer = ?open, inner = ?delim, at = i, "nested delimiter");
                    return Err(MarkupError::Nested {
                        outer: open.markup_kind(),
                        inner: delim.markup_kind(),
                        offset: self.offset(i),
                    });
                }
                _ => self.push_literal(i, delim),
            }
            i += delim.len();
        }

        if let Some((open, at)) = self.active {
            trace!(kind = ?open, at, "delimiter left open");
            return Err(MarkupError::Unclosed {
                kind: open.markup_kind(),
                offset: self.offset(at),
            });
        }
        self.flush_plain();
        Ok(())
    }

    fn delimiter_at(&self, i: usize) -> Option<Delimiter> {
        match self.chars.get(i)?.1 {
            '*' if self.char_at(i + 1) == Some('*') => Some(Delimiter::Bold),
            '_' => Some(Delimiter::Italic),
            '`' => Some(Delimiter::Monospace),
            _ => None,
        }
    }

    fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).map(|&(_, c)| c)
    }

    fn neighbours(&self, i: usize, delim: Delimiter) -> (Option<CharClass>, Option<CharClass>) {
        let prev = i
            .checked_sub(1)
            .and_then(|p| self.char_at(p))
            .map(classify);
        let next = self.char_at(i + delim.len()).map(classify);
        (prev, next)
    }

    fn is_opener(&self, i: usize, delim: Delimiter) -> bool {
        let (prev, next) = self.neighbours(i, delim);
        can_open(prev, next)
    }

    fn is_closer(&self, i: usize, delim: Delimiter) -> bool {
        let (prev, next) = self.neighbours(i, delim);
        can_close(prev, next)
    }

    fn has_closer_from(&self, start: usize, delim: Delimiter) -> bool {
        self.last_closer[delim.index()].is_some_and(|last| last >= start)
    }

    fn push_literal(&mut self, i: usize, delim: Delimiter) {
        for &(_, c) in &self.chars[i..i + delim.len()] {
            self.buffer.push(c);
        }
    }

    /// Move a trailing plain span back into the buffer so literal text stays in one span.
    fn reopen_plain(&mut self) {
        if self.spans.last().is_some_and(|span| span.kind == SpanKind::Plain) {
            if let Some(span) = self.spans.pop() {
                self.buffer = span.text;
            }
        }
    }

    fn flush_plain(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.spans.push(Span::plain(text));
        }
    }

    fn offset(&self, i: usize) -> usize {
        self.base + self.chars[i].0
    }
}
