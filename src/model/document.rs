//! Document abstraction consumed by the engine.
//!
//! The engine never owns text storage: the host editor implements
//! [`Document`] over its buffer and syntax classifier, and the engine only
//! issues bounded reads, scope queries, and region edits through it.
//! [`StringDocument`] is a minimal reference implementation (plain character
//! vector plus a naive string/comment scanner) used by the tests and by
//! hosts that have no lexer of their own.

use anyhow::{ensure, Result};

use crate::model::region::Region;

/// Read/write view of a text buffer, with scope classification.
///
/// Offsets are character offsets; valid positions are `0..=len()` (positions
/// sit between characters, so `len()` denotes end-of-buffer). Reads are
/// infallible and return `Option`/clamped results; out-of-range offsets are
/// never an error. Mutations return `Err` on out-of-range regions, which the
/// engine treats as a fatal internal-invariant violation and propagates.
pub trait Document {
    /// Number of characters in the buffer.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at `offset`, or `None` at or past end-of-buffer.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// The text covered by `region`, clamped to the buffer.
    fn text(&self, region: Region) -> String {
        (region.begin..region.end.min(self.len()))
            .filter_map(|offset| self.char_at(offset))
            .collect()
    }

    /// The span of the line containing `offset`, excluding the trailing
    /// newline. `offset == len()` yields the last line; an offset on a
    /// newline character yields the line that newline terminates.
    fn line_span(&self, offset: usize) -> Region {
        let len = self.len();
        let offset = offset.min(len);
        let mut begin = offset;
        while begin > 0 && self.char_at(begin - 1) != Some('\n') {
            begin -= 1;
        }
        let mut end = offset;
        while end < len && self.char_at(end) != Some('\n') {
            end += 1;
        }
        Region::new(begin, end)
    }

    /// The string literal strictly enclosing `offset`, if any.
    ///
    /// "Strictly" means the delimiters themselves are outside: an offset
    /// sitting on the opening or closing quote reports `None`. Regions are
    /// produced fresh per query; the classifier owns their correctness.
    fn string_scope_at(&self, offset: usize) -> Option<Region>;

    /// The comment containing `offset`, if any.
    ///
    /// Membership is character-based: an offset whose character is part of a
    /// comment (marker included) is inside it. At end-of-buffer the
    /// character before the offset is probed instead, unless it is a
    /// newline.
    fn comment_scope_at(&self, offset: usize) -> Option<Region>;

    /// Remove the characters in `region`. A single undo-able edit.
    fn erase(&mut self, region: Region) -> Result<()>;

    /// Insert `text` before `offset`. A single undo-able edit.
    fn insert(&mut self, offset: usize, text: &str) -> Result<()>;

    /// Replace `region` with `text` as one logical edit.
    fn replace(&mut self, region: Region, text: &str) -> Result<()> {
        self.erase(region)?;
        self.insert(region.begin, text)
    }
}

/// Syntax rules for [`StringDocument`]'s built-in scope scanner.
#[derive(Debug, Clone)]
pub struct SyntaxRules {
    /// Markers that start a comment running to end-of-line.
    pub line_comments: Vec<String>,
}

impl Default for SyntaxRules {
    fn default() -> Self {
        Self {
            line_comments: vec![";".to_string(), "//".to_string()],
        }
    }
}

/// In-memory document over a character vector.
///
/// Strings are double-quoted with backslash escapes; an unterminated string
/// runs to end-of-buffer. Comments run from a marker to end-of-line. Scopes
/// are rescanned per query, which keeps this implementation trivially
/// correct under edits; hosts with an incremental lexer should implement
/// [`Document`] directly instead.
#[derive(Debug, Clone)]
pub struct StringDocument {
    chars: Vec<char>,
    rules: SyntaxRules,
}

struct Scopes {
    strings: Vec<Region>,
    comments: Vec<Region>,
}

impl StringDocument {
    pub fn new(text: &str) -> Self {
        Self::with_rules(text, SyntaxRules::default())
    }

    pub fn with_rules(text: &str, rules: SyntaxRules) -> Self {
        Self {
            chars: text.chars().collect(),
            rules,
        }
    }

    pub fn contents(&self) -> String {
        self.chars.iter().collect()
    }

    fn comment_starts_at(&self, offset: usize) -> bool {
        self.rules.line_comments.iter().any(|marker| {
            !marker.is_empty()
                && marker
                    .chars()
                    .enumerate()
                    .all(|(k, m)| self.chars.get(offset + k) == Some(&m))
        })
    }

    fn scan_scopes(&self) -> Scopes {
        let n = self.chars.len();
        let mut strings = Vec::new();
        let mut comments = Vec::new();
        let mut i = 0;
        while i < n {
            if self.chars[i] == '"' {
                let start = i;
                i += 1;
                while i < n {
                    match self.chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                strings.push(Region::new(start, i.min(n)));
            } else if self.comment_starts_at(i) {
                let start = i;
                while i < n && self.chars[i] != '\n' {
                    i += 1;
                }
                comments.push(Region::new(start, i));
            } else {
                i += 1;
            }
        }
        Scopes { strings, comments }
    }
}

impl Document for StringDocument {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    fn text(&self, region: Region) -> String {
        let end = region.end.min(self.chars.len());
        let begin = region.begin.min(end);
        self.chars[begin..end].iter().collect()
    }

    fn string_scope_at(&self, offset: usize) -> Option<Region> {
        self.scan_scopes()
            .strings
            .into_iter()
            .find(|r| r.begin < offset && offset < r.end)
    }

    fn comment_scope_at(&self, offset: usize) -> Option<Region> {
        let len = self.chars.len();
        let mut probe = offset;
        if offset == len && len > 0 && self.chars[len - 1] != '\n' {
            probe = len - 1;
        }
        self.scan_scopes()
            .comments
            .into_iter()
            .find(|r| r.contains(probe))
    }

    fn erase(&mut self, region: Region) -> Result<()> {
        ensure!(
            region.end <= self.chars.len(),
            "erase out of range: {:?} in buffer of {}",
            region,
            self.chars.len()
        );
        self.chars.drain(region.begin..region.end);
        Ok(())
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
        ensure!(
            offset <= self.chars.len(),
            "insert out of range: {} in buffer of {}",
            offset,
            self.chars.len()
        );
        self.chars.splice(offset..offset, text.chars());
        Ok(())
    }
}
