use crate::model::document::Document;
use crate::primitives::chars::is_word_char;
use crate::primitives::walk::{walk, Direction};

/// Bounds of the word containing `point`, or `None` when the character at
/// `point` is not word-like (including at end-of-buffer, where there is no
/// character). At buffer edges the bounds default to `0` and `len`. The
/// pair is flipped for `Backward`.
pub fn word_at(doc: &dyn Document, point: usize, direction: Direction) -> Option<(usize, usize)> {
    let c = doc.char_at(point)?;
    if !is_word_char(c) {
        return None;
    }

    let mut begin = 0;
    for (i, c) in walk(doc, point, Direction::Backward) {
        if !is_word_char(c) {
            begin = i + 1;
            break;
        }
    }
    let mut end = doc.len();
    for (i, c) in walk(doc, point, Direction::Forward) {
        if !is_word_char(c) {
            end = i;
            break;
        }
    }

    match direction {
        Direction::Forward => Some((begin, end)),
        Direction::Backward => Some((end, begin)),
    }
}

/// The first maximal run of word characters at or after `point`.
pub fn next_word(doc: &dyn Document, point: usize) -> Option<(usize, usize)> {
    let mut start = None;
    for (i, c) in walk(doc, point, Direction::Forward) {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            return Some((s, i));
        }
    }
    start.map(|s| (s, doc.len()))
}

/// The first maximal run of word characters strictly before `point`.
pub fn previous_word(doc: &dyn Document, point: usize) -> Option<(usize, usize)> {
    if point == 0 {
        return None;
    }
    let mut end = None;
    for (i, c) in walk(doc, point - 1, Direction::Backward) {
        if is_word_char(c) {
            if end.is_none() {
                end = Some(i + 1);
            }
        } else if let Some(e) = end {
            return Some((i + 1, e));
        }
    }
    end.map(|e| (0, e))
}
