use crate::model::document::Document;
use crate::primitives::chars::{classify, is_word_char, CharClass, BRACKET_PAIRS};
use crate::primitives::walk::{walk, Direction};
use crate::structure::brackets::find_enclosing_brackets;
use crate::structure::words::word_at;

/// Bounds of the expression enclosing `point`: the surrounding string
/// literal if `point` is inside one, otherwise the innermost enclosing
/// bracket pair (the candidate whose opener is numerically greatest).
///
/// The pair is `(begin, end)` for `Forward` and flipped for `Backward`.
/// `None` when nothing encloses `point` — including when the innermost
/// opener has no matching closer.
pub fn expression_at(
    doc: &dyn Document,
    point: usize,
    direction: Direction,
) -> Option<(usize, usize)> {
    if let Some(scope) = doc.string_scope_at(point) {
        return Some(orient((scope.begin, scope.end), direction));
    }

    let mut innermost: Option<(usize, Option<usize>)> = None;
    for (open, close) in BRACKET_PAIRS {
        let (left, right) = find_enclosing_brackets(doc, point, open, close);
        if let Some(l) = left {
            if innermost.map_or(true, |(best, _)| l > best) {
                innermost = Some((l, right));
            }
        }
    }
    let (left, right) = innermost?;
    Some(orient((left, right?), direction))
}

/// The next expression or word at or after `point`, as an ordered span.
///
/// Whitespace is skipped. The first interesting character decides:
/// - a word character returns its word bounds (unless `skip_words`);
/// - an opening bracket or string delimiter returns the expression it
///   starts;
/// - a closing bracket means there is nothing left to consume inside the
///   current form and stops the search with `None`, unless
///   `skip_end_brackets` lets the walk continue past it.
pub fn next_expression(
    doc: &dyn Document,
    point: usize,
    skip_end_brackets: bool,
    skip_words: bool,
) -> Option<(usize, usize)> {
    for (i, c) in walk(doc, point, Direction::Forward) {
        if c.is_whitespace() {
            continue;
        }
        if !skip_words && is_word_char(c) {
            return word_at(doc, i, Direction::Forward);
        }
        match classify(c) {
            CharClass::BracketOpen | CharClass::StringDelim => {
                return expression_at(doc, i + 1, Direction::Forward);
            }
            CharClass::BracketClose if !skip_end_brackets => return None,
            _ => {}
        }
    }
    None
}

/// Mirror of [`next_expression`], walking leftward from `point`.
///
/// The character at `point` itself is considered first (clamped to the last
/// character of the buffer). Returned spans are ordered `(begin, end)`.
pub fn previous_expression(
    doc: &dyn Document,
    point: usize,
    skip_end_brackets: bool,
    skip_words: bool,
) -> Option<(usize, usize)> {
    for (i, c) in walk(doc, point, Direction::Backward) {
        if c.is_whitespace() {
            continue;
        }
        if !skip_words && is_word_char(c) {
            return word_at(doc, i, Direction::Forward);
        }
        match classify(c) {
            CharClass::BracketClose | CharClass::StringDelim => {
                return expression_at(doc, i, Direction::Forward);
            }
            CharClass::BracketOpen if !skip_end_brackets => return None,
            _ => {}
        }
    }
    None
}

/// First non-whitespace character at or after `point`.
pub fn next_char(doc: &dyn Document, point: usize) -> Option<(usize, char)> {
    walk(doc, point, Direction::Forward).find(|(_, c)| !c.is_whitespace())
}

/// First non-whitespace character at or before `point`.
pub fn previous_char(doc: &dyn Document, point: usize) -> Option<(usize, char)> {
    walk(doc, point, Direction::Backward).find(|(_, c)| !c.is_whitespace())
}

fn orient(span: (usize, usize), direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Forward => span,
        Direction::Backward => (span.1, span.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::StringDocument;

    #[test]
    fn test_expression_at_brackets() {
        let doc = StringDocument::new("(foo [bar] baz)");
        assert_eq!(expression_at(&doc, 2, Direction::Forward), Some((0, 15)));
        assert_eq!(expression_at(&doc, 7, Direction::Forward), Some((5, 10)));
    }

    #[test]
    fn test_expression_at_picks_innermost_kind() {
        let doc = StringDocument::new("{a (b [c] d) e}");
        assert_eq!(expression_at(&doc, 8, Direction::Forward), Some((6, 9)));
        assert_eq!(expression_at(&doc, 5, Direction::Forward), Some((3, 12)));
        assert_eq!(expression_at(&doc, 1, Direction::Forward), Some((0, 15)));
    }

    #[test]
    fn test_expression_at_backward_flips() {
        let doc = StringDocument::new("(foo)");
        assert_eq!(expression_at(&doc, 2, Direction::Backward), Some((5, 0)));
    }

    #[test]
    fn test_expression_at_string_scope_wins() {
        let doc = StringDocument::new("(a \"b c\" d)");
        assert_eq!(expression_at(&doc, 5, Direction::Forward), Some((3, 8)));
        assert_eq!(expression_at(&doc, 5, Direction::Backward), Some((8, 3)));
    }

    #[test]
    fn test_expression_at_nothing_encloses() {
        let doc = StringDocument::new("foo bar");
        assert_eq!(expression_at(&doc, 2, Direction::Forward), None);
    }

    #[test]
    fn test_expression_at_unclosed_inner_hides_outer() {
        // The innermost opener has no closer, so the search reports none
        // even though an outer pair is complete. The raw bracket count does
        // not rescue a broken inner form.
        let doc = StringDocument::new("{ ( }");
        assert_eq!(expression_at(&doc, 3, Direction::Forward), None);
    }

    #[test]
    fn test_next_expression_word() {
        let doc = StringDocument::new("  foo (bar)");
        assert_eq!(next_expression(&doc, 0, false, false), Some((2, 5)));
    }

    #[test]
    fn test_next_expression_skip_words() {
        let doc = StringDocument::new("  foo (bar)");
        assert_eq!(next_expression(&doc, 0, false, true), Some((6, 11)));
    }

    #[test]
    fn test_next_expression_bracket_and_string() {
        let doc = StringDocument::new(" (a b) x");
        assert_eq!(next_expression(&doc, 0, false, false), Some((1, 6)));
        let doc = StringDocument::new(" \"hi\" x");
        assert_eq!(next_expression(&doc, 0, false, false), Some((1, 5)));
    }

    #[test]
    fn test_next_expression_stops_at_end_bracket() {
        let doc = StringDocument::new("(a )b");
        assert_eq!(next_expression(&doc, 2, false, false), None);
        // ...unless end brackets are skipped, which finds the word beyond.
        assert_eq!(next_expression(&doc, 2, true, false), Some((4, 5)));
    }

    #[test]
    fn test_next_expression_exhausted() {
        let doc = StringDocument::new("a   ");
        assert_eq!(next_expression(&doc, 1, false, false), None);
    }

    #[test]
    fn test_previous_expression_word_and_form() {
        let doc = StringDocument::new("foo (bar) ");
        assert_eq!(previous_expression(&doc, 9, false, false), Some((4, 9)));
        let doc = StringDocument::new("foo  ");
        assert_eq!(previous_expression(&doc, 4, false, false), Some((0, 3)));
    }

    #[test]
    fn test_previous_expression_stops_at_open_bracket() {
        let doc = StringDocument::new("(  x");
        assert_eq!(previous_expression(&doc, 1, false, false), None);
        let doc = StringDocument::new("x (  ");
        assert_eq!(previous_expression(&doc, 4, true, false), Some((0, 1)));
    }

    #[test]
    fn test_nearest_characters() {
        let doc = StringDocument::new("a   b");
        assert_eq!(next_char(&doc, 1), Some((4, 'b')));
        assert_eq!(previous_char(&doc, 3), Some((0, 'a')));
        assert_eq!(next_char(&doc, 5), None);
    }
}
