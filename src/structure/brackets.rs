use crate::model::document::Document;
use crate::model::region::Region;
use crate::primitives::walk::{walk, Direction};

/// Find the innermost pair of `open`/`close` brackets around `point`.
///
/// Scans left from `point - 1`, counting `+1` for `open` and `-1` for
/// `close`; the first position where the running count reaches `1` is the
/// enclosing opener. The symmetric rightward scan from `point` returns the
/// position just past the enclosing closer. Either side may be `None` when
/// the buffer is unbalanced in that direction.
///
/// This is a raw character count: brackets inside string literals or
/// comments are counted like any other. Callers that need scope-correct
/// results must gate on the document's scope queries first, the way
/// [`crate::structure::expressions::expression_at`] handles strings.
pub fn find_enclosing_brackets(
    doc: &dyn Document,
    point: usize,
    open: char,
    close: char,
) -> (Option<usize>, Option<usize>) {
    let mut left = None;
    if point > 0 {
        let mut count = 0i64;
        for (i, c) in walk(doc, point - 1, Direction::Backward) {
            if c == open {
                count += 1;
            } else if c == close {
                count -= 1;
            }
            if count == 1 {
                left = Some(i);
                break;
            }
        }
    }

    let mut right = None;
    let mut count = 0i64;
    for (i, c) in walk(doc, point, Direction::Forward) {
        if c == open {
            count += 1;
        } else if c == close {
            count -= 1;
        }
        if count == -1 {
            right = Some(i + 1);
            break;
        }
    }

    (left, right)
}

/// True when the expression's interior (delimiters stripped) is all
/// whitespace. Spans too short to have an interior count as blank.
pub fn expression_is_blank(doc: &dyn Document, region: Region) -> bool {
    if region.len() <= 2 {
        return true;
    }
    doc.text(Region::new(region.begin + 1, region.end - 1))
        .chars()
        .all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::StringDocument;

    #[test]
    fn test_enclosing_simple() {
        let doc = StringDocument::new("(foo)");
        assert_eq!(
            find_enclosing_brackets(&doc, 2, '(', ')'),
            (Some(0), Some(5))
        );
    }

    #[test]
    fn test_enclosing_skips_balanced_siblings() {
        let doc = StringDocument::new("(a (b) c)");
        // point after the inner pair still resolves to the outer pair
        assert_eq!(
            find_enclosing_brackets(&doc, 7, '(', ')'),
            (Some(0), Some(9))
        );
    }

    #[test]
    fn test_enclosing_nested_picks_inner() {
        let doc = StringDocument::new("(a (b) c)");
        assert_eq!(
            find_enclosing_brackets(&doc, 4, '(', ')'),
            (Some(3), Some(6))
        );
    }

    #[test]
    fn test_unbalanced_sides() {
        let doc = StringDocument::new("(foo");
        assert_eq!(find_enclosing_brackets(&doc, 2, '(', ')'), (Some(0), None));
        let doc = StringDocument::new("foo)");
        assert_eq!(find_enclosing_brackets(&doc, 2, '(', ')'), (None, Some(4)));
    }

    #[test]
    fn test_not_enclosed() {
        let doc = StringDocument::new("(a) (b)");
        assert_eq!(find_enclosing_brackets(&doc, 3, '(', ')'), (None, None));
    }

    #[test]
    fn test_point_at_buffer_start() {
        let doc = StringDocument::new("(x)");
        assert_eq!(find_enclosing_brackets(&doc, 0, '(', ')'), (None, None));
    }

    #[test]
    fn test_opener_at_offset_zero() {
        let doc = StringDocument::new("[foo]");
        assert_eq!(
            find_enclosing_brackets(&doc, 2, '[', ']'),
            (Some(0), Some(5))
        );
    }

    #[test]
    fn test_blank_interior() {
        let doc = StringDocument::new("()  (  )  (x)");
        assert!(expression_is_blank(&doc, Region::new(0, 2)));
        assert!(expression_is_blank(&doc, Region::new(4, 8)));
        assert!(!expression_is_blank(&doc, Region::new(10, 13)));
    }
}
