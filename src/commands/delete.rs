//! Planners for the structural delete command.
//!
//! A delete is planned per selection region against a read-only document.
//! Carets get the scope-aware state machine below; true selections are
//! erased verbatim, or routed through the strict planner that refuses to
//! take half of an expression with it.

use crate::config::EngineConfig;
use crate::model::document::Document;
use crate::model::edit::{Edit, EditPlan};
use crate::model::region::{Region, SelRegion};
use crate::primitives::chars::{classify, is_word_char, CharClass};
use crate::primitives::walk::Direction;
use crate::structure::brackets::expression_is_blank;
use crate::structure::expressions::{expression_at, next_expression};

pub(crate) fn plan_delete(
    doc: &dyn Document,
    region: SelRegion,
    direction: Direction,
    config: &EngineConfig,
) -> EditPlan {
    if !region.is_caret() {
        if config.strict_mode {
            return plan_strict_selection_delete(doc, region.region());
        }
        return EditPlan::erase(region.region());
    }

    let point = region.begin();
    let adjacent = match direction {
        Direction::Forward => doc.char_at(point),
        Direction::Backward => point.checked_sub(1).and_then(|i| doc.char_at(i)),
    };
    // Nothing adjacent at a buffer edge: the standard delete no-ops.
    let Some(adjacent) = adjacent else {
        return plan_standard_delete(doc, point, direction);
    };

    if doc.comment_scope_at(point).is_some() {
        return plan_standard_delete(doc, point, direction);
    }

    let adjacent_class = classify(adjacent);

    if adjacent_class == CharClass::StringDelim {
        if doc.string_scope_at(point).is_some() {
            // Just past an escaped quote: take the whole escape sequence.
            if direction == Direction::Backward
                && point >= 2
                && doc.char_at(point - 2) == Some('\\')
            {
                return EditPlan::erase(Region::new(point - 2, point));
            }
            return plan_remove_empty_expression(doc, point, direction);
        }
        // The delimiter of a string we are not inside: step over it.
        return EditPlan::hop(direction.step(point));
    }

    if doc.string_scope_at(point).is_some() {
        if direction == Direction::Forward
            && point + 2 <= doc.len()
            && doc.char_at(point) == Some('\\')
            && doc.char_at(point + 1) == Some('"')
        {
            return EditPlan::erase(Region::new(point, point + 2));
        }
        return plan_standard_delete(doc, point, direction);
    }

    let skip_class = match direction {
        Direction::Forward => CharClass::BracketOpen,
        Direction::Backward => CharClass::BracketClose,
    };
    if adjacent_class == skip_class {
        return EditPlan::hop(direction.step(point));
    }
    if adjacent_class != CharClass::Plain {
        return plan_remove_empty_expression(doc, point, direction);
    }

    plan_standard_delete(doc, point, direction)
}

/// Erase exactly one character in `direction`. At a buffer edge there is
/// nothing to erase and the caret stays put.
pub(crate) fn plan_standard_delete(
    doc: &dyn Document,
    point: usize,
    direction: Direction,
) -> EditPlan {
    match direction {
        Direction::Forward => {
            if point < doc.len() {
                EditPlan::erase(Region::new(point, point + 1))
            } else {
                EditPlan::hop(point)
            }
        }
        Direction::Backward => {
            if point > 0 {
                EditPlan::erase(Region::new(point - 1, point))
            } else {
                EditPlan::hop(0)
            }
        }
    }
}

/// Erase the expression enclosing `point` if its interior is blank;
/// otherwise hop one step in `fail_direction` and leave the buffer alone.
/// With no enclosing expression at all, fall back to the standard delete.
pub(crate) fn plan_remove_empty_expression(
    doc: &dyn Document,
    point: usize,
    fail_direction: Direction,
) -> EditPlan {
    match expression_at(doc, point, Direction::Forward) {
        None => plan_standard_delete(doc, point, fail_direction),
        Some((begin, end)) => {
            let expr = Region::new(begin, end);
            if expression_is_blank(doc, expr) {
                EditPlan::erase(expr)
            } else {
                EditPlan::hop(fail_direction.step(point))
            }
        }
    }
}

/// Deletion of a multi-character selection that never unbalances the
/// buffer.
///
/// Walks the selection: characters inside string or comment scopes are
/// removed one by one; elsewhere, whole expressions are consumed via
/// [`next_expression`]. Words may be clipped to the selection, but a
/// bracketed or string expression is only removed when fully contained —
/// one that starts before the selection is skipped, one that ends past it
/// stops the walk. The survivors are trimmed and written back as a single
/// replacement.
pub(crate) fn plan_strict_selection_delete(doc: &dyn Document, region: Region) -> EditPlan {
    let (begin, end) = (region.begin, region.end);
    let mut keep = vec![true; end - begin];

    let mut point = begin;
    while point < end {
        if doc.comment_scope_at(point).is_some() || doc.string_scope_at(point).is_some() {
            keep[point - begin] = false;
            point += 1;
            continue;
        }

        let Some((mut a, mut b)) = next_expression(doc, point, true, false) else {
            break;
        };
        let found_word = doc.char_at(a).map_or(false, is_word_char);
        if found_word {
            if a > end {
                break;
            }
            a = a.max(begin);
            b = b.min(end);
        }
        if b > end {
            break;
        }
        if a >= begin {
            for offset in a..b {
                keep[offset - begin] = false;
            }
        }
        point = b;
    }

    let kept: String = doc
        .text(region)
        .chars()
        .zip(keep.iter())
        .filter(|(_, kept)| **kept)
        .map(|(c, _)| c)
        .collect();
    EditPlan {
        edits: vec![Edit::Replace {
            region,
            text: kept.trim().to_string(),
        }],
        caret: SelRegion::caret(begin),
    }
}
