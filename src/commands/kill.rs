//! Planners for the kill commands: cut to a structural boundary without a
//! pre-existing selection.

use crate::model::document::Document;
use crate::model::edit::{Edit, EditPlan};
use crate::model::region::{Region, SelRegion};
use crate::primitives::walk::Direction;
use crate::structure::brackets::expression_is_blank;
use crate::structure::expressions::expression_at;
use crate::structure::words::{next_word, previous_word};

/// Kill from the caret within the enclosing expression.
///
/// An empty enclosing expression is removed whole. Otherwise
/// `expression_mode` erases the whole interior (caret lands just inside the
/// opener), while the plain kill erases from the caret up to the closing
/// delimiter (caret stays). With no enclosing expression the kill runs to
/// end-of-line: from line start in `expression_mode`, from the caret
/// otherwise. Non-caret regions are simply erased.
pub(crate) fn plan_kill(doc: &dyn Document, region: SelRegion, expression_mode: bool) -> EditPlan {
    if !region.is_caret() {
        return EditPlan::erase(region.region());
    }
    let point = region.anchor;

    match expression_at(doc, point, Direction::Forward) {
        Some((begin, end)) => {
            let expr = Region::new(begin, end);
            if expression_is_blank(doc, expr) {
                EditPlan::erase(expr)
            } else if expression_mode {
                EditPlan {
                    edits: vec![Edit::Erase {
                        region: Region::new(begin + 1, end - 1),
                    }],
                    caret: SelRegion::caret(begin + 1),
                }
            } else {
                EditPlan {
                    edits: vec![Edit::Erase {
                        region: Region::new(point, end - 1),
                    }],
                    caret: SelRegion::caret(point),
                }
            }
        }
        None => {
            let line = doc.line_span(point);
            let from = if expression_mode { line.begin } else { point };
            EditPlan::erase(Region::new(from, line.end))
        }
    }
}

/// Erase the next (or previous) word. Leaves the region untouched when
/// there is no word left in that direction, or when it is not a caret.
pub(crate) fn plan_kill_word(
    doc: &dyn Document,
    region: SelRegion,
    direction: Direction,
) -> EditPlan {
    if !region.is_caret() {
        return EditPlan::unchanged(region);
    }
    let point = region.anchor;
    let found = match direction {
        Direction::Forward => next_word(doc, point),
        Direction::Backward => previous_word(doc, point),
    };
    match found {
        Some((begin, end)) => EditPlan::erase(Region::new(begin, end)),
        None => EditPlan::unchanged(region),
    }
}
