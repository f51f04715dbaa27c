//! Command table and executor.
//!
//! Each host-facing command maps 1:1 to a pure planner; [`execute`] runs
//! one command over a selection set. Every region is planned against the
//! current buffer and applied as one logical edit batch before the next
//! region is processed; offsets of the not-yet-processed regions and of the
//! already-produced results are shifted to account for each edit. The
//! resulting selection replaces the input as a unit.
//!
//! The host's `toggle-enabled` command is intentionally not in this table:
//! the enabled flag lives in [`EngineConfig`](crate::config::EngineConfig)
//! and is flipped with
//! [`EngineConfig::toggle_enabled`](crate::config::EngineConfig::toggle_enabled);
//! the engine only reads it.

mod delete;
mod kill;

use anyhow::Result;
use tracing::debug;

use crate::config::EngineConfig;
use crate::model::document::Document;
use crate::model::edit::{Edit, EditPlan};
use crate::model::region::SelRegion;
use crate::primitives::walk::Direction;

/// The editing commands the engine exposes to a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ForwardDelete,
    BackwardDelete,
    Kill,
    KillExpression,
    ForwardKillWord,
    BackwardKillWord,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::ForwardDelete,
        Command::BackwardDelete,
        Command::Kill,
        Command::KillExpression,
        Command::ForwardKillWord,
        Command::BackwardKillWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::ForwardDelete => "forward_delete",
            Command::BackwardDelete => "backward_delete",
            Command::Kill => "kill",
            Command::KillExpression => "kill_expression",
            Command::ForwardKillWord => "forward_kill_word",
            Command::BackwardKillWord => "backward_kill_word",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Run `command` over `selection`, mutating `doc` and returning the
/// replacement selection.
///
/// A disabled engine leaves both untouched. A command that finds nothing
/// actionable is a no-op for that region, never an error; `Err` only
/// reports a failed host mutation.
pub fn execute(
    doc: &mut dyn Document,
    selection: &[SelRegion],
    command: Command,
    config: &EngineConfig,
) -> Result<Vec<SelRegion>> {
    if !config.enabled {
        return Ok(selection.to_vec());
    }
    debug!(
        command = command.name(),
        regions = selection.len(),
        "executing structural edit"
    );

    let mut pending: Vec<SelRegion> = selection.to_vec();
    let mut done: Vec<SelRegion> = Vec::with_capacity(pending.len());

    for index in 0..pending.len() {
        let region = pending[index];
        let plan = plan_for(&*doc, region, command, config);

        for edit in &plan.edits {
            let edited = edit.region();
            match edit {
                Edit::Erase { region } => doc.erase(*region)?,
                Edit::Replace { region, text } => doc.replace(*region, text)?,
            }
            let old_len = edited.len();
            let new_len = edit.inserted_len();
            for later in pending.iter_mut().skip(index + 1) {
                later.adjust_for_edit(edited.begin, old_len, new_len);
            }
            for earlier in done.iter_mut() {
                earlier.adjust_for_edit(edited.begin, old_len, new_len);
            }
        }
        done.push(plan.caret);
    }

    Ok(done)
}

fn plan_for(
    doc: &dyn Document,
    region: SelRegion,
    command: Command,
    config: &EngineConfig,
) -> EditPlan {
    match command {
        Command::ForwardDelete => delete::plan_delete(doc, region, Direction::Forward, config),
        Command::BackwardDelete => delete::plan_delete(doc, region, Direction::Backward, config),
        Command::Kill => kill::plan_kill(doc, region, false),
        Command::KillExpression => kill::plan_kill(doc, region, true),
        Command::ForwardKillWord => kill::plan_kill_word(doc, region, Direction::Forward),
        Command::BackwardKillWord => kill::plan_kill_word(doc, region, Direction::Backward),
    }
}
