//! Proposal renumbering: canonical `NNNN-slug.md` filenames in sorted order.
//!
//! Split into a pure planner (names in, target names out) and an applier
//! that lists the directory and performs renames one at a time.

mod apply;
mod plan;

pub use apply::{apply_plan, list_markdown_entries, renumber_dir, RenumberOptions};
pub use plan::{plan_renames, PlannedEntry, RenamePlan};
