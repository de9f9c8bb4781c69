//! Pure rename planning. No filesystem access happens here.

use serde::Serialize;
use std::collections::HashMap;

use crate::collate;
use crate::naming::{self, DigitPolicy};
use crate::output::RenameWarning;

/// One qualifying entry and the name it should have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    /// 1-based position in the sorted set.
    pub sequence: usize,
    pub from: String,
    pub to: String,
}

impl PlannedEntry {
    pub fn is_rename(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered renames for one directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    pub slug_digits: DigitPolicy,
    /// In sorted order; renames must be applied in this order.
    pub entries: Vec<PlannedEntry>,
    pub warnings: Vec<RenameWarning>,
}

impl RenamePlan {
    pub fn renames(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries.iter().filter(|e| e.is_rename())
    }

    pub fn rename_count(&self) -> usize {
        self.renames().count()
    }
}

/// Build the rename plan for a set of directory entry names.
///
/// Names not ending in `.md` are dropped. The rest are sorted with
/// [`collate::locale_cmp`] and numbered from 1.
pub fn plan_renames<S: AsRef<str>>(names: &[S], slug_digits: DigitPolicy) -> RenamePlan {
    let mut bases: Vec<&str> = names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| naming::is_markdown(name))
        .collect();
    collate::sort_names(&mut bases);

    let entries: Vec<PlannedEntry> = bases
        .iter()
        .enumerate()
        .map(|(index, base)| PlannedEntry {
            sequence: index + 1,
            from: base.to_string(),
            to: naming::canonical_name(base, index, slug_digits),
        })
        .collect();

    let warnings = detect_collisions(&entries);

    RenamePlan {
        slug_digits,
        entries,
        warnings,
    }
}

/// Flag renames whose target is still occupied when they run.
///
/// Renames run in plan order, so a target is blocked when it equals the
/// current name of a later entry that has not moved yet.
fn detect_collisions(entries: &[PlannedEntry]) -> Vec<RenameWarning> {
    let position: HashMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.from.as_str(), i))
        .collect();

    let mut warnings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if !entry.is_rename() {
            continue;
        }
        if let Some(&j) = position.get(entry.to.as_str()) {
            if j > i {
                warnings.push(RenameWarning {
                    kind: "target_occupied".to_string(),
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                    message: format!(
                        "Target '{}' is still held by an entry renamed later in the sequence",
                        entry.to
                    ),
                });
            }
        }
    }

    warnings
}
