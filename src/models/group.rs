//! Render group model.
//!
//! `RenderGroup` is the engine's sole output type: an ordered partition
//! of the input entries into banners, singletons, and overlap bands.
//!
//! # Invariants
//! - A `Band` never has fewer than 2 items; single-member bands collapse
//!   to `Single` at flush time.
//! - Banner entries are never part of a `Band`.
//! - The group sequence losslessly partitions the input: every entry
//!   appears in exactly one group, in input order across groups.

use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// One unit of the call-sheet schedule view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderGroup {
    /// A full-width banner; always its own group.
    Banner { item: ScheduleEntry },
    /// An entry rendered on its own row.
    Single { item: ScheduleEntry },
    /// A maximal cluster of transitively-overlapping entries rendered
    /// side by side. `band_start`/`band_end` cover all members.
    Band {
        items: Vec<ScheduleEntry>,
        band_start: i64,
        band_end: i64,
    },
}

impl RenderGroup {
    /// Number of entries carried by this group.
    pub fn len(&self) -> usize {
        match self {
            RenderGroup::Banner { .. } | RenderGroup::Single { .. } => 1,
            RenderGroup::Band { items, .. } => items.len(),
        }
    }

    /// Whether the group carries no entries. Bands are never empty, so
    /// this is always `false`; provided for the conventional pairing
    /// with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entries in this group.
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        match self {
            RenderGroup::Banner { item } | RenderGroup::Single { item } => {
                std::slice::from_ref(item).iter()
            }
            RenderGroup::Band { items, .. } => items.iter(),
        }
    }
}
