//! Schedule conflict detection.
//!
//! Flags entries whose resolved time ranges overlap on a track that does
//! not intend simultaneous occupancy: two entries both scoped solely to
//! the same track. Banners and subset entries occupy tracks by design
//! and are never flagged; boundless entries are skipped entirely.

use crate::models::{Applicability, ScheduleEntry, Track};

/// Sets `has_conflict` on every entry participating in at least one
/// same-track overlap. All other flags are cleared, so repeated calls
/// are idempotent.
pub fn mark_conflicts(tracks: &[Track], entries: &mut [ScheduleEntry]) {
    for e in entries.iter_mut() {
        e.has_conflict = false;
    }

    for track in tracks {
        // Indices of bounded entries scoped solely to this track,
        // in start order.
        let mut scoped: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| single_scoped(e, &track.id) && e.is_bounded())
            .map(|(i, _)| i)
            .collect();
        scoped.sort_by_key(|&i| entries[i].start_min);

        for (pos, &i) in scoped.iter().enumerate() {
            let end_i = match entries[i].end_min() {
                Some(end) => end,
                None => continue,
            };
            for &j in &scoped[pos + 1..] {
                let start_j = match entries[j].start_min {
                    Some(start) => start,
                    None => continue,
                };
                if start_j >= end_i {
                    // Sorted by start: nothing later overlaps i either.
                    break;
                }
                entries[i].has_conflict = true;
                entries[j].has_conflict = true;
            }
        }
    }
}

/// Whether the entry occupies `track_id` exclusively: its own track,
/// no subset list, and not a banner.
fn single_scoped(entry: &ScheduleEntry, track_id: &str) -> bool {
    entry.track_id.as_deref() == Some(track_id)
        && matches!(
            entry.applicability,
            Applicability::Single | Applicability::None
        )
        && !entry.is_banner_entry()
}
