//! Day-level schedule metrics.
//!
//! Computed from a finished `RenderGroup` sequence for the call sheet's
//! header strip: entry counts, the day's covered span, scheduled minutes
//! per track, and how many entries are in conflict.

use std::collections::HashMap;

use crate::models::RenderGroup;

/// Summary metrics for one computed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    /// Total entries across all groups.
    pub entry_count: usize,
    /// Banner groups.
    pub banner_count: usize,
    /// Overlap bands.
    pub band_count: usize,
    /// Entries flagged by the conflict detector.
    pub conflict_count: usize,
    /// Earliest resolved start (minutes), if any entry is bounded.
    pub first_start_min: Option<i64>,
    /// Latest resolved end (minutes), if any entry is bounded.
    pub last_end_min: Option<i64>,
    /// Sum of bounded entry durations (minutes).
    pub total_scheduled_min: i64,
    /// Bounded minutes per owning track.
    pub busy_min_by_track: HashMap<String, i64>,
}

impl ScheduleSummary {
    /// Computes summary metrics from the engine's output.
    pub fn calculate(groups: &[RenderGroup]) -> Self {
        let mut summary = Self {
            entry_count: 0,
            banner_count: 0,
            band_count: 0,
            conflict_count: 0,
            first_start_min: None,
            last_end_min: None,
            total_scheduled_min: 0,
            busy_min_by_track: HashMap::new(),
        };

        for group in groups {
            match group {
                RenderGroup::Banner { .. } => summary.banner_count += 1,
                RenderGroup::Band { .. } => summary.band_count += 1,
                RenderGroup::Single { .. } => {}
            }

            for entry in group.entries() {
                summary.entry_count += 1;
                if entry.has_conflict {
                    summary.conflict_count += 1;
                }

                let Some(span) = entry.span() else { continue };
                summary.first_start_min = Some(
                    summary
                        .first_start_min
                        .map_or(span.start_min, |s| s.min(span.start_min)),
                );
                summary.last_end_min = Some(
                    summary
                        .last_end_min
                        .map_or(span.end_min, |e| e.max(span.end_min)),
                );
                summary.total_scheduled_min += span.duration_min();
                if let Some(track_id) = &entry.track_id {
                    *summary
                        .busy_min_by_track
                        .entry(track_id.clone())
                        .or_insert(0) += span.duration_min();
                }
            }
        }

        summary
    }

    /// The day's covered span (minutes), when any entry is bounded.
    pub fn day_span_min(&self) -> Option<i64> {
        Some(self.last_end_min? - self.first_start_min?)
    }
}
