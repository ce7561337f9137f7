//! Start-time and duration resolution.
//!
//! # Algorithm
//!
//! A single pass over the entries in display order, carrying one running
//! `previous end` per track:
//!
//! 1. An entry with a pinned start keeps it verbatim (`Explicit`).
//! 2. Otherwise the entry starts where its track's previous entry ended,
//!    or at the track's anchor if it is the first on that track
//!    (`Derived`).
//! 3. A missing (or negative) duration becomes the configured default.
//!
//! The fold is sequential per track: each derived value depends on the
//! immediately preceding same-track entry. Banners never participate:
//! they neither read nor update any lane's running end, so an unpinned
//! banner stays boundless and the lane chains continue across it.

use std::collections::HashMap;

use crate::models::{ScheduleEntry, TimeSource, Track};

/// Fallback duration (minutes) for entries that do not carry one.
pub const DEFAULT_DURATION_MIN: i64 = 30;

/// Resolves entry start times and durations.
///
/// # Example
///
/// ```
/// use callsheet_engine::models::{ScheduleEntry, Track};
/// use callsheet_engine::timing::TimeResolver;
///
/// let tracks = vec![Track::lane("photo").with_name("Photo")];
/// let entries = vec![
///     ScheduleEntry::new("a").on_track("photo").with_start(540).with_duration(60),
///     ScheduleEntry::new("b").on_track("photo"),
/// ];
///
/// let resolver = TimeResolver::new();
/// let resolved = resolver.resolve(&tracks, &entries);
/// // "b" chains after "a": 540 + 60 = 600
/// assert_eq!(resolved[1].start_min, Some(600));
/// ```
#[derive(Debug, Clone)]
pub struct TimeResolver {
    default_duration_min: i64,
    day_start_min: i64,
}

impl TimeResolver {
    /// Creates a resolver with a 30-minute default duration and a
    /// midnight day start.
    pub fn new() -> Self {
        Self {
            default_duration_min: DEFAULT_DURATION_MIN,
            day_start_min: 0,
        }
    }

    /// Sets the fallback duration for entries without one.
    pub fn with_default_duration(mut self, minutes: i64) -> Self {
        self.default_duration_min = minutes.max(0);
        self
    }

    /// Sets the day start used as the anchor for tracks without their
    /// own `anchor_min`.
    pub fn with_day_start(mut self, minutes: i64) -> Self {
        self.day_start_min = minutes;
        self
    }

    /// Annotates every entry with `start_min`, `duration_min`, and
    /// `time_source`. Input order is preserved; no entry is dropped.
    pub fn resolve(&self, tracks: &[Track], entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
        let mut previous_end: HashMap<String, i64> = HashMap::new();
        let mut resolved = Vec::with_capacity(entries.len());

        for entry in entries {
            let mut e = entry.clone();

            e.time_source = if e.start_min.is_some() {
                TimeSource::Explicit
            } else {
                TimeSource::Derived
            };

            if e.duration_min.is_none_or(|d| d < 0) {
                e.duration_min = Some(self.default_duration_min);
            }

            if e.is_banner_entry() {
                // Banners sit outside every lane chain.
                resolved.push(e);
                continue;
            }

            if e.start_min.is_none() {
                if let Some(track_id) = e.track_id.clone() {
                    let anchor = previous_end
                        .get(&track_id)
                        .copied()
                        .unwrap_or_else(|| self.track_anchor(tracks, &track_id));
                    e.start_min = Some(anchor);
                }
                // No track: nothing to chain from, stays boundless.
            }

            if let (Some(track_id), Some(end)) = (e.track_id.clone(), e.end_min()) {
                previous_end.insert(track_id, end);
            }

            resolved.push(e);
        }

        resolved
    }

    fn track_anchor(&self, tracks: &[Track], track_id: &str) -> i64 {
        crate::models::track_by_id(tracks, track_id)
            .and_then(|t| t.anchor_min)
            .unwrap_or(self.day_start_min)
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::new()
    }
}
