//! Schedule layout engine.
//!
//! Wires the pipeline together: time resolution, conflict detection,
//! and overlap-band construction, in that order. The result is the
//! ordered `RenderGroup` list the call-sheet renderers consume.
//!
//! The computation is pure and synchronous; invoke it whenever the entry
//! or track collections change and memoize on input identity upstream.

use log::debug;

use crate::layout::build_render_groups;
use crate::models::{RenderGroup, ScheduleEntry, Track};
use crate::timing::{mark_conflicts, TimeResolver};

/// The schedule view's computation pipeline.
///
/// # Example
///
/// ```
/// use callsheet_engine::engine::LayoutEngine;
/// use callsheet_engine::models::{RenderGroup, ScheduleEntry, Track};
///
/// let tracks = vec![
///     Track::lane("photo").with_name("Photo"),
///     Track::lane("video").with_name("Video"),
/// ];
/// let entries = vec![
///     ScheduleEntry::new("a").on_track("photo").with_start(540).with_duration(60),
///     ScheduleEntry::new("b").on_track("video").with_start(570).with_duration(60),
/// ];
///
/// let groups = LayoutEngine::new().compute(&tracks, &entries);
/// assert!(matches!(groups[0], RenderGroup::Band { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    resolver: TimeResolver,
}

impl LayoutEngine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self {
            resolver: TimeResolver::new(),
        }
    }

    /// Sets the fallback duration for entries without one.
    pub fn with_default_duration(mut self, minutes: i64) -> Self {
        self.resolver = self.resolver.with_default_duration(minutes);
        self
    }

    /// Sets the day start anchoring the first derived entry of each
    /// track that has no anchor of its own.
    pub fn with_day_start(mut self, minutes: i64) -> Self {
        self.resolver = self.resolver.with_day_start(minutes);
        self
    }

    /// Computes the ordered render groups for one schedule.
    ///
    /// Entries are processed in the given display order, which for
    /// bandable members should be non-decreasing in resolved start time
    /// (the band builder's precondition). Every input entry appears in
    /// exactly one output group.
    pub fn compute(&self, tracks: &[Track], entries: &[ScheduleEntry]) -> Vec<RenderGroup> {
        let mut resolved = self.resolver.resolve(tracks, entries);
        mark_conflicts(tracks, &mut resolved);

        let conflicts = resolved.iter().filter(|e| e.has_conflict).count();
        let groups = build_render_groups(&resolved);
        debug!(
            "laid out {} entries into {} groups ({} in conflict)",
            entries.len(),
            groups.len(),
            conflicts
        );
        groups
    }
}
