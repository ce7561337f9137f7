//! Schedule entry model.
//!
//! An entry is the unit being scheduled: a shot, a company move, a meal
//! break, a crew call. Entries carry optional pinned times; entries
//! without one receive a derived time by chaining after the previous
//! entry on the same track.
//!
//! # Time Representation
//! All times are integer minutes from midnight of the shoot day. The
//! nullable fields use `Option<i64>`: `None` marks the value as absent,
//! and an entry missing either its start or its duration is *boundless*,
//! excluded from conflict and banding math but never dropped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TimeSpan;

/// Which track(s) an entry is relevant to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    /// Relevant to every lane; rendered full-width as a banner.
    All,
    /// Relevant to the tracks listed in `applies_to_track_ids`.
    Subset,
    /// Relevant to the single track in `track_id`.
    Single,
    /// No applicability resolved; displayed without a badge.
    #[default]
    None,
}

/// Origin of an entry's resolved start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSource {
    /// Pinned by the user; used verbatim.
    Explicit,
    /// Chained after the previous entry on the same track.
    #[default]
    Derived,
}

/// Optional display marker (icon + color). Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Icon identifier, host-defined.
    pub icon: String,
    /// Marker color token.
    pub color: String,
}

/// A schedule entry: the unit being scheduled.
///
/// Display fields (`title`, `marker`, `cast`, `location`, `notes`,
/// `tags`, `attributes`) are passed through unchanged; the engine's
/// algorithms only read identity, track scoping, and time fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleEntry {
    /// Unique, stable identifier; used as the final sort tiebreaker.
    /// An empty string is tolerated for comparison purposes but flagged
    /// by the validation layer.
    pub id: String,
    /// Owning track. `None` only for banner/all-applicability entries.
    pub track_id: Option<String>,
    /// Ordered subset of track IDs; populated only for `Subset` entries.
    pub applies_to_track_ids: Option<Vec<String>>,
    /// Which track(s) this entry is relevant to.
    pub applicability: Applicability,
    /// Start time (minutes from midnight). `None` = not yet resolved.
    pub start_min: Option<i64>,
    /// Duration in minutes, intended ≥ 0. `None` = unset (resolver
    /// substitutes the configured default).
    pub duration_min: Option<i64>,
    /// Origin of the resolved start time.
    pub time_source: TimeSource,
    /// Semantically a banner regardless of `applicability`.
    pub is_banner: bool,
    /// Computed by the conflict detector; never persisted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_conflict: bool,
    /// Entry title or description.
    pub title: String,
    /// Optional display marker.
    pub marker: Option<Marker>,
    /// Optional color grouping key.
    pub color_key: Option<String>,
    /// Talent appearing in this entry.
    pub cast: Vec<String>,
    /// Location label.
    pub location: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Host-defined key-value metadata, passed through unchanged.
    pub attributes: HashMap<String, String>,
}

impl ScheduleEntry {
    /// Creates a new entry with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Scopes the entry to a single track.
    pub fn on_track(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self.applicability = Applicability::Single;
        self
    }

    /// Scopes the entry to a named subset of tracks.
    pub fn applies_to(mut self, track_ids: Vec<String>) -> Self {
        self.applies_to_track_ids = Some(track_ids);
        self.applicability = Applicability::Subset;
        self
    }

    /// Marks the entry as relevant to every lane (banner downstream).
    pub fn for_all_tracks(mut self) -> Self {
        self.track_id = None;
        self.applicability = Applicability::All;
        self
    }

    /// Pins an explicit start time (minutes from midnight).
    pub fn with_start(mut self, start_min: i64) -> Self {
        self.start_min = Some(start_min);
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration(mut self, duration_min: i64) -> Self {
        self.duration_min = Some(duration_min);
        self
    }

    /// Marks the entry as a banner.
    pub fn as_banner(mut self) -> Self {
        self.is_banner = true;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the display marker.
    pub fn with_marker(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            icon: icon.into(),
            color: color.into(),
        });
        self
    }

    /// Whether this entry renders as a banner: the explicit flag, or
    /// all-track applicability.
    #[inline]
    pub fn is_banner_entry(&self) -> bool {
        self.is_banner || self.applicability == Applicability::All
    }

    /// End time, defined only when both start and a non-negative
    /// duration are present.
    pub fn end_min(&self) -> Option<i64> {
        let start = self.start_min?;
        let duration = self.duration_min.filter(|d| *d >= 0)?;
        Some(start + duration)
    }

    /// The entry's resolved `[start, end)` span, if bounded.
    pub fn span(&self) -> Option<TimeSpan> {
        Some(TimeSpan::new(self.start_min?, self.end_min()?))
    }

    /// Whether the entry has valid time bounds.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.span().is_some()
    }

    /// Whether the entry occupies the given track, via its own
    /// `track_id` or membership in `applies_to_track_ids`.
    pub fn applies_to_track(&self, track_id: &str) -> bool {
        if self.track_id.as_deref() == Some(track_id) {
            return true;
        }
        self.applies_to_track_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == track_id))
    }
}
