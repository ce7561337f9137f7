//! Track (production lane) model.
//!
//! Tracks are the parallel lanes a shoot day is scheduled across: one or
//! more named units (e.g. a Photo unit and a Video unit) plus an optional
//! shared logistics lane. The registry is owned by the host application;
//! the engine treats it as immutable for the duration of one computation.

use serde::{Deserialize, Serialize};

/// A parallel lane in the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier.
    pub id: String,
    /// Display name (e.g. "Photo", "Video", "All crew").
    pub name: String,
    /// Lane classification.
    pub scope: TrackScope,
    /// Display color (host-defined token or hex string; opaque here).
    pub color: String,
    /// Start-of-day anchor for derived-time chaining (minutes from
    /// midnight). `None` falls back to the engine's configured day start.
    pub anchor_min: Option<i64>,
}

/// Track scope classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackScope {
    /// Logistics lane relevant to the whole crew.
    Shared,
    /// A named production unit.
    Lane,
}

impl Track {
    /// Creates a new track with the given ID and scope.
    pub fn new(id: impl Into<String>, scope: TrackScope) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            scope,
            color: String::new(),
            anchor_min: None,
        }
    }

    /// Creates a named production lane.
    pub fn lane(id: impl Into<String>) -> Self {
        Self::new(id, TrackScope::Lane)
    }

    /// Creates a shared logistics lane.
    pub fn shared(id: impl Into<String>) -> Self {
        Self::new(id, TrackScope::Shared)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the start-of-day anchor (minutes from midnight).
    pub fn with_anchor(mut self, anchor_min: i64) -> Self {
        self.anchor_min = Some(anchor_min);
        self
    }
}

/// Looks up a track by ID.
pub fn track_by_id<'a>(tracks: &'a [Track], id: &str) -> Option<&'a Track> {
    tracks.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_builder() {
        let t = Track::lane("photo")
            .with_name("Photo")
            .with_color("#e5484d")
            .with_anchor(6 * 60);

        assert_eq!(t.id, "photo");
        assert_eq!(t.name, "Photo");
        assert_eq!(t.scope, TrackScope::Lane);
        assert_eq!(t.color, "#e5484d");
        assert_eq!(t.anchor_min, Some(360));
    }

    #[test]
    fn test_shared_track() {
        let t = Track::shared("shared").with_name("All crew");
        assert_eq!(t.scope, TrackScope::Shared);
        assert_eq!(t.anchor_min, None);
    }

    #[test]
    fn test_track_by_id() {
        let tracks = vec![Track::lane("photo"), Track::lane("video")];
        assert_eq!(track_by_id(&tracks, "video").unwrap().id, "video");
        assert!(track_by_id(&tracks, "audio").is_none());
    }
}
