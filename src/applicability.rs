//! Applicability classification and track badges.
//!
//! Determines whether an entry is a banner applying to all tracks,
//! applies to a named subset, or applies to a single track, and resolves
//! the badge label the renderers show for it.
//!
//! # Label Rules
//! - `All`: always a banner; labeled "All tracks".
//! - `Subset`: joins the resolved track names ("Photo + Video"); when no
//!   name resolves and exactly two subset tracks exist, falls back to
//!   "Both tracks".
//! - `Single`: the track name, suppressed when the entry's track is the
//!   only track of its scope (context already implicit).
//! - `None`: no badge.

use crate::models::{track_by_id, Applicability, ScheduleEntry, Track};

/// Resolved applicability of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeBadge {
    /// The entry's applicability kind.
    pub kind: Applicability,
    /// Whether the entry renders as a banner.
    pub is_banner: bool,
    /// Badge text, if any is shown.
    pub label: Option<String>,
}

/// Classifies an entry against the track registry.
pub fn classify(entry: &ScheduleEntry, tracks: &[Track]) -> ScopeBadge {
    let kind = entry.applicability;
    let is_banner = entry.is_banner_entry();

    let label = match kind {
        Applicability::All => Some("All tracks".to_string()),
        Applicability::Subset => subset_label(entry, tracks),
        Applicability::Single => single_label(entry, tracks),
        Applicability::None => None,
    };

    ScopeBadge {
        kind,
        is_banner,
        label,
    }
}

fn subset_label(entry: &ScheduleEntry, tracks: &[Track]) -> Option<String> {
    let ids = entry.applies_to_track_ids.as_deref()?;
    let names: Vec<&str> = ids
        .iter()
        .filter_map(|id| track_by_id(tracks, id))
        .map(|t| t.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();

    if !names.is_empty() {
        Some(names.join(" + "))
    } else if ids.len() == 2 {
        // Two unresolvable tracks still warrant a chip
        Some("Both tracks".to_string())
    } else {
        None
    }
}

fn single_label(entry: &ScheduleEntry, tracks: &[Track]) -> Option<String> {
    let track = track_by_id(tracks, entry.track_id.as_deref()?)?;
    let peers = tracks.iter().filter(|t| t.scope == track.scope).count();
    if peers <= 1 {
        // Only track of its scope: context is implicit, no chip
        None
    } else if track.name.is_empty() {
        None
    } else {
        Some(track.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_lanes() -> Vec<Track> {
        vec![
            Track::lane("photo").with_name("Photo"),
            Track::lane("video").with_name("Video"),
        ]
    }

    #[test]
    fn test_all_is_banner() {
        let entry = ScheduleEntry::new("e1").for_all_tracks();
        let badge = classify(&entry, &two_lanes());
        assert!(badge.is_banner);
        assert_eq!(badge.kind, Applicability::All);
        assert_eq!(badge.label.as_deref(), Some("All tracks"));
    }

    #[test]
    fn test_explicit_banner_flag() {
        let entry = ScheduleEntry::new("e1").on_track("photo").as_banner();
        let badge = classify(&entry, &two_lanes());
        assert!(badge.is_banner);
        assert_eq!(badge.kind, Applicability::Single);
    }

    #[test]
    fn test_subset_joins_names() {
        let entry =
            ScheduleEntry::new("e1").applies_to(vec!["photo".into(), "video".into()]);
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.label.as_deref(), Some("Photo + Video"));
        assert!(!badge.is_banner);
    }

    #[test]
    fn test_subset_fallback_for_two_unresolvable() {
        let entry =
            ScheduleEntry::new("e1").applies_to(vec!["ghost-a".into(), "ghost-b".into()]);
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.label.as_deref(), Some("Both tracks"));
    }

    #[test]
    fn test_subset_partial_resolution() {
        let entry =
            ScheduleEntry::new("e1").applies_to(vec!["photo".into(), "ghost".into()]);
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.label.as_deref(), Some("Photo"));
    }

    #[test]
    fn test_subset_no_label_when_unresolvable() {
        let entry = ScheduleEntry::new("e1").applies_to(vec!["ghost".into()]);
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.label, None);
    }

    #[test]
    fn test_single_shows_track_name() {
        let entry = ScheduleEntry::new("e1").on_track("video");
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.label.as_deref(), Some("Video"));
    }

    #[test]
    fn test_single_suppressed_when_only_lane() {
        let tracks = vec![
            Track::lane("photo").with_name("Photo"),
            Track::shared("shared").with_name("All crew"),
        ];
        let entry = ScheduleEntry::new("e1").on_track("photo");
        let badge = classify(&entry, &tracks);
        // Photo is the only lane-scoped track, so no chip
        assert_eq!(badge.label, None);
    }

    #[test]
    fn test_none_has_no_badge() {
        let entry = ScheduleEntry::new("e1");
        let badge = classify(&entry, &two_lanes());
        assert_eq!(badge.kind, Applicability::None);
        assert_eq!(badge.label, None);
        assert!(!badge.is_banner);
    }
}
