//! Input data-quality checks for schedule computations.
//!
//! The engine itself never rejects input: malformed entries degrade to
//! boundless singletons (see the error-handling contract in the crate
//! docs). This module is the collaborator-facing side of that contract,
//! surfacing the issues the engine silently tolerates:
//! - Missing or duplicate IDs
//! - References to unknown tracks
//! - Negative durations
//! - Subset entries without a subset list
//!
//! All issues are collected and reported together.

use std::collections::HashSet;

use crate::models::{Applicability, ScheduleEntry, Track};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entry has an empty ID; sort tiebreaks degrade.
    MissingId,
    /// An entry references a track that doesn't exist.
    UnknownTrackReference,
    /// An entry carries a negative duration.
    NegativeDuration,
    /// A subset entry has no `applies_to_track_ids` list.
    MissingSubsetTracks,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates tracks and entries before a schedule computation.
///
/// Checks:
/// 1. No duplicate track IDs
/// 2. No duplicate or empty entry IDs
/// 3. All track references (own track and subset lists) resolve
/// 4. No negative durations
/// 5. Subset entries carry their subset list
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(tracks: &[Track], entries: &[ScheduleEntry]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut track_ids = HashSet::new();
    for t in tracks {
        if !track_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate track ID: {}", t.id),
            ));
        }
    }

    let mut entry_ids = HashSet::new();
    for e in entries {
        if e.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                "Entry with empty ID",
            ));
        } else if !entry_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate entry ID: {}", e.id),
            ));
        }

        if let Some(track_id) = &e.track_id {
            if !track_ids.contains(track_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTrackReference,
                    format!("Entry '{}' references unknown track '{track_id}'", e.id),
                ));
            }
        }

        if let Some(ids) = &e.applies_to_track_ids {
            for track_id in ids {
                if !track_ids.contains(track_id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownTrackReference,
                        format!("Entry '{}' applies to unknown track '{track_id}'", e.id),
                    ));
                }
            }
        }

        if e.applicability == Applicability::Subset
            && e.applies_to_track_ids.as_ref().is_none_or(|ids| ids.is_empty())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSubsetTracks,
                format!("Subset entry '{}' lists no tracks", e.id),
            ));
        }

        if e.duration_min.is_some_and(|d| d < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Entry '{}' has negative duration", e.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tracks() -> Vec<Track> {
        vec![
            Track::lane("photo").with_name("Photo"),
            Track::lane("video").with_name("Video"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let entries = vec![
            ScheduleEntry::new("a").on_track("photo").with_start(0).with_duration(30),
            ScheduleEntry::new("b").applies_to(vec!["photo".into(), "video".into()]),
        ];
        assert!(validate_input(&sample_tracks(), &entries).is_ok());
    }

    #[test]
    fn test_duplicate_track_id() {
        let tracks = vec![Track::lane("photo"), Track::lane("photo")];
        let errors = validate_input(&tracks, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_entry_id() {
        let entries = vec![
            ScheduleEntry::new("a").on_track("photo"),
            ScheduleEntry::new("a").on_track("video"),
        ];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("entry")));
    }

    #[test]
    fn test_missing_entry_id() {
        let entries = vec![ScheduleEntry::new("").on_track("photo")];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingId));
    }

    #[test]
    fn test_unknown_track_reference() {
        let entries = vec![ScheduleEntry::new("a").on_track("audio")];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownTrackReference));
    }

    #[test]
    fn test_unknown_subset_reference() {
        let entries =
            vec![ScheduleEntry::new("a").applies_to(vec!["photo".into(), "ghost".into()])];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownTrackReference));
    }

    #[test]
    fn test_subset_without_list() {
        let mut entry = ScheduleEntry::new("a");
        entry.applicability = Applicability::Subset;
        let errors = validate_input(&sample_tracks(), &[entry]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingSubsetTracks));
    }

    #[test]
    fn test_negative_duration() {
        let entries = vec![ScheduleEntry::new("a").on_track("photo").with_duration(-5)];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let entries = vec![
            ScheduleEntry::new("").on_track("ghost"),
            ScheduleEntry::new("a").with_duration(-1),
        ];
        let errors = validate_input(&sample_tracks(), &entries).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
