//! Band column partitioning.
//!
//! Splits a band's members into two balanced display columns so
//! overlapping work reads side by side: photo-unit entries on one side,
//! video-unit entries on the other, with unclassifiable entries merged
//! into whichever column is lighter.

use crate::models::{format_clock, track_by_id, ScheduleEntry, Track};

/// Items starting more than this many minutes after the band start get a
/// "starts later" label.
pub const LATE_START_THRESHOLD_MIN: i64 = 10;

/// A band member placed in a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnItem {
    /// The placed entry.
    pub entry: ScheduleEntry,
    /// Formatted absolute start time, present when the entry starts
    /// noticeably after the band does.
    pub starts_later: Option<String>,
}

/// The two display columns of a band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandColumns {
    /// Photo-unit column.
    pub photo: Vec<ColumnItem>,
    /// Video-unit column.
    pub video: Vec<ColumnItem>,
}

enum ColumnKind {
    Photo,
    Video,
    Other,
}

/// Partitions a band's members into photo/video columns.
///
/// Classification is a case-insensitive substring match on each member's
/// track display name: "photo"/"still" goes to the photo column,
/// "video"/"motion" to the video column. This name heuristic is a known
/// weakness inherited from the product: tracks carry no explicit kind,
/// so renaming a track can reshuffle columns. Unclassified members merge
/// into whichever column currently has fewer entries (ties favor photo),
/// then each column re-sorts by (start, id) for stable vertical
/// stacking.
pub fn partition_band(
    items: &[ScheduleEntry],
    band_start: i64,
    tracks: &[Track],
) -> BandColumns {
    let mut photo = Vec::new();
    let mut video = Vec::new();
    let mut other = Vec::new();

    for entry in items {
        match classify_track(entry, tracks) {
            ColumnKind::Photo => photo.push(column_item(entry, band_start)),
            ColumnKind::Video => video.push(column_item(entry, band_start)),
            ColumnKind::Other => other.push(column_item(entry, band_start)),
        }
    }

    if video.len() < photo.len() {
        video.append(&mut other);
    } else {
        photo.append(&mut other);
    }

    sort_column(&mut photo);
    sort_column(&mut video);

    BandColumns { photo, video }
}

fn classify_track(entry: &ScheduleEntry, tracks: &[Track]) -> ColumnKind {
    let track_id = entry
        .track_id
        .as_deref()
        .or_else(|| entry.applies_to_track_ids.as_ref()?.first().map(String::as_str));
    let name = match track_id.and_then(|id| track_by_id(tracks, id)) {
        Some(track) => track.name.to_lowercase(),
        None => return ColumnKind::Other,
    };

    if name.contains("photo") || name.contains("still") {
        ColumnKind::Photo
    } else if name.contains("video") || name.contains("motion") {
        ColumnKind::Video
    } else {
        ColumnKind::Other
    }
}

fn column_item(entry: &ScheduleEntry, band_start: i64) -> ColumnItem {
    let starts_later = entry
        .start_min
        .filter(|start| *start > band_start + LATE_START_THRESHOLD_MIN)
        .map(format_clock);
    ColumnItem {
        entry: entry.clone(),
        starts_later,
    }
}

fn sort_column(column: &mut [ColumnItem]) {
    column.sort_by(|a, b| {
        a.entry
            .start_min
            .cmp(&b.entry.start_min)
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
}
