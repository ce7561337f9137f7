//! Rail geometry.
//!
//! A rail is the small proportional bar communicating an entry's
//! relative duration. Heights are bounded to `[10, 44]` px; anything
//! invalid degrades to the minimum rather than propagating bad numbers
//! into layout.

use crate::models::{ScheduleEntry, TimeSpan};

/// Minimum rail height (px).
pub const RAIL_MIN_PX: i64 = 10;
/// Maximum rail height (px).
pub const RAIL_MAX_PX: i64 = 44;
/// Singleton scale: half a pixel per minute.
const PX_PER_MIN: f64 = 0.5;

/// Rail height for a singleton entry: half a pixel per minute of
/// duration, clamped to `[10, 44]`. Missing or negative durations yield
/// the minimum.
pub fn singleton_rail_px(duration_min: Option<i64>) -> i64 {
    match duration_min {
        Some(d) if d >= 0 => clamp_px(d as f64 * PX_PER_MIN),
        _ => RAIL_MIN_PX,
    }
}

/// Rail height for a band member: the entry's time inside
/// `[band_start, band_end)` as a fraction of the band span, scaled to
/// the maximum height and clamped to `[10, 44]`.
///
/// Entries without valid bounds fall back to the singleton formula (and
/// from there to the minimum when the duration is also invalid).
pub fn band_rail_px(entry: &ScheduleEntry, band_start: i64, band_end: i64) -> i64 {
    let span = match entry.span() {
        Some(span) => span,
        None => return singleton_rail_px(entry.duration_min),
    };

    let band = TimeSpan::new(band_start, band_end);
    let inside = span
        .clamp_to(&band)
        .map(|s| s.duration_min())
        .unwrap_or(0);
    let total = band.duration_min().max(1);

    clamp_px(inside as f64 / total as f64 * RAIL_MAX_PX as f64)
}

fn clamp_px(raw: f64) -> i64 {
    if !raw.is_finite() {
        return RAIL_MIN_PX;
    }
    (raw.round() as i64).clamp(RAIL_MIN_PX, RAIL_MAX_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_scaling() {
        assert_eq!(singleton_rail_px(Some(40)), 20);
        assert_eq!(singleton_rail_px(Some(60)), 30);
    }

    #[test]
    fn test_singleton_bounds() {
        assert_eq!(singleton_rail_px(Some(0)), RAIL_MIN_PX);
        assert_eq!(singleton_rail_px(Some(10)), RAIL_MIN_PX);
        assert_eq!(singleton_rail_px(Some(88)), RAIL_MAX_PX);
        assert_eq!(singleton_rail_px(Some(10_000)), RAIL_MAX_PX);
    }

    #[test]
    fn test_singleton_invalid_duration() {
        assert_eq!(singleton_rail_px(None), RAIL_MIN_PX);
        assert_eq!(singleton_rail_px(Some(-5)), RAIL_MIN_PX);
    }

    #[test]
    fn test_band_member_proportion() {
        let e = ScheduleEntry::new("a").with_start(0).with_duration(45);
        // 45 of 90 minutes: half of the 44px maximum, rounded
        assert_eq!(band_rail_px(&e, 0, 90), 22);
    }

    #[test]
    fn test_band_full_span_member() {
        let e = ScheduleEntry::new("a").with_start(0).with_duration(90);
        assert_eq!(band_rail_px(&e, 0, 90), RAIL_MAX_PX);
    }

    #[test]
    fn test_band_member_clamped_to_band() {
        // Entry spills past the band end; only the inside portion counts
        let e = ScheduleEntry::new("a").with_start(60).with_duration(120);
        assert_eq!(band_rail_px(&e, 0, 90), clamp_px(30.0 / 90.0 * 44.0));
    }

    #[test]
    fn test_band_member_outside_band() {
        let e = ScheduleEntry::new("a").with_start(200).with_duration(30);
        assert_eq!(band_rail_px(&e, 0, 90), RAIL_MIN_PX);
    }

    #[test]
    fn test_band_invalid_bounds_falls_back() {
        let e = ScheduleEntry::new("a").with_duration(60);
        assert_eq!(band_rail_px(&e, 0, 90), 30);

        let boundless = ScheduleEntry::new("b");
        assert_eq!(band_rail_px(&boundless, 0, 90), RAIL_MIN_PX);
    }

    #[test]
    fn test_degenerate_band_span() {
        // Zero-width band: the max(1) divisor guard keeps the result
        // finite and clamped
        let e = ScheduleEntry::new("a").with_start(0).with_duration(30);
        let px = band_rail_px(&e, 0, 0);
        assert!((RAIL_MIN_PX..=RAIL_MAX_PX).contains(&px));
    }
}
