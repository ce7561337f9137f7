//! Overlap band construction.
//!
//! Groups mutually-overlapping, non-banner entries into visual bands for
//! side-by-side display. Banners and boundless entries bypass banding.
//!
//! # Algorithm
//!
//! A single linear sweep over the entry stream with a local accumulator
//! of (pending band items, running band end):
//!
//! 1. Banner: flush the pending band, emit a `Banner` group. A banner
//!    always terminates accumulation and never joins a band.
//! 2. Boundless entry: flush, emit a `Single` group.
//! 3. Bounded entry: if it strictly overlaps the accumulating band
//!    (`start < band_end`), append and extend the band end; otherwise
//!    flush and start a new band with just this entry.
//!
//! A final flush drains the trailing band. Given bandable members in
//! non-decreasing start order, the sweep finds every maximal cluster of
//! transitively-overlapping intervals in O(n) plus per-band sorts.
//!
//! The sortedness precondition is caller-enforced and not re-verified
//! here; out-of-order input degrades to smaller bands, never to a crash.

use log::trace;

use crate::models::{RenderGroup, ScheduleEntry};

/// Partitions resolved entries, in order, into render groups.
pub fn build_render_groups(entries: &[ScheduleEntry]) -> Vec<RenderGroup> {
    let mut groups = Vec::new();
    let mut acc = BandAccumulator::new();

    for entry in entries {
        if entry.is_banner_entry() {
            acc.flush(&mut groups);
            groups.push(RenderGroup::Banner {
                item: entry.clone(),
            });
            continue;
        }

        let span = match entry.span() {
            Some(span) => span,
            None => {
                acc.flush(&mut groups);
                groups.push(RenderGroup::Single {
                    item: entry.clone(),
                });
                continue;
            }
        };

        acc.push(entry.clone(), span.start_min, span.end_min, &mut groups);
    }

    acc.flush(&mut groups);
    groups
}

/// Pending band state threaded through one sweep pass.
struct BandAccumulator {
    items: Vec<ScheduleEntry>,
    band_end: Option<i64>,
}

impl BandAccumulator {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            band_end: None,
        }
    }

    fn push(
        &mut self,
        entry: ScheduleEntry,
        start_min: i64,
        end_min: i64,
        out: &mut Vec<RenderGroup>,
    ) {
        match self.band_end {
            Some(band_end) if !self.items.is_empty() && start_min < band_end => {
                self.items.push(entry);
                self.band_end = Some(band_end.max(end_min));
            }
            _ => {
                self.flush(out);
                self.items.push(entry);
                self.band_end = Some(end_min);
            }
        }
    }

    /// Emits the pending band: a `Single` for one member, a `Band` with
    /// covering bounds for two or more. Members sort by
    /// (start, end, id) for stable display order.
    fn flush(&mut self, out: &mut Vec<RenderGroup>) {
        if self.items.is_empty() {
            self.band_end = None;
            return;
        }

        let mut items = std::mem::take(&mut self.items);
        self.band_end = None;

        items.sort_by(|a, b| {
            a.start_min
                .cmp(&b.start_min)
                .then_with(|| a.end_min().cmp(&b.end_min()))
                .then_with(|| a.id.cmp(&b.id))
        });

        if items.len() == 1 {
            if let Some(item) = items.pop() {
                out.push(RenderGroup::Single { item });
            }
            return;
        }

        let band_start = items.iter().filter_map(|e| e.start_min).min().unwrap_or(0);
        let band_end = items.iter().filter_map(|e| e.end_min()).max().unwrap_or(band_start);
        trace!(
            "flushing band of {} entries covering [{band_start}, {band_end})",
            items.len()
        );
        out.push(RenderGroup::Band {
            items,
            band_start,
            band_end,
        });
    }
}
