//! Band construction, column partitioning, and rail geometry.
//!
//! `build_render_groups` is the central sweep that partitions the entry
//! stream into banners, singletons, and overlap bands. `partition_band`
//! and the rail functions enrich individual groups for the renderers.

mod band;
mod columns;
mod rail;

pub use band::build_render_groups;
pub use columns::{partition_band, BandColumns, ColumnItem, LATE_START_THRESHOLD_MIN};
pub use rail::{band_rail_px, singleton_rail_px, RAIL_MAX_PX, RAIL_MIN_PX};
