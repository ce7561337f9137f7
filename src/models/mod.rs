//! Schedule domain models.
//!
//! Core data types for the call-sheet schedule view: tracks (parallel
//! production lanes), schedule entries (the scheduled units), minute
//! time spans, and the engine's `RenderGroup` output.
//!
//! All model types are serde-serializable — the host application stores
//! and syncs entries through a document database, so this layer is the
//! serialization contract.

mod entry;
mod group;
mod time;
mod track;

pub use entry::{Applicability, Marker, ScheduleEntry, TimeSource};
pub use group::RenderGroup;
pub use time::{format_clock, TimeSpan};
pub use track::{track_by_id, Track, TrackScope};
