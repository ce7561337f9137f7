//! Schedule engine for production call sheets.
//!
//! Turns an unordered, partially-specified set of schedule entries and a
//! registry of parallel production tracks into the ordered render groups
//! the call-sheet schedule view displays: resolved times, conflict
//! flags, overlap bands with balanced columns, and proportional rail
//! geometry.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `ScheduleEntry`, `TimeSpan`,
//!   `RenderGroup`
//! - **`timing`**: Start-time resolution (explicit or chained per track)
//!   and conflict detection
//! - **`applicability`**: Which track(s) an entry applies to, and its
//!   display badge
//! - **`layout`**: The overlap-band sweep, column partitioning, rail
//!   geometry
//! - **`engine`**: The wired pipeline producing `Vec<RenderGroup>`
//! - **`summary`**: Day-level metrics over a computed schedule
//! - **`validation`**: Data-quality checks (duplicate IDs, unknown
//!   tracks, negative durations)
//!
//! # Design
//!
//! The whole crate is a pure, synchronous transform: no I/O, no shared
//! state, no interior mutability. Every computation starts from the
//! caller's input arrays and returns fresh output; running it twice on
//! identical input produces identical output. Malformed input degrades
//! (boundless entries render unbanded): nothing is dropped and nothing
//! panics.
//!
//! # Example
//!
//! ```
//! use callsheet_engine::engine::LayoutEngine;
//! use callsheet_engine::models::{ScheduleEntry, Track};
//!
//! let tracks = vec![
//!     Track::lane("photo").with_name("Photo"),
//!     Track::lane("video").with_name("Video"),
//! ];
//! let entries = vec![
//!     ScheduleEntry::new("call").for_all_tracks().with_start(480).with_duration(15),
//!     ScheduleEntry::new("shot-1").on_track("photo").with_start(540).with_duration(60),
//!     ScheduleEntry::new("interview").on_track("video").with_start(570).with_duration(45),
//! ];
//!
//! let groups = LayoutEngine::new().compute(&tracks, &entries);
//! assert_eq!(groups.len(), 2); // banner, then a two-entry band
//! ```

pub mod applicability;
pub mod engine;
pub mod layout;
pub mod models;
pub mod summary;
pub mod timing;
pub mod validation;
