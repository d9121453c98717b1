//! bargraph-rs: animated bar-graph layout and transition engine.
//!
//! The crate computes scales, per-bar geometry, and staggered transition
//! schedules from caller data, then mutates a pluggable render surface
//! through deterministic op batches. DOM/SVG mutation syntax, CSS styling,
//! and the host event loop stay outside; see [`render::Surface`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarGraph, BarGraphOptions, MultiBarGraphOptions, Orientation, SeriesBar};
pub use error::{BarGraphError, BarGraphResult};
