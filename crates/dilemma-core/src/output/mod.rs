//! Output
//!
//! Aggregated stats snapshots and their console rendering.

pub mod stats;
pub mod table;

pub use stats::snapshot_of;
pub use table::render_snapshot;
