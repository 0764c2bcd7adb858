//! Concurrent export of tracks from a shared recording.
//!
//! The coordinator plans one output file per track, decodes the recording
//! once and fans the plan out to scoped worker threads, each owning one
//! contiguous chunk.

mod coordinator;
mod partition;
mod plan;
mod worker;

pub use coordinator::{ExecutionMode, ExportReport, export_planned, split_recording};
pub use partition::{partition, worker_count};
pub use plan::{PlannedExport, plan_outputs};
pub use worker::{export_chunk, segment_bounds};
