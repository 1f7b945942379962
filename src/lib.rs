//! Kymograph trace analysis: phase classification and per-episode dynamics
//! statistics.
//!
//! The crate turns a manually traced polyline over a kymograph into labeled
//! dynamic phases (growth, shrink, pause) and aggregated episode statistics:
//! distances, times, rates, plus catastrophe/rescue counts and frequencies.
//!
//! The interactive drawing UI, image handling and file dialogs belong to the
//! host application. After every edit to the trace the host calls
//! [`analyze_trace`] with the current vertices, the side convention and the
//! calibration, and renders whatever the immutable [`TraceResult`] and the
//! [`report`] helpers give back. There is no incremental state: each call is
//! a full recomputation over a small, bounded input.

pub mod analysis;
pub mod calibration;
pub mod models;
pub mod report;

pub use analysis::{aggregate, analyze_trace, classify, derive_segments, measure, Measurement};
pub use calibration::{CalibrationConfig, CalibrationStore};
pub use models::{Episode, Phase, Point, Segment, SegmentRecord, Side, TraceResult};
pub use report::{csv_rows, export_filename, summary_labels, write_csv, SummaryLabels, CSV_HEADER};
