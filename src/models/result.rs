use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Classified and calibrated measurements for one trace segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    /// Zero-based position of the segment within the trace.
    pub index: usize,
    pub phase: Phase,
    /// Physical distance (µm under the default calibration). Always defined.
    pub distance: f64,
    /// Physical time. Zero or negative for undefined segments; still carried
    /// so anomalous segments stay visible downstream.
    pub time: f64,
    /// distance / time. NaN when the segment has zero time extent.
    pub rate: f64,
}

/// Aggregate statistics for one episode: a maximal run of segments closed by
/// a pause segment (inclusive) or by the end of the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Index of the first segment belonging to this episode.
    pub start_index: usize,
    pub growth_time: f64,
    pub growth_distance: f64,
    pub shrink_time: f64,
    pub shrink_distance: f64,
    pub catastrophes: u32,
    pub rescues: u32,
    /// catastrophes / growth_time; `None` when no growth was observed.
    pub catastrophe_frequency: Option<f64>,
    /// rescues / shrink_time; `None` when no shrink was observed.
    pub rescue_frequency: Option<f64>,
}

/// Complete analysis of one trace. Rebuilt from scratch after every edit;
/// never mutated incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResult {
    pub segments: Vec<SegmentRecord>,
    pub episodes: Vec<Episode>,
    /// For each segment index, the index of the episode it belongs to.
    pub episode_of: Vec<usize>,
    /// Indices of segments classified `Undefined` (drawn backward or
    /// horizontal in time), for the host to surface as a warning.
    pub undefined_indices: Vec<usize>,
}

impl TraceResult {
    /// True when the trace was too short to contain a full segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The episode a segment belongs to, if the index is in range.
    pub fn episode_for_segment(&self, index: usize) -> Option<&Episode> {
        self.episode_of.get(index).map(|&e| &self.episodes[e])
    }
}
