use log::warn;

use crate::analysis::aggregate::aggregate;
use crate::analysis::classify::classify;
use crate::analysis::measure::measure;
use crate::calibration::CalibrationConfig;
use crate::models::{Phase, Point, Segment, SegmentRecord, Side, TraceResult};

/// Derive the analyzable segments from the polyline vertices.
///
/// While the trace is still being drawn the last vertex follows the cursor,
/// so it is excluded until the polyline is finished.
pub fn derive_segments(vertices: &[Point], finished: bool) -> Vec<Segment> {
    let usable = if finished {
        vertices.len()
    } else {
        vertices.len().saturating_sub(1)
    };
    if usable < 2 {
        return Vec::new();
    }
    vertices[..usable]
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Main analysis entry point: transform a polyline trace into classified
/// segments and per-episode statistics.
///
/// Runs a full recomputation from scratch; the host calls it after every
/// edit to the trace, passing the calibration explicitly rather than
/// relying on ambient state. A trace too short to contain a full segment
/// yields an empty result, not an error. Anomalous segments (drawn backward
/// or horizontal in time) are classified `Undefined`, kept in the result
/// and reported via `undefined_indices`.
pub fn analyze_trace(
    vertices: &[Point],
    finished: bool,
    side: Side,
    calibration: &CalibrationConfig,
) -> TraceResult {
    let segments = derive_segments(vertices, finished);
    if segments.is_empty() {
        return TraceResult::default();
    }

    let records: Vec<SegmentRecord> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let phase = classify(segment, side, calibration.pause_angle_degrees);
            let m = measure(segment, calibration);
            SegmentRecord {
                index,
                phase,
                distance: m.distance,
                time: m.time,
                rate: m.rate,
            }
        })
        .collect();

    let undefined_indices: Vec<usize> = records
        .iter()
        .filter(|r| r.phase == Phase::Undefined)
        .map(|r| r.index)
        .collect();
    if !undefined_indices.is_empty() {
        warn!(
            "Trace contains horizontal/upward segment(s) at {:?}; they are kept but excluded from episode totals",
            undefined_indices
        );
    }

    let (episodes, episode_of) = aggregate(&records);

    TraceResult {
        segments: records,
        episodes,
        episode_of,
        undefined_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(points: &[(i32, i32)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn finished_trace_uses_every_vertex() {
        let v = vertices(&[(0, 0), (10, 10), (20, 20), (30, 30)]);
        assert_eq!(derive_segments(&v, true).len(), 3);
    }

    #[test]
    fn unfinished_trace_drops_the_provisional_vertex() {
        let v = vertices(&[(0, 0), (10, 10), (20, 20), (30, 30)]);
        assert_eq!(derive_segments(&v, false).len(), 2);
    }

    #[test]
    fn too_short_traces_have_no_segments() {
        assert!(derive_segments(&[], true).is_empty());
        assert!(derive_segments(&vertices(&[(0, 0)]), true).is_empty());
        assert!(derive_segments(&vertices(&[(0, 0), (5, 5)]), false).is_empty());
        assert_eq!(derive_segments(&vertices(&[(0, 0), (5, 5)]), true).len(), 1);
    }

    #[test]
    fn short_trace_analyzes_to_an_empty_result() {
        let result = analyze_trace(
            &vertices(&[(0, 0), (5, 5)]),
            false,
            Side::Right,
            &CalibrationConfig::default(),
        );
        assert!(result.is_empty());
        assert!(result.episodes.is_empty());
    }

    #[test]
    fn undefined_segments_are_flagged_but_kept() {
        // Second segment goes upward in time.
        let v = vertices(&[(100, 0), (80, 10), (90, 5), (70, 20)]);
        let result = analyze_trace(&v, true, Side::Right, &CalibrationConfig::default());

        assert_eq!(result.segments.len(), 3);
        assert_eq!(result.undefined_indices, vec![1]);
        assert_eq!(result.segments[1].phase, Phase::Undefined);
        // The anomalous segment still carries its measurements.
        assert!(result.segments[1].distance > 0.0);
        assert!(result.segments[1].time < 0.0);
    }

    #[test]
    fn worked_example_matches_the_calibrated_numbers() {
        let v = vertices(&[(100, 0), (80, 10)]);
        let result = analyze_trace(&v, true, Side::Right, &CalibrationConfig::default());

        assert_eq!(result.segments.len(), 1);
        let record = &result.segments[0];
        assert_eq!(record.phase, Phase::Growth);
        assert!((record.distance - 1.6).abs() < 1e-12);
        assert!((record.time - 25.0).abs() < 1e-12);
        assert!((record.rate - 0.064).abs() < 1e-12);

        assert_eq!(result.episodes.len(), 1);
        assert_eq!(result.episodes[0].start_index, 0);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let v = vertices(&[(100, 0), (80, 10), (95, 20), (95, 30), (85, 40)]);
        let calibration = CalibrationConfig::default();
        let a = analyze_trace(&v, true, Side::Right, &calibration);
        let b = analyze_trace(&v, true, Side::Right, &calibration);
        assert_eq!(a.episodes, b.episodes);
        assert_eq!(a.episode_of, b.episode_of);
    }
}
