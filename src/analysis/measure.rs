use crate::calibration::CalibrationConfig;
use crate::models::Segment;

/// Physical measurements of a single segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub distance: f64,
    pub time: f64,
    pub rate: f64,
}

/// Convert segment pixel geometry into physical distance, time and rate.
///
/// Time is computed even for segments with non-positive `dy`, so undefined
/// segments still carry their raw values downstream. A zero time extent
/// yields a NaN rate: a zero-duration segment with nonzero distance is a
/// data anomaly, not a zero rate.
pub fn measure(segment: &Segment, calibration: &CalibrationConfig) -> Measurement {
    let distance = segment.width() as f64 * calibration.distance_per_pixel;
    let time = segment.dy() as f64 * calibration.time_per_pixel;
    let rate = if time != 0.0 { distance / time } else { f64::NAN };
    Measurement {
        distance,
        time,
        rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn applies_both_scales() {
        // Worked example: 20 px across, 10 px down at 0.08 µm/px, 2.5 s/px.
        let m = measure(&seg(100, 0, 80, 10), &CalibrationConfig::default());
        assert!((m.distance - 1.6).abs() < 1e-12);
        assert!((m.time - 25.0).abs() < 1e-12);
        assert!((m.rate - 0.064).abs() < 1e-12);
    }

    #[test]
    fn zero_time_extent_reports_nan_rate() {
        let m = measure(&seg(0, 10, 30, 10), &CalibrationConfig::default());
        assert_eq!(m.time, 0.0);
        assert!((m.distance - 2.4).abs() < 1e-12);
        assert!(m.rate.is_nan());
    }

    #[test]
    fn backward_segment_keeps_negative_time() {
        let m = measure(&seg(0, 10, 10, 0), &CalibrationConfig::default());
        assert!(m.time < 0.0);
        assert!(m.distance > 0.0);
        // The rate is still defined; the classifier flags the segment.
        assert!(m.rate < 0.0);
    }
}
