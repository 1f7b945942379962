use crate::models::{Phase, Segment, Side};

/// Classify a segment's dynamic phase from its geometry and the side
/// convention.
///
/// A segment drawn backward or horizontal in time (`dy <= 0`) is
/// `Undefined`. Otherwise the angle from the vertical time axis decides
/// pause vs motion, and the sign of the horizontal displacement combined
/// with the traced side decides growth vs shrink.
pub fn classify(segment: &Segment, side: Side, pause_angle_degrees: f64) -> Phase {
    if segment.dy() <= 0 {
        return Phase::Undefined;
    }
    if segment.angle_from_vertical_degrees() <= pause_angle_degrees {
        return Phase::Pause;
    }
    let dx = segment.dx();
    match side {
        Side::Left if dx < 0 => Phase::Shrink,
        Side::Left if dx > 0 => Phase::Growth,
        Side::Right if dx > 0 => Phase::Shrink,
        Side::Right if dx < 0 => Phase::Growth,
        // dx == 0 cannot pass the angle check (its angle is 0), but keep the
        // fallthrough mapped to something the caller already handles.
        _ => Phase::Undefined,
    }
}
