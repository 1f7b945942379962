use serde::{Deserialize, Serialize};

/// Integer pixel coordinates on the kymograph. `y` increases with elapsed
/// time (downward in the image); `x` encodes the tip position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One leg of the user's polyline: an ordered pair of consecutive vertices.
/// Segments are derived fresh from the trace on every edit and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Signed horizontal displacement in pixels.
    pub fn dx(&self) -> i32 {
        self.p1.x - self.p0.x
    }

    /// Signed vertical displacement in pixels. Positive means the segment
    /// moves forward in time.
    pub fn dy(&self) -> i32 {
        self.p1.y - self.p0.y
    }

    /// Absolute horizontal extent in pixels.
    pub fn width(&self) -> i32 {
        self.dx().abs()
    }

    /// Angle from the vertical (time) axis in degrees: 0° means no
    /// horizontal motion, approaching 90° means nearly horizontal.
    /// Only meaningful when `dy() > 0`.
    pub fn angle_from_vertical_degrees(&self) -> f64 {
        (self.width() as f64 / self.dy() as f64).atan().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacements_are_signed() {
        let s = Segment::new(Point::new(100, 0), Point::new(80, 10));
        assert_eq!(s.dx(), -20);
        assert_eq!(s.dy(), 10);
        assert_eq!(s.width(), 20);
    }

    #[test]
    fn vertical_segment_has_zero_angle() {
        let s = Segment::new(Point::new(50, 0), Point::new(50, 30));
        assert_eq!(s.angle_from_vertical_degrees(), 0.0);
    }

    #[test]
    fn angle_grows_with_horizontal_motion() {
        let shallow = Segment::new(Point::new(0, 0), Point::new(1, 100));
        let steep = Segment::new(Point::new(0, 0), Point::new(100, 1));
        assert!(shallow.angle_from_vertical_degrees() < 1.0);
        assert!(steep.angle_from_vertical_degrees() > 89.0);
    }
}
