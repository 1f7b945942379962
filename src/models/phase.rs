use serde::{Deserialize, Serialize};

/// Which side of the seed the tip was traced on. Selected by the user before
/// drawing; decides how horizontal displacement maps to growth vs shrink.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Dynamic phase of a single trace segment.
///
/// `Undefined` flags a segment drawn backward or horizontal in time — a
/// user-input anomaly that is kept and surfaced, never silently dropped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Growth,
    Shrink,
    Pause,
    Undefined,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Growth => "growth",
            Phase::Shrink => "shrink",
            Phase::Pause => "pause",
            Phase::Undefined => "undefined",
        }
    }
}
