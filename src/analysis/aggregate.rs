use crate::models::{Episode, Phase, SegmentRecord};

/// Running totals for the episode window currently being scanned.
#[derive(Debug, Default)]
struct WindowTotals {
    growth_time: f64,
    growth_distance: f64,
    shrink_time: f64,
    shrink_distance: f64,
    catastrophes: u32,
    rescues: u32,
}

impl WindowTotals {
    fn close(self, start_index: usize) -> Episode {
        let catastrophe_frequency =
            (self.growth_time > 0.0).then(|| self.catastrophes as f64 / self.growth_time);
        let rescue_frequency =
            (self.shrink_time > 0.0).then(|| self.rescues as f64 / self.shrink_time);
        Episode {
            start_index,
            growth_time: self.growth_time,
            growth_distance: self.growth_distance,
            shrink_time: self.shrink_time,
            shrink_distance: self.shrink_distance,
            catastrophes: self.catastrophes,
            rescues: self.rescues,
            catastrophe_frequency,
            rescue_frequency,
        }
    }
}

/// Partition the classified sequence into episodes and aggregate per-episode
/// statistics in a single left-to-right pass.
///
/// An episode is a maximal run of segments closed by a pause segment
/// (inclusive) or by the end of the trace. Totals are confined to the
/// current window, but catastrophe/rescue counting looks at the global
/// predecessor phase: a transition is a property of two adjacent segments
/// regardless of where an episode boundary falls.
///
/// Returns the episode list and, for every segment index, the index of the
/// episode it belongs to. An empty input yields an empty result; a trace too
/// short to have segments is a valid "no data yet" state, not an error.
pub fn aggregate(segments: &[SegmentRecord]) -> (Vec<Episode>, Vec<usize>) {
    if segments.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let n = segments.len();
    let mut episodes: Vec<Episode> = Vec::new();
    let mut episode_of = vec![0usize; n];
    let mut window = WindowTotals::default();
    let mut window_start = 0usize;

    for (i, record) in segments.iter().enumerate() {
        episode_of[i] = episodes.len();
        match record.phase {
            Phase::Growth => {
                window.growth_time += record.time;
                window.growth_distance += record.distance;
                if i > 0 && segments[i - 1].phase == Phase::Shrink {
                    window.rescues += 1;
                }
            }
            Phase::Shrink => {
                window.shrink_time += record.time;
                window.shrink_distance += record.distance;
                if i > 0 && segments[i - 1].phase == Phase::Growth {
                    window.catastrophes += 1;
                }
            }
            // Pauses and undefined segments belong to the window but
            // contribute neither totals nor transitions.
            Phase::Pause | Phase::Undefined => {}
        }
        if record.phase == Phase::Pause || i == n - 1 {
            episodes.push(std::mem::take(&mut window).close(window_start));
            window_start = i + 1;
        }
    }

    (episodes, episode_of)
}
