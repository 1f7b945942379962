//! Thin presentation layer over [`TraceResult`]: panel label formatting and
//! the CSV export row contract. Keeps the analysis itself free of any
//! display or host concerns.

use std::io::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{Episode, Phase, TraceResult};

/// Column header of the exported analysis table. Kept byte-compatible with
/// the sheets downstream tooling already parses.
pub const CSV_HEADER: &str = "Index, Label, Phase, Distance(um), Time(s), \
Rate growth(um/s), Rate shrink(um/s), Distance growth(um), Distance shrink(um), \
Time growth(s), Time shrink(s), Catastrophe, Rescue, Catastrophe frequency, Rescue frequency";

/// Placeholder shown where an episode statistic has no observed data yet.
pub const NO_DATA: &str = "N/A";

/// Formatted values for the measurement panel: the most recent segment plus
/// the episode it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLabels {
    pub phase: String,
    pub distance: String,
    pub time: String,
    pub rate: String,
    pub distance_growth: String,
    pub distance_shrink: String,
    pub time_growth: String,
    pub time_shrink: String,
    pub num_catastrophe: String,
    pub num_rescue: String,
    pub frequency_catastrophe: String,
    pub frequency_rescue: String,
}

impl Default for SummaryLabels {
    /// The cleared panel: every field reads "0".
    fn default() -> Self {
        let zero = || "0".to_string();
        Self {
            phase: zero(),
            distance: zero(),
            time: zero(),
            rate: zero(),
            distance_growth: zero(),
            distance_shrink: zero(),
            time_growth: zero(),
            time_shrink: zero(),
            num_catastrophe: zero(),
            num_rescue: zero(),
            frequency_catastrophe: zero(),
            frequency_rescue: zero(),
        }
    }
}

/// Format the most recent segment and its episode for display.
///
/// A trailing pause has just closed its episode, so the episode block stays
/// cleared in that case. Episode statistics whose denominator is zero read
/// [`NO_DATA`] instead of a number: "no growth observed yet" is not the same
/// as zero catastrophes per second.
pub fn summary_labels(result: &TraceResult) -> SummaryLabels {
    let Some(last) = result.segments.last() else {
        return SummaryLabels::default();
    };

    let mut labels = SummaryLabels {
        phase: last.phase.as_str().to_string(),
        distance: format_value(last.distance),
        time: format_value(last.time),
        rate: format_value(last.rate),
        ..Default::default()
    };

    if last.phase != Phase::Pause {
        if let Some(ep) = result.episode_for_segment(last.index) {
            labels.distance_growth = format_value(ep.growth_distance);
            labels.distance_shrink = format_value(ep.shrink_distance);
            labels.time_growth = format_value(ep.growth_time);
            labels.time_shrink = format_value(ep.shrink_time);
            (labels.num_catastrophe, labels.frequency_catastrophe) =
                count_and_frequency(ep.catastrophes, ep.catastrophe_frequency);
            (labels.num_rescue, labels.frequency_rescue) =
                count_and_frequency(ep.rescues, ep.rescue_frequency);
        }
    }

    labels
}

fn count_and_frequency(count: u32, frequency: Option<f64>) -> (String, String) {
    match frequency {
        Some(f) => (count.to_string(), format_value(f)),
        None => (NO_DATA.to_string(), NO_DATA.to_string()),
    }
}

/// Render one export row per segment, following the column contract:
/// the rate appears only in the growth or shrink column, and episode-derived
/// columns are populated only on the row that starts the episode.
pub fn csv_rows(result: &TraceResult, label: &str) -> Vec<String> {
    result
        .segments
        .iter()
        .map(|record| {
            let mut cols: Vec<String> = vec![
                (record.index + 1).to_string(),
                label.to_string(),
                record.phase.as_str().to_string(),
                format_value(record.distance),
                format_value(record.time),
            ];
            match record.phase {
                Phase::Growth => {
                    cols.push(format_value(record.rate));
                    cols.push(String::new());
                }
                Phase::Shrink => {
                    cols.push(String::new());
                    cols.push(format_value(record.rate));
                }
                Phase::Pause | Phase::Undefined => {
                    cols.push(String::new());
                    cols.push(String::new());
                }
            }
            match result.episode_for_segment(record.index) {
                Some(ep) if ep.start_index == record.index => push_episode_cols(&mut cols, ep),
                _ => cols.extend(std::iter::repeat(String::new()).take(8)),
            }
            cols.join(",")
        })
        .collect()
}

fn push_episode_cols(cols: &mut Vec<String>, ep: &Episode) {
    cols.push(format_value(ep.growth_distance));
    cols.push(format_value(ep.shrink_distance));
    cols.push(format_value(ep.growth_time));
    cols.push(format_value(ep.shrink_time));
    cols.push(ep.catastrophes.to_string());
    cols.push(ep.rescues.to_string());
    cols.push(ep.catastrophe_frequency.map(format_value).unwrap_or_default());
    cols.push(ep.rescue_frequency.map(format_value).unwrap_or_default());
}

/// Write the full analysis table: header plus one row per segment.
pub fn write_csv<W: Write>(w: &mut W, label: &str, result: &TraceResult) -> std::io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for row in csv_rows(result, label) {
        writeln!(w, "{row}")?;
    }
    Ok(())
}

/// Timestamped export filename in the historical format:
/// `<label>.<month>.<day>.<hour>.<minute>.csv`.
pub fn export_filename(label: &str, now: DateTime<Local>) -> String {
    format!("{label}{}.csv", now.format(".%m.%d.%H.%M"))
}

fn format_value(v: f64) -> String {
    format!("{v}")
}
