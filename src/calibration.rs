use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

/// Calibration scales and classification threshold with tunable values.
///
/// Applied only to future recomputations; results that were already computed
/// keep the values they were computed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationConfig {
    /// Physical distance represented by one horizontal pixel (µm/px).
    pub distance_per_pixel: f64,
    /// Elapsed time represented by one vertical pixel (s/px).
    pub time_per_pixel: f64,
    /// Angle from the vertical time axis (degrees) at or below which a
    /// segment is classified as a pause. Must lie in [0, 90).
    pub pause_angle_degrees: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            distance_per_pixel: 0.08,
            time_per_pixel: 2.5,
            pause_angle_degrees: 3.0,
        }
    }
}

impl CalibrationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.distance_per_pixel > 0.0) {
            bail!(
                "distance per pixel must be positive, got {}",
                self.distance_per_pixel
            );
        }
        if !(self.time_per_pixel > 0.0) {
            bail!("time per pixel must be positive, got {}", self.time_per_pixel);
        }
        if !(self.pause_angle_degrees >= 0.0 && self.pause_angle_degrees < 90.0) {
            bail!(
                "pause angle must lie in [0, 90) degrees, got {}",
                self.pause_angle_degrees
            );
        }
        Ok(())
    }
}

/// Process-wide calibration state. Persists across traces; mutable only
/// through [`CalibrationStore::update`], which rejects invalid values and
/// leaves the previous valid configuration in effect.
pub struct CalibrationStore {
    path: Option<PathBuf>,
    data: RwLock<CalibrationConfig>,
}

impl CalibrationStore {
    /// Store backed by a JSON file. A missing, unreadable or invalid file
    /// falls back to the default calibration.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read calibration from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            CalibrationConfig::default()
        };

        let store = Self {
            path: Some(path),
            data: RwLock::new(data),
        };
        if store.current().validate().is_err() {
            warn!("Stored calibration is out of range, falling back to defaults");
            *store.data.write().unwrap() = CalibrationConfig::default();
        }
        Ok(store)
    }

    /// Store without file persistence, starting from the defaults.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(CalibrationConfig::default()),
        }
    }

    pub fn current(&self) -> CalibrationConfig {
        *self.data.read().unwrap()
    }

    /// Replace the calibration. Invalid values are rejected with the
    /// previous configuration left in effect.
    pub fn update(&self, config: CalibrationConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            warn!("Rejected calibration update: {e}");
            return Err(e);
        }
        let mut guard = self.data.write().unwrap();
        *guard = config;
        self.persist(&guard)?;
        Ok(())
    }

    fn persist(&self, data: &CalibrationConfig) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write calibration to {}", path.display()))
    }
}
