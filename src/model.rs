use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};

/// A map position as `(latitude, longitude)` in degrees.
///
/// Serializes as a plain 2-element array, which is also the snapshot form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lng(self) -> f64 {
        self.1
    }

    fn require_finite(self) -> Result<Self> {
        if self.0.is_finite() && self.1.is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidInput(format!(
                "coordinates must be finite, got ({}, {})",
                self.0, self.1
            )))
        }
    }
}

/// Variant payload: the extra input plus the metric derived from it.
///
/// Internally tagged so the snapshot carries a `"type"` discriminator and
/// loading reconstructs the right variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutKind {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

impl WorkoutKind {
    /// Discriminator as persisted.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Running { .. } => "running",
            Self::Cycling { .. } => "cycling",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::Cycling { .. } => "Cycling",
        }
    }

    /// Marker popup icon.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running { .. } => "🏃‍♂️",
            Self::Cycling { .. } => "🚴🏽‍♀️",
        }
    }
}

/// One recorded exercise session pinned to a map position.
///
/// All fields are set exactly once at construction; the derived metric and the
/// description are never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    pub interaction_count: u32,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    /// Validate and build a run; pace is derived here, once.
    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self> {
        Self::running_at(Utc::now(), coordinates, distance_km, duration_min, cadence_spm)
    }

    /// Validate and build a ride; speed is derived here, once.
    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        Self::cycling_at(
            Utc::now(),
            coordinates,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    fn running_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self> {
        let coordinates = coordinates.require_finite()?;
        let distance_km = require_positive("distance", distance_km)?;
        let duration_min = require_positive("duration", duration_min)?;
        let cadence_spm = require_positive("cadence", cadence_spm)?;

        let kind = WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Ok(Self::assemble(
            created_at,
            coordinates,
            distance_km,
            duration_min,
            kind,
        ))
    }

    fn cycling_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        let coordinates = coordinates.require_finite()?;
        let distance_km = require_positive("distance", distance_km)?;
        let duration_min = require_positive("duration", duration_min)?;
        // Zero or negative gain is a valid ride (downhill); only NaN/inf is out.
        let elevation_gain_m = require_finite("elevation gain", elevation_gain_m)?;

        let kind = WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Ok(Self::assemble(
            created_at,
            coordinates,
            distance_km,
            duration_min,
            kind,
        ))
    }

    fn assemble(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        let description = format!("{} on {}", kind.label(), created_at.format("%B %-d"));
        Self {
            id: Uuid::new_v4(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description,
            interaction_count: 0,
            kind,
        }
    }

    /// Count one selection of this record. Nothing reads the counter yet.
    pub fn select(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }
}

fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

fn require_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}
