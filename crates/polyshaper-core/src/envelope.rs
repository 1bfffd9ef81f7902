use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{PolyshaperError, Result};
use crate::traits::Footprint;

/// Axis-aligned bounds of a piece in the drawing plane, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2 {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    /// Width and height.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Working area of the selected machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineEnvelope {
    /// Maximum piece width in mm.
    pub width: f64,
    /// Maximum piece height in mm.
    pub height: f64,
    /// Slack allowed on each axis before a piece is rejected (mm).
    pub tolerance: f64,
}

impl MachineEnvelope {
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub fn fits(&self, size: DVec2) -> bool {
        size.x <= self.width + self.tolerance && size.y <= self.height + self.tolerance
    }

    /// Rejects `bounds` with the machine's own dimensions if it does not fit.
    pub fn check(&self, bounds: &Bounds2) -> Result<()> {
        let size = bounds.size();
        if self.fits(size) {
            return Ok(());
        }
        tracing::debug!(
            piece_width = size.x,
            piece_height = size.y,
            machine_width = self.width,
            machine_height = self.height,
            "workpiece exceeds machine envelope"
        );
        Err(PolyshaperError::invalid_workpiece_dimensions(self.width, self.height))
    }

    /// Like [`check`](Self::check), for anything with a footprint. Empty pieces always fit.
    pub fn check_piece<P: Footprint + ?Sized>(&self, piece: &P) -> Result<()> {
        match piece.footprint() {
            Some(bounds) => self.check(&bounds),
            None => Ok(()),
        }
    }
}
