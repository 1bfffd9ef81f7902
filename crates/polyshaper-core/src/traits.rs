use glam::DVec2;

use crate::envelope::Bounds2;
use crate::error::Result;

/// Validate an input before a pipeline stage consumes it.
///
/// Implementors return the most specific failure they can detect.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Extent of a piece in the drawing plane, `None` when it has no geometry.
pub trait Footprint {
    fn footprint(&self) -> Option<Bounds2>;
}

impl Footprint for Bounds2 {
    fn footprint(&self) -> Option<Bounds2> {
        Some(*self)
    }
}

impl Footprint for [DVec2] {
    fn footprint(&self) -> Option<Bounds2> {
        Bounds2::from_points(self)
    }
}

impl<T: Footprint> Footprint for Vec<T> {
    fn footprint(&self) -> Option<Bounds2> {
        self.iter()
            .filter_map(Footprint::footprint)
            .reduce(|acc, b| acc.merge(&b))
    }
}
