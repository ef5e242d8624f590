use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::kernel::{CurveId, GeometryKernel, RegionId};

/// Deletes the structured region that spans all four loop curves, if any.
///
/// The candidates are the regions bounded by the first curve, narrowed by
/// each following curve. Only a single survivor is deleted; with none or
/// several, the model is left untouched.
pub struct ClearExistingRegion {
    curves: [CurveId; 4],
}

impl ClearExistingRegion {
    /// Creates a new `ClearExistingRegion` operation.
    #[must_use]
    pub fn new(curves: [CurveId; 4]) -> Self {
        Self { curves }
    }

    /// Executes the operation, returning the deleted region.
    ///
    /// # Errors
    ///
    /// Returns a kernel error if a curve cannot be read or the delete fails.
    #[instrument(skip_all)]
    pub fn execute<K: GeometryKernel + ?Sized>(&self, kernel: &mut K) -> Result<Option<RegionId>> {
        let mut spanning = kernel.regions_bounded_by(self.curves[0])?;
        for &curve in &self.curves[1..] {
            let bounded = kernel.regions_bounded_by(curve)?;
            spanning.retain(|region| bounded.contains(region));
        }

        match spanning.as_slice() {
            [region] => {
                kernel.delete_region(*region)?;
                info!(?region, "removed region spanning the loop");
                Ok(Some(*region))
            }
            _ => {
                debug!(count = spanning.len(), "no single spanning region to remove");
                Ok(None)
            }
        }
    }
}
