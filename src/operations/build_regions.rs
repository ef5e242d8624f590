use tracing::{debug, info, instrument};

use crate::error::{BuildError, Result};
use crate::kernel::{CurveId, GeometryKernel, RegionId};

/// Returns the boundary of radial region `k` (0-based) in edge order.
///
/// Edge 1 is outer curve `k`, edge 2 the spoke at loop node `k + 1`, edge 3
/// core curve `k` and edge 4 the spoke at loop node `k`. Outer curve `k`
/// and core curve `k` both span nodes `k` to `k + 1`, which is what makes
/// the quad close.
#[must_use]
pub fn radial_boundary(
    outer: &[CurveId; 4],
    core: &[CurveId; 4],
    spokes: &[CurveId; 4],
    k: usize,
) -> [CurveId; 4] {
    [outer[k], spokes[(k + 1) % 4], core[k], spokes[k]]
}

/// Creates one structured region from a boundary list.
///
/// # Errors
///
/// Returns [`BuildError::WrongCurveCount`] unless exactly four curves are
/// given, or a kernel error if the region cannot be created.
pub fn make_region<K: GeometryKernel + ?Sized>(
    kernel: &mut K,
    boundary: &[CurveId],
) -> Result<RegionId> {
    let edges = <[CurveId; 4]>::try_from(boundary).map_err(|_| BuildError::WrongCurveCount {
        found: boundary.len(),
    })?;
    Ok(kernel.create_region(edges)?)
}

/// Assembles the five regions of an OH block.
///
/// Region 0 is the core, bounded by the core curves in order. Regions 1 to 4
/// each close one outer curve against its core curve through the two
/// adjacent spokes (see [`radial_boundary`]).
///
/// Before any region is created, each spoke gets the radial dimension and
/// each core curve copies the dimension of the outer curve it faces.
pub struct BuildRegions {
    outer: [CurveId; 4],
    core: [CurveId; 4],
    spokes: [CurveId; 4],
    radial_dimension: usize,
}

impl BuildRegions {
    /// Creates a new `BuildRegions` operation.
    #[must_use]
    pub fn new(
        outer: [CurveId; 4],
        core: [CurveId; 4],
        spokes: [CurveId; 4],
        radial_dimension: usize,
    ) -> Self {
        Self {
            outer,
            core,
            spokes,
            radial_dimension,
        }
    }

    /// Executes the operation, returning `[core, radial 0, .., radial 3]`.
    ///
    /// # Errors
    ///
    /// Returns a kernel error if a dimension cannot be set or a region
    /// cannot be created.
    #[instrument(skip_all, fields(radial_dimension = self.radial_dimension))]
    pub fn execute<K: GeometryKernel + ?Sized>(&self, kernel: &mut K) -> Result<[RegionId; 5]> {
        for &spoke in &self.spokes {
            kernel.set_curve_dimension(spoke, self.radial_dimension)?;
        }
        for (&core, &outer) in self.core.iter().zip(&self.outer) {
            let dimension = kernel.curve_dimension(outer)?;
            kernel.set_curve_dimension(core, dimension)?;
        }
        debug!("dimensions propagated");

        let mut regions = [make_region(kernel, &self.core)?; 5];
        for k in 0..4 {
            let boundary = radial_boundary(&self.outer, &self.core, &self.spokes, k);
            regions[k + 1] = make_region(kernel, &boundary)?;
        }

        info!(?regions, "created OH regions");
        Ok(regions)
    }
}
