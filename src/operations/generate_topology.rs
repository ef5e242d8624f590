use tracing::{debug, instrument};

use crate::error::{BuildError, Result};
use crate::kernel::{CurveId, GeometryKernel, NodeId};
use crate::math::{centroid, coincident, lerp, Point3};
use crate::params::check_radial_extent;

/// Curves created for the inner core and the radial spokes.
///
/// All arrays follow the rotational order of the loop nodes:
/// `core[i]` runs from core point `i` to core point `i + 1`, and
/// `spokes[i]` runs from core point `i` out to loop node `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhTopology {
    pub centroid: Point3,
    pub core_points: [Point3; 4],
    pub core: [CurveId; 4],
    pub spokes: [CurveId; 4],
}

/// Creates the core quad and the four spokes inside a validated loop.
///
/// Each core point lies on the segment from its loop node to the centroid
/// of the four nodes: `p + (1 - alpha) * (centroid - p)`. An `alpha` near 1
/// keeps the core at the loop; near 0 it shrinks the core onto the centroid.
pub struct GenerateTopology {
    nodes: [NodeId; 4],
    alpha: f64,
}

impl GenerateTopology {
    /// Creates a new `GenerateTopology` operation.
    #[must_use]
    pub fn new(nodes: [NodeId; 4], alpha: f64) -> Self {
        Self { nodes, alpha }
    }

    /// Executes the operation, creating eight curves in the kernel.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::OutOfRange`](crate::error::ParamsError::OutOfRange)
    /// if `alpha` is not in `(0, 1)`, [`BuildError::CollapsedCore`] if a core
    /// point lands on its loop node or its neighbour, and
    /// [`BuildError::DetachedSpoke`] if a spoke joins a node other than its
    /// loop node. Kernel errors are passed through.
    #[instrument(skip_all, fields(alpha = self.alpha))]
    pub fn execute<K: GeometryKernel + ?Sized>(&self, kernel: &mut K) -> Result<OhTopology> {
        check_radial_extent(self.alpha)?;

        let mut outer = [Point3::origin(); 4];
        for (point, &node) in outer.iter_mut().zip(&self.nodes) {
            *point = kernel.node_point(node)?;
        }

        let center = centroid(&outer);
        let core_points = outer.map(|p| lerp(&p, &center, 1.0 - self.alpha));
        debug!(centroid = ?center, ?core_points, "core points placed");

        for i in 0..4 {
            if coincident(&core_points[i], &outer[i])
                || coincident(&core_points[i], &core_points[(i + 1) % 4])
            {
                return Err(BuildError::CollapsedCore { node: self.nodes[i] }.into());
            }
        }

        let mut core = Vec::with_capacity(4);
        for i in 0..4 {
            core.push(kernel.create_curve(core_points[i], core_points[(i + 1) % 4])?);
        }
        let mut spokes = Vec::with_capacity(4);
        for i in 0..4 {
            let spoke = kernel.create_curve(core_points[i], outer[i])?;
            if kernel.curve_nodes(spoke)?.1 != self.nodes[i] {
                return Err(BuildError::DetachedSpoke { node: self.nodes[i] }.into());
            }
            spokes.push(spoke);
        }

        Ok(OhTopology {
            centroid: center,
            core_points,
            core: [core[0], core[1], core[2], core[3]],
            spokes: [spokes[0], spokes[1], spokes[2], spokes[3]],
        })
    }
}
