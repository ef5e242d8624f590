use tracing::{info, instrument};

use crate::error::Result;
use crate::kernel::RegionId;
use crate::solver::{EdgeAngle, EdgeBoundary, EllipticSolver, RegionSetup, SolveRequest};

/// Number of elliptic iterations run over a new OH block.
pub const RELAX_ITERATIONS: u32 = 10;

/// Smooths the five regions of an OH block with the elliptic solver.
///
/// The core region floats on all four edges. Each radial region keeps edge 1
/// (the outer loop curve) fixed and floats the other three. Optionally the
/// grid-line angle at each fixed outer edge is interpolated.
pub struct Relax {
    regions: [RegionId; 5],
    interpolate_edge_angle: bool,
}

impl Relax {
    /// Creates a new `Relax` operation.
    #[must_use]
    pub fn new(regions: [RegionId; 5], interpolate_edge_angle: bool) -> Self {
        Self {
            regions,
            interpolate_edge_angle,
        }
    }

    /// Returns the job handed to the solver.
    #[must_use]
    pub fn request(&self) -> SolveRequest {
        let floating = EdgeBoundary::floating();
        let mut outer = EdgeBoundary::fixed();
        if self.interpolate_edge_angle {
            outer.angle = EdgeAngle::Interpolate;
        }

        let core = RegionSetup {
            region: self.regions[0],
            edges: [floating; 4],
        };
        let radial = self.regions[1..].iter().map(|&region| RegionSetup {
            region,
            edges: [outer, floating, floating, floating],
        });

        SolveRequest {
            regions: std::iter::once(core).chain(radial).collect(),
            iterations: RELAX_ITERATIONS,
        }
    }

    /// Executes the operation, running the solver to completion.
    ///
    /// # Errors
    ///
    /// Returns a kernel error if the solver rejects the request.
    #[instrument(skip_all, fields(interpolate_edge_angle = self.interpolate_edge_angle))]
    pub fn execute<S: EllipticSolver + ?Sized>(&self, solver: &mut S) -> Result<()> {
        solver.solve(&self.request())?;
        info!(iterations = RELAX_ITERATIONS, "relaxed OH regions");
        Ok(())
    }
}
