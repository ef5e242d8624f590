//! Elliptic smoothing interface.
//!
//! The solver itself is an external collaborator. Callers describe which
//! regions to smooth and how each boundary edge behaves; the solver runs a
//! fixed number of iterations synchronously and moves geometry in place.

mod laplace;

use crate::error::KernelError;
use crate::kernel::RegionId;

/// Whether a boundary edge may move during smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeConstraint {
    /// The edge keeps its shape and its endpoints stay put.
    #[default]
    Fixed,
    /// The edge is free to move with the interior.
    Floating,
}

/// How grid-line angles at an edge are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeAngle {
    /// The solver's default angle control.
    #[default]
    Default,
    /// Interpolate the angle at which interior lines meet the edge.
    Interpolate,
}

/// Boundary treatment for one edge of a structured region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeBoundary {
    pub constraint: EdgeConstraint,
    pub angle: EdgeAngle,
}

impl EdgeBoundary {
    /// A fixed edge with default angle control.
    #[must_use]
    pub fn fixed() -> Self {
        Self::default()
    }

    /// A floating edge with default angle control.
    #[must_use]
    pub fn floating() -> Self {
        Self {
            constraint: EdgeConstraint::Floating,
            angle: EdgeAngle::Default,
        }
    }
}

/// One region handed to the solver with its per-edge boundary treatment.
///
/// `edges[0]` addresses edge 1 of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSetup {
    pub region: RegionId,
    pub edges: [EdgeBoundary; 4],
}

/// A complete smoothing job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub regions: Vec<RegionSetup>,
    pub iterations: u32,
}

/// A structured-grid elliptic smoother.
pub trait EllipticSolver {
    /// Runs `request.iterations` smoothing iterations over the requested
    /// regions, then finalizes the result into the model.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested region is not part of the model.
    fn solve(&mut self, request: &SolveRequest) -> Result<(), KernelError>;
}
