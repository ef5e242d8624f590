use tracing::{info, info_span};

use crate::error::{LoopError, Result};
use crate::kernel::{CurveId, GeometryKernel, RegionId};
use crate::params::OhParams;
use crate::selection::{request_loop_curves, LoopSelection, SelectionService};
use crate::solver::EllipticSolver;

use super::{
    BuildRegions, ClearExistingRegion, GenerateTopology, OhTopology, OrderedLoop, Relax,
    ValidateLoop,
};

/// Everything one OH block run created or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct OhBlock {
    /// The input loop in traversal order.
    pub outer: OrderedLoop,
    /// The new core and spoke curves.
    pub topology: OhTopology,
    /// `[core, radial 0, .., radial 3]`.
    pub regions: [RegionId; 5],
    /// The region spanning the loop that was deleted first, if any.
    pub replaced: Option<RegionId>,
    /// Whether the elliptic solver ran.
    pub relaxed: bool,
}

/// Builds an OH block inside a loop of four curves.
///
/// Parameters and the loop are validated before anything in the model
/// changes. A region already spanning the loop is only deleted once the
/// core and spokes exist. After that the kernel is trusted and nothing is
/// rolled back.
pub struct MakeOhBlock {
    curves: Vec<CurveId>,
    params: OhParams,
}

impl MakeOhBlock {
    /// Creates a new `MakeOhBlock` operation over the picked curves.
    #[must_use]
    pub fn new(curves: Vec<CurveId>, params: OhParams) -> Self {
        Self { curves, params }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns a params or loop error without touching the model, or a kernel
    /// error raised while creating entities or solving.
    pub fn execute<K>(&self, model: &mut K) -> Result<OhBlock>
    where
        K: GeometryKernel + EllipticSolver + ?Sized,
    {
        let span = info_span!("make_oh_block", curves = self.curves.len());
        let _guard = span.enter();

        self.params.validate()?;
        let outer = ValidateLoop::new(self.curves.clone()).execute(&*model)?;

        let topology =
            GenerateTopology::new(outer.nodes, self.params.radial_extent).execute(model)?;
        let replaced = ClearExistingRegion::new(outer.curves).execute(model)?;
        let regions = BuildRegions::new(
            outer.curves,
            topology.core,
            topology.spokes,
            self.params.radial_dimension,
        )
        .execute(model)?;

        if self.params.run_solver {
            Relax::new(regions, self.params.interpolate_edge_angle).execute(model)?;
        }

        info!(?regions, replaced = replaced.is_some(), "OH block complete");
        Ok(OhBlock {
            outer,
            topology,
            regions,
            replaced,
            relaxed: self.params.run_solver,
        })
    }

    /// Asks the user for the loop curves, then builds the block.
    ///
    /// Returns `Ok(None)` when the user cancels; the model is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::WrongSelectionCount`] if the user picks other than
    /// four curves, plus every error of [`MakeOhBlock::execute`].
    pub fn execute_interactive<K, S>(
        params: OhParams,
        selection: &mut S,
        model: &mut K,
    ) -> Result<Option<OhBlock>>
    where
        K: GeometryKernel + EllipticSolver + ?Sized,
        S: SelectionService + ?Sized,
    {
        params.validate()?;
        match request_loop_curves(selection) {
            LoopSelection::Curves(curves) => Self::new(curves.to_vec(), params)
                .execute(model)
                .map(Some),
            LoopSelection::Cancelled => Ok(None),
            LoopSelection::WrongCount(found) => {
                Err(LoopError::WrongSelectionCount { found }.into())
            }
        }
    }
}
