//! Geometry kernel abstraction and an in-memory implementation.
//!
//! The OH operations never own geometry. They read and create entities
//! through [`GeometryKernel`], addressing them by typed handles. A host
//! application adapts its own model to this trait; [`MeshStore`] is a
//! self-contained arena used for standalone runs and tests.

pub mod curve;
pub mod node;
pub mod region;
mod store;

pub use curve::{CurveData, CurveId};
pub use node::{NodeData, NodeId};
pub use region::{RegionData, RegionId};
pub use store::MeshStore;

use crate::error::KernelError;
use crate::math::Point3;

/// Read and create access to curves, nodes and structured regions.
pub trait GeometryKernel {
    /// Returns the position of a node.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the node does not exist.
    fn node_point(&self, node: NodeId) -> Result<Point3, KernelError>;

    /// Returns every curve that has `node` as an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the node does not exist.
    fn node_curves(&self, node: NodeId) -> Result<Vec<CurveId>, KernelError>;

    /// Returns the `(begin, end)` nodes of a curve.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the curve does not exist.
    fn curve_nodes(&self, curve: CurveId) -> Result<(NodeId, NodeId), KernelError>;

    /// Returns the point count along a curve (`0` when undimensioned).
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the curve does not exist.
    fn curve_dimension(&self, curve: CurveId) -> Result<usize, KernelError>;

    /// Sets the point count along a curve.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the curve does not exist.
    fn set_curve_dimension(&mut self, curve: CurveId, dimension: usize)
        -> Result<(), KernelError>;

    /// Creates a straight two-point curve from `from` to `to`.
    ///
    /// Endpoints coincident with existing nodes must join those nodes, so
    /// that the new curve is connected to the model. When several nodes lie
    /// at one endpoint the kernel may join any of them; callers that need a
    /// particular node check [`curve_nodes`](Self::curve_nodes) afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::ZeroLengthCurve`] if both endpoints resolve to
    /// the same node, or another error if the kernel rejects the curve.
    fn create_curve(&mut self, from: Point3, to: Point3) -> Result<CurveId, KernelError>;

    /// Returns every structured region that has `curve` on its boundary.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EntityNotFound`] if the curve does not exist.
    fn regions_bounded_by(&self, curve: CurveId) -> Result<Vec<RegionId>, KernelError>;

    /// Creates a structured region from four boundary curves in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if a curve is unknown or the curves do not close.
    fn create_region(&mut self, edges: [CurveId; 4]) -> Result<RegionId, KernelError>;

    /// Deletes a structured region. Its boundary curves are kept.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::UnknownRegion`] if the region does not exist.
    fn delete_region(&mut self, region: RegionId) -> Result<(), KernelError>;
}
