use slotmap::SlotMap;
use tracing::trace;

use crate::error::KernelError;
use crate::math::{coincident, Point3};
use crate::solver::SolveRequest;

use super::{CurveData, CurveId, GeometryKernel, NodeData, NodeId, RegionData, RegionId};

/// In-memory model holding nodes, curves and structured regions.
///
/// Entities reference each other via typed IDs (generational indices).
/// Curves created through [`GeometryKernel::create_curve`] join any
/// existing node within [`TOLERANCE`](crate::math::TOLERANCE) of their
/// endpoints.
#[derive(Debug, Default)]
pub struct MeshStore {
    nodes: SlotMap<NodeId, NodeData>,
    curves: SlotMap<CurveId, CurveData>,
    regions: SlotMap<RegionId, RegionData>,
    solves: Vec<SolveRequest>,
}

impl MeshStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Inserts a node and returns its ID.
    pub fn add_node(&mut self, point: Point3) -> NodeId {
        self.nodes.insert(NodeData::new(point))
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, KernelError> {
        self.nodes
            .get(id)
            .ok_or_else(|| KernelError::EntityNotFound("node".into()))
    }

    /// Returns a mutable reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, KernelError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| KernelError::EntityNotFound("node".into()))
    }

    /// Returns the node at `point`, creating one if no node lies there.
    pub fn node_at(&mut self, point: Point3) -> NodeId {
        let existing = self
            .nodes
            .iter()
            .find(|(_, data)| coincident(&data.point, &point))
            .map(|(id, _)| id);
        existing.unwrap_or_else(|| self.add_node(point))
    }

    /// Number of nodes in the store.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- Curve operations ---

    /// Inserts a curve between two existing nodes and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is not found in the store.
    pub fn add_curve(&mut self, begin: NodeId, end: NodeId) -> Result<CurveId, KernelError> {
        self.node(begin)?;
        self.node(end)?;
        Ok(self.curves.insert(CurveData::new(begin, end)))
    }

    /// Returns a reference to the curve data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn curve(&self, id: CurveId) -> Result<&CurveData, KernelError> {
        self.curves
            .get(id)
            .ok_or_else(|| KernelError::EntityNotFound("curve".into()))
    }

    /// Returns a mutable reference to the curve data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn curve_mut(&mut self, id: CurveId) -> Result<&mut CurveData, KernelError> {
        self.curves
            .get_mut(id)
            .ok_or_else(|| KernelError::EntityNotFound("curve".into()))
    }

    /// Number of curves in the store.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    // --- Region operations ---

    /// Returns a reference to the region data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::UnknownRegion`] if the region is not in the store.
    pub fn region(&self, id: RegionId) -> Result<&RegionData, KernelError> {
        self.regions.get(id).ok_or(KernelError::UnknownRegion(id))
    }

    /// Number of regions in the store.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the corner points of a region in boundary order.
    ///
    /// Corner `i` is the node shared by edge `i - 1` and edge `i`
    /// (cyclically), so corner 0 sits between edge 4 and edge 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the region or one of its entities is missing.
    pub fn region_corners(&self, id: RegionId) -> Result<[Point3; 4], KernelError> {
        let edges = self.region(id)?.edges;
        let mut corners = [Point3::origin(); 4];
        for (i, corner) in corners.iter_mut().enumerate() {
            let prev = self.curve(edges[(i + 3) % 4])?;
            let curr = self.curve(edges[i])?;
            let shared = [curr.begin, curr.end]
                .into_iter()
                .find(|&n| prev.touches(n))
                .ok_or(KernelError::OpenBoundary(edges))?;
            *corner = self.node(shared)?.point;
        }
        Ok(corners)
    }

    // --- Solver bookkeeping ---

    /// Requests handed to the elliptic solver, oldest first.
    #[must_use]
    pub fn solve_log(&self) -> &[SolveRequest] {
        &self.solves
    }

    pub(crate) fn record_solve(&mut self, request: SolveRequest) {
        self.solves.push(request);
    }

    /// Checks that four curves are distinct and chain into a closed loop,
    /// in either traversal direction starting from `edges[0]`.
    fn check_closed(&self, edges: [CurveId; 4]) -> Result<(), KernelError> {
        let mut data = Vec::with_capacity(4);
        for (i, &id) in edges.iter().enumerate() {
            if edges[..i].contains(&id) {
                return Err(KernelError::OpenBoundary(edges));
            }
            let curve = self.curve(id)?;
            if curve.begin == curve.end {
                return Err(KernelError::ZeroLengthCurve);
            }
            data.push(curve);
        }

        let closes = |start: NodeId, mut cur: NodeId| {
            for curve in &data[1..] {
                match curve.far_node(cur) {
                    Some(next) => cur = next,
                    None => return false,
                }
            }
            cur == start
        };

        if closes(data[0].begin, data[0].end) || closes(data[0].end, data[0].begin) {
            Ok(())
        } else {
            Err(KernelError::OpenBoundary(edges))
        }
    }
}

impl GeometryKernel for MeshStore {
    fn node_point(&self, node: NodeId) -> Result<Point3, KernelError> {
        Ok(self.node(node)?.point)
    }

    fn node_curves(&self, node: NodeId) -> Result<Vec<CurveId>, KernelError> {
        self.node(node)?;
        Ok(self
            .curves
            .iter()
            .filter(|(_, data)| data.touches(node))
            .map(|(id, _)| id)
            .collect())
    }

    fn curve_nodes(&self, curve: CurveId) -> Result<(NodeId, NodeId), KernelError> {
        let data = self.curve(curve)?;
        Ok((data.begin, data.end))
    }

    fn curve_dimension(&self, curve: CurveId) -> Result<usize, KernelError> {
        Ok(self.curve(curve)?.dimension)
    }

    fn set_curve_dimension(
        &mut self,
        curve: CurveId,
        dimension: usize,
    ) -> Result<(), KernelError> {
        self.curve_mut(curve)?.dimension = dimension;
        Ok(())
    }

    fn create_curve(&mut self, from: Point3, to: Point3) -> Result<CurveId, KernelError> {
        if coincident(&from, &to) {
            return Err(KernelError::ZeroLengthCurve);
        }
        let begin = self.node_at(from);
        let end = self.node_at(to);
        if begin == end {
            return Err(KernelError::ZeroLengthCurve);
        }
        let id = self.add_curve(begin, end)?;
        trace!(?id, ?begin, ?end, "created curve");
        Ok(id)
    }

    fn regions_bounded_by(&self, curve: CurveId) -> Result<Vec<RegionId>, KernelError> {
        self.curve(curve)?;
        Ok(self
            .regions
            .iter()
            .filter(|(_, data)| data.is_bounded_by(curve))
            .map(|(id, _)| id)
            .collect())
    }

    fn create_region(&mut self, edges: [CurveId; 4]) -> Result<RegionId, KernelError> {
        self.check_closed(edges)?;
        let id = self.regions.insert(RegionData::new(edges));
        trace!(?id, "created region");
        Ok(id)
    }

    fn delete_region(&mut self, region: RegionId) -> Result<(), KernelError> {
        self.regions
            .remove(region)
            .map(|_| ())
            .ok_or(KernelError::UnknownRegion(region))
    }
}
