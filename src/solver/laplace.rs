use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::KernelError;
use crate::kernel::{CurveId, MeshStore, NodeId};
use crate::math::{centroid, Point3};

use super::{EdgeConstraint, EllipticSolver, SolveRequest};

/// Laplacian node relaxation over the requested regions.
///
/// Nodes on a fixed edge are pinned. Every other node moves to the mean of
/// its neighbours along region edges, all nodes updated together once per
/// iteration. Edge-angle settings are recorded but do not change the update.
impl EllipticSolver for MeshStore {
    fn solve(&mut self, request: &SolveRequest) -> Result<(), KernelError> {
        let mut pinned: HashSet<NodeId> = HashSet::new();
        let mut edges: HashSet<CurveId> = HashSet::new();

        for setup in &request.regions {
            let region = self.region(setup.region)?;
            for (&curve, boundary) in region.edges.iter().zip(&setup.edges) {
                edges.insert(curve);
                if boundary.constraint == EdgeConstraint::Fixed {
                    let data = self.curve(curve)?;
                    pinned.insert(data.begin);
                    pinned.insert(data.end);
                }
            }
        }

        let mut neighbours: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for &curve in &edges {
            let data = self.curve(curve)?;
            neighbours.entry(data.begin).or_default().push(data.end);
            neighbours.entry(data.end).or_default().push(data.begin);
        }
        neighbours.retain(|node, _| !pinned.contains(node));

        debug!(
            regions = request.regions.len(),
            free_nodes = neighbours.len(),
            pinned_nodes = pinned.len(),
            iterations = request.iterations,
            "relaxing nodes"
        );

        for _ in 0..request.iterations {
            let mut moved: Vec<(NodeId, Point3)> = Vec::with_capacity(neighbours.len());
            for (&node, adjacent) in &neighbours {
                let points = adjacent
                    .iter()
                    .map(|&n| self.node(n).map(|data| data.point))
                    .collect::<Result<Vec<_>, _>>()?;
                moved.push((node, centroid(&points)));
            }
            for (node, point) in moved {
                self.node_mut(node)?.point = point;
            }
        }

        self.record_solve(request.clone());
        Ok(())
    }
}
