use tracing::{debug, instrument, warn};

use crate::error::{LoopError, Result};
use crate::kernel::{CurveId, GeometryKernel, NodeId};
use crate::selection::distinct_four;

/// Four curves and their shared nodes in traversal order.
///
/// Curve `i` joins `nodes[i]` and `nodes[(i + 1) % 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedLoop {
    pub nodes: [NodeId; 4],
    pub curves: [CurveId; 4],
}

/// Checks that four curves form a single closed quadrilateral loop.
///
/// Adjacency is taken only from shared nodes. The walk starts at the first
/// curve's begin node and, at each node, requires exactly one selected curve
/// other than the one it arrived on. Any node touched by more than two
/// selected curves is rejected rather than resolved.
pub struct ValidateLoop {
    curves: Vec<CurveId>,
}

impl ValidateLoop {
    /// Creates a new `ValidateLoop` check over the picked curves.
    #[must_use]
    pub fn new(curves: Vec<CurveId>) -> Self {
        Self { curves }
    }

    /// Executes the check, returning the loop in traversal order.
    ///
    /// # Errors
    ///
    /// Returns a [`LoopError`] describing the first defect found, or a kernel
    /// error if a curve or node cannot be read.
    #[instrument(skip_all, fields(curves = self.curves.len()))]
    pub fn execute<K: GeometryKernel + ?Sized>(&self, kernel: &K) -> Result<OrderedLoop> {
        let curves = distinct_four(&self.curves)
            .map_err(|found| LoopError::WrongSelectionCount { found })?;

        let (node0, node1) = kernel.curve_nodes(curves[0])?;
        if node0 == node1 {
            return Err(LoopError::BadConnectivity { node: node0 }.into());
        }

        let mut nodes = [node0, node1, node0, node0];
        let mut ordered = [curves[0]; 4];
        let mut at = node1;

        for step in 1..4 {
            let next = next_curve(kernel, at, ordered[step - 1], &curves)?;
            if ordered[..step].contains(&next) {
                let err = match step {
                    2 if next == curves[0] => LoopError::TwoConnectorLoop,
                    3 if next == curves[0] => LoopError::ThreeConnectorLoop,
                    _ => LoopError::BadConnectivity { node: at },
                };
                warn!(%err, "loop closes early");
                return Err(err.into());
            }

            let far = far_node(kernel, next, at)?;
            ordered[step] = next;
            if step < 3 {
                nodes[step + 1] = far;
            }
            at = far;
        }

        if at != node0 {
            return Err(LoopError::BadConnectivity { node: at }.into());
        }
        let at_start = touching(kernel, node0, &curves)?;
        if at_start.len() != 2 {
            return Err(LoopError::DegenerateJunction {
                node: node0,
                curves: at_start.len(),
            }
            .into());
        }

        debug!(?nodes, curves = ?ordered, "loop validated");
        Ok(OrderedLoop {
            nodes,
            curves: ordered,
        })
    }
}

/// Returns the single loop curve leaving `node` other than `arriving`.
fn next_curve<K: GeometryKernel + ?Sized>(
    kernel: &K,
    node: NodeId,
    arriving: CurveId,
    curves: &[CurveId; 4],
) -> Result<CurveId> {
    let touching = touching(kernel, node, curves)?;
    let candidates: Vec<CurveId> = touching.iter().copied().filter(|&c| c != arriving).collect();
    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => {
            warn!(?node, "no curve continues the loop");
            Err(LoopError::BadConnectivity { node }.into())
        }
        _ => {
            warn!(?node, curves = touching.len(), "junction of more than two curves");
            Err(LoopError::DegenerateJunction {
                node,
                curves: touching.len(),
            }
            .into())
        }
    }
}

/// Returns the loop curves incident on `node`, in selection order.
fn touching<K: GeometryKernel + ?Sized>(
    kernel: &K,
    node: NodeId,
    curves: &[CurveId; 4],
) -> Result<Vec<CurveId>> {
    let incident = kernel.node_curves(node)?;
    Ok(curves
        .iter()
        .copied()
        .filter(|c| incident.contains(c))
        .collect())
}

/// Returns the endpoint of `curve` opposite to `node`.
fn far_node<K: GeometryKernel + ?Sized>(kernel: &K, curve: CurveId, node: NodeId) -> Result<NodeId> {
    let (begin, end) = kernel.curve_nodes(curve)?;
    // A curve that starts and ends on the same node cannot be a quad side.
    if begin == end {
        return Err(LoopError::BadConnectivity { node }.into());
    }
    Ok(if begin == node { end } else { begin })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OhError;
    use crate::kernel::MeshStore;
    use crate::math::Point3;

    #[allow(clippy::cast_precision_loss)]
    fn nodes(store: &mut MeshStore, n: usize) -> Vec<NodeId> {
        (0..n)
            .map(|i| store.add_node(Point3::new(i as f64, (i * i) as f64, 0.0)))
            .collect()
    }

    fn link(store: &mut MeshStore, a: NodeId, b: NodeId) -> CurveId {
        store.add_curve(a, b).unwrap()
    }

    fn loop_error(store: &MeshStore, curves: Vec<CurveId>) -> LoopError {
        match ValidateLoop::new(curves).execute(store).unwrap_err() {
            OhError::Loop(err) => err,
            other => panic!("expected a loop error, got {other:?}"),
        }
    }

    /// Asserts that curve `i` joins node `i` and node `i + 1`.
    fn assert_consistent(store: &MeshStore, ordered: &OrderedLoop) {
        for i in 0..4 {
            let (b, e) = store.curve_nodes(ordered.curves[i]).unwrap();
            let (n0, n1) = (ordered.nodes[i], ordered.nodes[(i + 1) % 4]);
            assert!(
                (b == n0 && e == n1) || (b == n1 && e == n0),
                "curve {i} does not join node {i} and node {}",
                (i + 1) % 4
            );
        }
    }

    // ── Valid loops ────────────────────────────────────────────

    #[test]
    fn head_to_tail_square() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c: Vec<CurveId> = (0..4).map(|i| link(&mut store, n[i], n[(i + 1) % 4])).collect();

        let ordered = ValidateLoop::new(c.clone()).execute(&store).unwrap();

        assert_eq!(ordered.nodes, [n[0], n[1], n[2], n[3]]);
        assert_eq!(ordered.curves, [c[0], c[1], c[2], c[3]]);
        assert_consistent(&store, &ordered);
    }

    #[test]
    fn shuffled_and_reversed_curves() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[2], n[1]);
        let c2 = link(&mut store, n[3], n[2]);
        let c3 = link(&mut store, n[3], n[0]);

        let ordered = ValidateLoop::new(vec![c2, c0, c3, c1])
            .execute(&store)
            .unwrap();

        // c2 begins at n3, so the walk runs n3 -> n2 -> n1 -> n0.
        assert_eq!(ordered.nodes, [n[3], n[2], n[1], n[0]]);
        assert_eq!(ordered.curves, [c2, c1, c0, c3]);
        assert_consistent(&store, &ordered);
    }

    #[test]
    fn every_starting_curve_gives_a_consistent_loop() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c: Vec<CurveId> = (0..4).map(|i| link(&mut store, n[i], n[(i + 1) % 4])).collect();

        for start in 0..4 {
            let mut picked = c.clone();
            picked.rotate_left(start);
            let ordered = ValidateLoop::new(picked).execute(&store).unwrap();
            assert_eq!(ordered.curves[0], c[start]);
            assert_eq!(ordered.nodes[0], n[start]);
            assert_consistent(&store, &ordered);
        }
    }

    #[test]
    fn unselected_curves_at_a_corner_are_ignored() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 5);
        let c: Vec<CurveId> = (0..4).map(|i| link(&mut store, n[i], n[(i + 1) % 4])).collect();
        link(&mut store, n[1], n[4]);

        assert!(ValidateLoop::new(c).execute(&store).is_ok());
    }

    #[test]
    fn repeated_pick_of_a_curve_counts_once() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c: Vec<CurveId> = (0..4).map(|i| link(&mut store, n[i], n[(i + 1) % 4])).collect();
        let picked = vec![c[0], c[1], c[1], c[2], c[3]];

        assert!(ValidateLoop::new(picked).execute(&store).is_ok());
    }

    // ── Selection count ────────────────────────────────────────

    #[test]
    fn too_few_or_too_many_curves() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 5);
        let c: Vec<CurveId> = (0..5).map(|i| link(&mut store, n[i], n[(i + 1) % 5])).collect();

        assert_eq!(
            loop_error(&store, c[..3].to_vec()),
            LoopError::WrongSelectionCount { found: 3 }
        );
        assert_eq!(
            loop_error(&store, c.clone()),
            LoopError::WrongSelectionCount { found: 5 }
        );
        assert_eq!(
            loop_error(&store, vec![c[0], c[1], c[2], c[2]]),
            LoopError::WrongSelectionCount { found: 3 }
        );
    }

    // ── Junctions ──────────────────────────────────────────────

    #[test]
    fn three_curves_meeting_mid_walk() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[1], n[2]);
        let c2 = link(&mut store, n[1], n[3]);
        let c3 = link(&mut store, n[3], n[0]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::DegenerateJunction {
                node: n[1],
                curves: 3
            }
        );
    }

    #[test]
    fn three_curves_meeting_at_the_start_node() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[1], n[2]);
        let c2 = link(&mut store, n[2], n[0]);
        let c3 = link(&mut store, n[0], n[3]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::DegenerateJunction {
                node: n[0],
                curves: 3
            }
        );
    }

    // ── Broken chains ──────────────────────────────────────────

    #[test]
    fn open_chain_does_not_close() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 5);
        let c: Vec<CurveId> = (0..4).map(|i| link(&mut store, n[i], n[i + 1])).collect();

        assert_eq!(
            loop_error(&store, c),
            LoopError::BadConnectivity { node: n[4] }
        );
    }

    #[test]
    fn dead_end_after_first_curve() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 8);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[2], n[3]);
        let c2 = link(&mut store, n[4], n[5]);
        let c3 = link(&mut store, n[6], n[7]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::BadConnectivity { node: n[1] }
        );
    }

    #[test]
    fn dead_end_at_third_check_is_reported() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 6);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[1], n[2]);
        let c2 = link(&mut store, n[2], n[3]);
        let c3 = link(&mut store, n[4], n[5]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::BadConnectivity { node: n[3] }
        );
    }

    #[test]
    fn curve_closed_on_itself() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 4);
        let ring = link(&mut store, n[0], n[0]);
        let c1 = link(&mut store, n[0], n[1]);
        let c2 = link(&mut store, n[1], n[2]);
        let c3 = link(&mut store, n[2], n[3]);

        assert_eq!(
            loop_error(&store, vec![ring, c1, c2, c3]),
            LoopError::BadConnectivity { node: n[0] }
        );
    }

    // ── Premature closure ──────────────────────────────────────

    #[test]
    fn two_curve_loop() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 5);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[1], n[0]);
        let c2 = link(&mut store, n[2], n[3]);
        let c3 = link(&mut store, n[3], n[4]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::TwoConnectorLoop
        );
    }

    #[test]
    fn three_curve_loop() {
        let mut store = MeshStore::new();
        let n = nodes(&mut store, 5);
        let c0 = link(&mut store, n[0], n[1]);
        let c1 = link(&mut store, n[1], n[2]);
        let c2 = link(&mut store, n[2], n[0]);
        let c3 = link(&mut store, n[3], n[4]);

        assert_eq!(
            loop_error(&store, vec![c0, c1, c2, c3]),
            LoopError::ThreeConnectorLoop
        );
    }
}
