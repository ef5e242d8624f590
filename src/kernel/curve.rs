use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a curve (connector).
    pub struct CurveId;
}

/// Data associated with a curve.
///
/// Curves in the in-memory kernel are straight two-point splines between
/// their endpoint nodes, so moving a node reshapes every curve on it.
#[derive(Debug, Clone)]
pub struct CurveData {
    /// Begin node.
    pub begin: NodeId,
    /// End node.
    pub end: NodeId,
    /// Number of grid points along the curve. `0` means undimensioned.
    pub dimension: usize,
}

impl CurveData {
    /// Creates an undimensioned curve between two nodes.
    #[must_use]
    pub fn new(begin: NodeId, end: NodeId) -> Self {
        Self {
            begin,
            end,
            dimension: 0,
        }
    }

    /// Returns `true` if `node` is one of this curve's endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.begin == node || self.end == node
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    #[must_use]
    pub fn far_node(&self, node: NodeId) -> Option<NodeId> {
        if self.begin == node {
            Some(self.end)
        } else if self.end == node {
            Some(self.begin)
        } else {
            None
        }
    }
}
