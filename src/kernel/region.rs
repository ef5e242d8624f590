use super::curve::CurveId;

slotmap::new_key_type! {
    /// Unique identifier for a structured quad region (domain).
    pub struct RegionId;
}

/// Data associated with a structured region.
///
/// A structured region is bounded by exactly four curves. Edge order is
/// significant: boundary conditions address edges by position (edge 1 is
/// `edges[0]`).
#[derive(Debug, Clone)]
pub struct RegionData {
    /// The four bounding curves, in boundary order.
    pub edges: [CurveId; 4],
}

impl RegionData {
    /// Creates a region bounded by the given curves.
    #[must_use]
    pub fn new(edges: [CurveId; 4]) -> Self {
        Self { edges }
    }

    /// Returns `true` if `curve` is one of the four boundary curves.
    #[must_use]
    pub fn is_bounded_by(&self, curve: CurveId) -> bool {
        self.edges.contains(&curve)
    }
}
