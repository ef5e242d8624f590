use thiserror::Error;

use crate::kernel::{CurveId, NodeId, RegionId};

/// Top-level error type for OH block construction.
#[derive(Debug, Error)]
pub enum OhError {
    #[error(transparent)]
    Loop(#[from] LoopError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Errors raised while validating the four-curve input loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    #[error("expected 4 distinct curves, found {found}")]
    WrongSelectionCount { found: usize },

    #[error("node {node:?} is shared by {curves} of the selected curves")]
    DegenerateJunction { node: NodeId, curves: usize },

    #[error("no selected curve continues the loop at node {node:?}")]
    BadConnectivity { node: NodeId },

    #[error("loop closes after only two curves")]
    TwoConnectorLoop,

    #[error("loop closes after only three curves")]
    ThreeConnectorLoop,
}

/// Errors raised while assembling structured regions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("a structured region needs 4 boundary curves, got {found}")]
    WrongCurveCount { found: usize },

    #[error("core point for loop node {node:?} collapses onto a neighbouring point")]
    CollapsedCore { node: NodeId },

    #[error("spoke meant for loop node {node:?} ended on another node")]
    DetachedSpoke { node: NodeId },
}

/// Errors reported by a geometry kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("curve would start and end on the same node")]
    ZeroLengthCurve,

    #[error("boundary curves {0:?} do not form a closed loop")]
    OpenBoundary([CurveId; 4]),

    #[error("region {0:?} is not part of the model")]
    UnknownRegion(RegionId),
}

/// Errors in user-facing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("radial dimension must be 0 or at least 2, got {0}")]
    InvalidRadialDimension(usize),
}

/// Convenience type alias for results using [`OhError`].
pub type Result<T> = std::result::Result<T, OhError>;
