//! OH block topology for structured quad meshing.
//!
//! Given four curves that close into a quadrilateral loop, this crate
//! places a smaller core quad around the loop's centroid, joins each core
//! corner to its loop corner with a spoke, and splits the interior into
//! five structured regions: the core and four radial regions. The regions
//! can then be smoothed by an elliptic solver.
//!
//! Geometry lives behind [`kernel::GeometryKernel`] and
//! [`solver::EllipticSolver`]; [`kernel::MeshStore`] implements both in
//! memory.

pub mod error;
pub mod kernel;
pub mod math;
pub mod operations;
pub mod params;
pub mod selection;
pub mod solver;

pub use error::{OhError, Result};
pub use params::OhParams;
