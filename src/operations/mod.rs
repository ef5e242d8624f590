mod build_regions;
mod clear_region;
mod generate_topology;
mod make_oh;
mod relax;
mod validate_loop;

pub use build_regions::{make_region, radial_boundary, BuildRegions};
pub use clear_region::ClearExistingRegion;
pub use generate_topology::{GenerateTopology, OhTopology};
pub use make_oh::{MakeOhBlock, OhBlock};
pub use relax::{Relax, RELAX_ITERATIONS};
pub use validate_loop::{OrderedLoop, ValidateLoop};
