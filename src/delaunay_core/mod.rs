mod legalize;
mod mesh;
mod side_info;
mod sweep;

pub(crate) mod math;

pub use side_info::{CircleSide, LineSideInfo};
pub(crate) use sweep::triangulate;
