//! CPU-side geometry: spline math, curve frames, primitives, and the mesh
//! accumulator.

pub mod frame;
pub mod mesh;
pub mod primitive;
pub mod spline;

pub use frame::{rot_y90_z180, target_to, CurveSegmentState};
pub use mesh::{Mesh, MeshBuilder, MeshVertex};
pub use primitive::{wedge, Primitive};
