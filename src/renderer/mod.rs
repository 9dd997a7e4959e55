//! WebGPU rendering module
//!
//! Draws the lit 3D wheel as a static triangle list; only the model
//! rotation changes from frame to frame.

pub mod camera;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod vertex;

pub use camera::Camera;
pub use mesh::{PartKind, WheelMesh, build_wheel};
pub use pipeline::RenderState;
pub use scene::Globals;
pub use vertex::Vertex;
