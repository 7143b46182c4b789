//! Rendering output
//!
//! Entities describe themselves as `DrawCommand`s; `shapes` turns a frame's
//! commands into triangles for whatever backend the host runs.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, DrawList, Shape};
pub use shapes::tessellate;
pub use vertex::{Vertex, colors};
