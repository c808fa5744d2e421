//! Rendering support
//!
//! Turns a `RenderFrame` into vertex buffers. Drawing them is the host's job.

pub mod shapes;
pub mod vertex;

pub use shapes::{FrameGeometry, frame_geometry};
pub use vertex::Vertex;
