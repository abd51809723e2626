//! wgpu rendering module
//!
//! The scene is rebuilt every frame as one flat-coloured triangle list in
//! play-area pixels, then mapped to NDC and drawn in a single pass.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
