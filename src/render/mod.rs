//! Rendering module
//! 
//! Keeps stdout in step with the store.

pub mod renderer;

pub use renderer::Renderer;
