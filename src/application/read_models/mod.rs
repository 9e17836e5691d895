//! Read models handed to the rendering layer
//!
//! The render context is the single, serializable view of a processed scan
//! that templates (or the JSON output) consume.

pub mod render_context;
pub mod render_context_builder;

pub use render_context::{RenderContext, RESERVED_KEYS};
pub use render_context_builder::RenderContextBuilder;
