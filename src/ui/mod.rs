//! Terminal-facing output: rendering contract plus text and JSON sinks.

pub mod render;
pub mod settings;

pub use render::{JsonRenderer, RenderSink, Renderer};
