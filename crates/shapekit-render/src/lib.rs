//! shapekit render library
//!
//! Replays the display lists recorded by shapekit widgets onto a GPU scene.
//! The default implementation uses Vello, with Parley for text.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod text;
#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use text::{ParleyMetrics, TextShaper};
#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
