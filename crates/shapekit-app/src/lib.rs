//! shapekit gallery application
//!
//! Window, GPU surface and input plumbing around a demo scene that shows
//! every shapekit widget.

mod app;
mod config;
mod gallery;

pub use app::{App, AppError};
pub use config::{AppConfig, ConfigError, ConfigResult};
pub use gallery::Gallery;
