// src/lib.rs
//! Procedural tile-map layouts on a square grid.
//!
//! [`generator::generate`] grows a connected region of open cells from the
//! corner seed and classifies each open cell into a connector piece and
//! rotation. The [`render`] module hands the finished map to a renderer one
//! tile at a time.

pub mod config;
pub mod error;
pub mod generator;
pub mod map;
pub mod render;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::{MapGenError, RenderError};
pub use generator::{generate, generate_with_config, MapResult};
