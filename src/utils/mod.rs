// src/utils/mod.rs
pub mod geometry;

pub use geometry::{BoundingBox, Point3D};
