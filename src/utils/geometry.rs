// src/utils/geometry.rs

/// A point in world space. `y` is up; the map lies on the `x`/`z` plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned bounds of a visual's footprint on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
}

impl BoundingBox {
    pub fn new_empty() -> Self {
        BoundingBox {
            min_x: f64::INFINITY,
            min_z: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    pub fn new(min_x: f64, min_z: f64, max_x: f64, max_z: f64) -> Self {
        BoundingBox { min_x, min_z, max_x, max_z }
    }

    pub fn from_center_size(center_x: f64, center_z: f64, width: f64, depth: f64) -> Self {
        BoundingBox::new(
            center_x - width / 2.0,
            center_z - depth / 2.0,
            center_x + width / 2.0,
            center_z + depth / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_z > self.max_z
    }

    pub fn combine(&mut self, other: &BoundingBox) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_z = self.min_z.min(other.min_z);
        self.max_x = self.max_x.max(other.max_x);
        self.max_z = self.max_z.max(other.max_z);
    }

    /// Smallest box holding every box in `parts`. Empty if `parts` is.
    pub fn union_of(parts: &[BoundingBox]) -> Self {
        parts.iter().fold(BoundingBox::new_empty(), |mut acc, part| {
            acc.combine(part);
            acc
        })
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }
}
