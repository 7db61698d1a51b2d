// src/map/mod.rs
pub mod cell;
pub mod tile;
pub mod weight_grid;

pub use cell::{Cell, Direction, GROWTH_SCAN_ORDER};
pub use tile::{ClassifiedTile, NeighborMask, Rotation, TileKind};
pub use weight_grid::{WeightGrid, SEED_WEIGHT_FLOOR};
