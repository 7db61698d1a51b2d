// src/render/mod.rs
//! The boundary between a finished map and whatever draws it.
//!
//! A [`Renderer`] receives one [`TilePlacement`] per open cell, in discovery
//! order, through a [`SpawnSchedule`] that hands out a single placement per
//! tick. A [`TileSet`] can only be built once its visuals pass validation,
//! so no renderer ever sees a short tile set.

pub mod ascii;
pub mod tileset;
#[cfg(feature = "gui")]
pub mod viewer;

pub use ascii::AsciiRenderer;
pub use tileset::{TileSet, TileVisual, REQUIRED_VISUALS};

use crate::generator::MapResult;
use crate::map::{Cell, ClassifiedTile, NeighborMask, TileKind};
use crate::utils::Point3D;
use log::{debug, info};
use std::collections::BTreeSet;

/// Visual rotation of a tile relative to its classified rotation.
pub const YAW_OFFSET_DEGREES: i32 = 90;

/// Where and how one tile visual is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub cell: Cell,
    pub kind: TileKind,
    pub visual_index: usize,
    pub position: Point3D,
    /// Rotation about the vertical axis, in degrees.
    pub yaw_degrees: i32,
    pub connectors: NeighborMask,
}

impl TilePlacement {
    pub fn for_tile(tile: &ClassifiedTile, scale: f64) -> Self {
        TilePlacement {
            cell: tile.cell,
            kind: tile.kind,
            visual_index: tile.kind.visual_index(),
            position: Point3D::new(tile.x() as f64 * scale, 0.0, tile.y() as f64 * scale),
            yaw_degrees: tile.rotation.degrees() + YAW_OFFSET_DEGREES,
            connectors: tile.connectors(),
        }
    }
}

/// Consumes a finished map.
pub trait Renderer {
    /// Called once with the cells left closed, before any tile is spawned.
    fn walls(&mut self, _walls: &BTreeSet<Cell>) {}

    /// Called once per open cell, in discovery order.
    fn spawn(&mut self, placement: &TilePlacement);
}

/// Hands out a map's placements one per tick.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    placements: Vec<TilePlacement>,
    next: usize,
}

impl SpawnSchedule {
    pub fn new(map: &MapResult, tiles: &TileSet) -> Self {
        let placements = map
            .open_cells()
            .iter()
            .map(|tile| TilePlacement::for_tile(tile, tiles.scale()))
            .collect();
        SpawnSchedule {
            placements,
            next: 0,
        }
    }

    /// The next placement, or `None` once every tile has been handed out.
    pub fn tick(&mut self) -> Option<TilePlacement> {
        let placement = self.placements.get(self.next).copied()?;
        self.next += 1;
        Some(placement)
    }

    pub fn spawned(&self) -> &[TilePlacement] {
        &self.placements[..self.next]
    }

    pub fn remaining(&self) -> usize {
        self.placements.len() - self.next
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.placements.len()
    }
}

/// Drives `renderer` through a whole map in one go. Returns the number of
/// tiles spawned.
pub fn render_map<R: Renderer>(map: &MapResult, tiles: &TileSet, renderer: &mut R) -> usize {
    renderer.walls(map.wall_cells());
    let mut schedule = SpawnSchedule::new(map, tiles);
    let mut spawned = 0;
    while let Some(placement) = schedule.tick() {
        debug!(
            "Spawning {:?} at ({}, {}) yaw {}",
            placement.kind, placement.cell.x, placement.cell.y, placement.yaw_degrees
        );
        renderer.spawn(&placement);
        spawned += 1;
    }
    info!("Rendered {} tiles", spawned);
    spawned
}
