// src/generator/frontier.rs

use crate::map::{Cell, WeightGrid, GROWTH_SCAN_ORDER};
use log::{debug, info};
use std::collections::BTreeSet;

/// Grows the open set of a [`WeightGrid`] outward from the seed.
///
/// Each pass scans the neighbours of every open cell and opens the lowest
/// weight one that may be opened. The comparison baseline is re-anchored at
/// the first open cell (the seed) on every pass, and only a strictly lower
/// weight replaces the current candidate, so ties go to the first neighbour
/// reached in scan order.
pub struct FrontierExpander<'a> {
    grid: &'a mut WeightGrid,
}

impl<'a> FrontierExpander<'a> {
    pub fn new(grid: &'a mut WeightGrid) -> Self {
        FrontierExpander { grid }
    }

    /// A cell may be opened if it is closed and touches at most one open cell.
    pub fn can_open(&self, cell: Cell) -> bool {
        !self.grid.is_open(cell) && self.grid.open_neighbors(cell).count() <= 1
    }

    /// Runs one pass. Returns the cell it opened, or `None` once no
    /// neighbour of the open set can be opened.
    pub fn step(&mut self) -> Option<Cell> {
        let anchor = *self.grid.open_cells().first()?;
        let mut candidate = anchor;
        let mut best = self.grid.weight(anchor)?;

        for &node in self.grid.open_cells() {
            for dir in GROWTH_SCAN_ORDER {
                let Some(next) = self.grid.neighbor(node, dir) else {
                    continue;
                };
                let Some(weight) = self.grid.weight(next) else {
                    continue;
                };
                if weight < best && self.can_open(next) {
                    candidate = next;
                    best = weight;
                }
            }
        }

        if candidate == anchor {
            return None;
        }

        self.grid.open(candidate);
        debug!("Opened cell ({}, {}) with weight {}", candidate.x, candidate.y, best);
        Some(candidate)
    }

    /// Grows until no further cell can be opened and returns the cells left
    /// closed.
    pub fn expand(mut self) -> BTreeSet<Cell> {
        while self.step().is_some() {}

        let walls = self.grid.wall_cells();
        info!(
            "Growth finished: {} open cells, {} wall cells",
            self.grid.open_cells().len(),
            walls.len()
        );
        walls
    }
}
