// src/map/weight_grid.rs

use crate::map::{Cell, ClassifiedTile, Direction, NeighborMask, Rotation, TileKind};
use log::info;
use rand::Rng;
use std::collections::BTreeSet;

/// The seed weight never drops below this, whatever the weight range.
pub const SEED_WEIGHT_FLOOR: u32 = 100;

/// Square grid state shared by the generation phases: per-cell weights, the
/// open set in discovery order, and per-cell classification once assigned.
///
/// Cells are stored flattened at `y * size + x`.
#[derive(Debug, Clone)]
pub struct WeightGrid {
    size: usize,
    weights: Vec<u32>,
    open: Vec<bool>,
    open_cells: Vec<Cell>,
    classes: Vec<Option<(TileKind, Rotation)>>,
}

impl WeightGrid {
    /// The cell growth starts from.
    pub const SEED: Cell = Cell::new(0, 0);

    /// Creates a `size` x `size` grid with weights drawn uniformly from
    /// `[0, weight_range)`. The seed gets a weight above any possible draw
    /// and starts as the only open cell.
    ///
    /// # Panics
    ///
    /// Panics if `size` or `weight_range` is zero.
    pub fn initialize<R: Rng>(size: usize, weight_range: u32, rng: &mut R) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        assert!(weight_range >= 1, "weight range must be at least 1");

        let mut weights = vec![0; size * size];
        // Draw order is x-major; seeded maps depend on it.
        for x in 0..size {
            for y in 0..size {
                weights[y * size + x] = rng.random_range(0..weight_range);
            }
        }
        weights[0] = SEED_WEIGHT_FLOOR.max(weight_range);

        info!("Initialized {}x{} weight grid (weights in 0..{})", size, size, weight_range);
        Self::with_seed_open(size, weights)
    }

    /// Creates a grid from explicit weights laid out at `y * size + x`.
    /// The seed weight is raised to the sentinel if it is not already above
    /// every other weight. If another cell already holds `u32::MAX`, the seed
    /// ties it instead.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len() != size * size` or `size` is zero.
    pub fn from_weights(size: usize, mut weights: Vec<u32>) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        assert_eq!(weights.len(), size * size, "weight count must match grid area");

        let highest = weights.iter().skip(1).copied().max().unwrap_or(0);
        weights[0] = weights[0].max(SEED_WEIGHT_FLOOR).max(highest.saturating_add(1));
        Self::with_seed_open(size, weights)
    }

    fn with_seed_open(size: usize, weights: Vec<u32>) -> Self {
        let mut grid = WeightGrid {
            size,
            weights,
            open: vec![false; size * size],
            open_cells: Vec::new(),
            classes: vec![None; size * size],
        };
        grid.open(Self::SEED);
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < self.size && cell.y < self.size {
            Some(cell.y * self.size + cell.x)
        } else {
            None
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Weight of `cell`, or `None` when out of bounds.
    pub fn weight(&self, cell: Cell) -> Option<u32> {
        self.index(cell).map(|i| self.weights[i])
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).map_or(false, |i| self.open[i])
    }

    /// Open cells in the order they were opened. The seed is always first.
    pub fn open_cells(&self) -> &[Cell] {
        &self.open_cells
    }

    /// Marks `cell` open and appends it to the open set. Returns `false` if
    /// the cell was already open or lies outside the grid.
    pub fn open(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) if !self.open[i] => {
                self.open[i] = true;
                self.open_cells.push(cell);
                true
            }
            _ => false,
        }
    }

    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        cell.neighbor(dir, self.size)
    }

    /// Sides of `cell` whose neighbour is open. Off-grid sides count as closed.
    pub fn open_neighbors(&self, cell: Cell) -> NeighborMask {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.neighbor(cell, dir).map_or(false, |n| self.is_open(n)))
            .fold(NeighborMask::EMPTY, NeighborMask::with)
    }

    /// Cells never opened, in coordinate order.
    pub fn wall_cells(&self) -> BTreeSet<Cell> {
        (0..self.size)
            .flat_map(|x| (0..self.size).map(move |y| Cell::new(x, y)))
            .filter(|&cell| !self.is_open(cell))
            .collect()
    }

    pub fn set_classification(&mut self, cell: Cell, kind: TileKind, rotation: Rotation) {
        if let Some(i) = self.index(cell) {
            self.classes[i] = Some((kind, rotation));
        }
    }

    /// Classified tile for `cell`, once the classification pass has run.
    pub fn classification(&self, cell: Cell) -> Option<ClassifiedTile> {
        let (kind, rotation) = self.classes[self.index(cell)?]?;
        Some(ClassifiedTile { cell, kind, rotation })
    }
}
