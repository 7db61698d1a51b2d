// src/generator/mod.rs
//! Map generation: grow a connected region from the seed, then classify each
//! open cell so connector tiles line up with their neighbours.

mod classifier;
mod frontier;

pub use classifier::{classify_pattern, NeighborClassifier};
pub use frontier::FrontierExpander;

use crate::config::GeneratorConfig;
use crate::error::MapGenError;
use crate::map::{Cell, ClassifiedTile, Direction, WeightGrid};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

/// A finished, fully classified map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapResult {
    size: usize,
    open_cells: Vec<ClassifiedTile>,
    wall_cells: BTreeSet<Cell>,
}

impl MapResult {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Open cells in discovery order.
    pub fn open_cells(&self) -> &[ClassifiedTile] {
        &self.open_cells
    }

    /// Cells never opened.
    pub fn wall_cells(&self) -> &BTreeSet<Cell> {
        &self.wall_cells
    }

    pub fn tile_at(&self, cell: Cell) -> Option<&ClassifiedTile> {
        self.open_cells.iter().find(|tile| tile.cell == cell)
    }

    /// True if the open cells form a single 4-connected region.
    pub fn is_connected(&self) -> bool {
        if self.open_cells.is_empty() {
            return true;
        }

        let size = self.size;
        let key = |cell: Cell| cell.y * size + cell.x;
        let open: BTreeSet<Cell> = self.open_cells.iter().map(|tile| tile.cell).collect();

        let mut components = QuickUnionUf::<UnionBySize>::new(size * size);
        for &cell in &open {
            for dir in [Direction::Right, Direction::Up] {
                if let Some(next) = cell.neighbor(dir, size) {
                    if open.contains(&next) {
                        components.union(key(cell), key(next));
                    }
                }
            }
        }

        let root = components.find(key(self.open_cells[0].cell));
        open.iter().all(|&cell| components.find(key(cell)) == root)
    }
}

/// Runs the generation phases for one configuration.
pub struct MapGenerator {
    size: usize,
    weight_range: u32,
    rng: StdRng,
}

impl MapGenerator {
    /// Validates `config` and prepares the RNG. Without a seed the RNG is
    /// seeded from the operating system.
    pub fn new(config: &GeneratorConfig) -> Result<Self, MapGenError> {
        config.validate()?;

        let size = usize::try_from(config.size)
            .map_err(|_| MapGenError::invalid(format!("size {} out of range", config.size)))?;
        let weight_range = u32::try_from(config.weight_range).map_err(|_| {
            MapGenError::invalid(format!("weight_range {} out of range", config.weight_range))
        })?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(MapGenerator {
            size,
            weight_range,
            rng,
        })
    }

    /// Builds a fresh map. Repeated calls continue the same RNG stream.
    pub fn generate(&mut self) -> Result<MapResult, MapGenError> {
        let mut grid = WeightGrid::initialize(self.size, self.weight_range, &mut self.rng);

        let wall_cells = FrontierExpander::new(&mut grid).expand();
        NeighborClassifier::new(&mut grid).classify_all()?;

        let open_cells = grid
            .open_cells()
            .iter()
            .filter_map(|&cell| grid.classification(cell))
            .collect::<Vec<_>>();

        info!(
            "Generated {}x{} map: {} open, {} walls",
            self.size,
            self.size,
            open_cells.len(),
            wall_cells.len()
        );

        Ok(MapResult {
            size: self.size,
            open_cells,
            wall_cells,
        })
    }
}

/// Generates a map of `size` x `size` cells with weights in
/// `[0, weight_range)`. A fixed `rng_seed` makes the result reproducible.
pub fn generate(
    size: i32,
    weight_range: i32,
    rng_seed: Option<u64>,
) -> Result<MapResult, MapGenError> {
    generate_with_config(&GeneratorConfig::new(size, weight_range, rng_seed))
}

pub fn generate_with_config(config: &GeneratorConfig) -> Result<MapResult, MapGenError> {
    MapGenerator::new(config)?.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Rotation, TileKind};

    #[test]
    fn test_size_one_map() {
        let map = generate(1, 50, Some(5)).unwrap();
        assert_eq!(map.open_cells().len(), 1);
        let tile = map.open_cells()[0];
        assert_eq!(tile.cell, Cell::new(0, 0));
        assert_eq!(tile.degree(), 0);
        assert_eq!(tile.rotation.degrees(), 0);
        assert!(map.wall_cells().is_empty());
    }

    #[test]
    fn test_two_by_two_uniform_weights() {
        let map = generate(2, 1, Some(0)).unwrap();

        let summary: Vec<(usize, usize, u8, i32)> = map
            .open_cells()
            .iter()
            .map(|t| (t.x(), t.y(), t.degree(), t.rotation.degrees()))
            .collect();
        assert_eq!(summary, vec![(0, 0, 2, 0), (1, 0, 1, 270), (0, 1, 1, 180)]);

        let walls: Vec<Cell> = map.wall_cells().iter().copied().collect();
        assert_eq!(walls, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn test_uniform_weights_ignore_seed() {
        let first = generate(2, 1, Some(1)).unwrap();
        let second = generate(2, 1, Some(999)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_configs() {
        for (size, range) in [(0, 50), (-1, 50), (10, 0), (10, -5), (0, 0)] {
            let err = generate(size, range, Some(1)).unwrap_err();
            assert!(
                matches!(err, MapGenError::InvalidConfig { .. }),
                "({}, {}) gave {:?}",
                size,
                range,
                err
            );
        }
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for size in [i32::MAX, 100_000, 4097] {
            let err = generate(size, 50, Some(1)).unwrap_err();
            assert!(
                matches!(err, MapGenError::InvalidConfig { .. }),
                "size {} gave {:?}",
                size,
                err
            );
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let a = generate(12, 50, Some(2024)).unwrap();
        let b = generate(12, 50, Some(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partitions_grid() {
        for seed in 0..10 {
            let map = generate(9, 50, Some(seed)).unwrap();
            let mut all: BTreeSet<Cell> = map.open_cells().iter().map(|t| t.cell).collect();
            assert_eq!(all.len(), map.open_cells().len(), "duplicate open cell");
            for wall in map.wall_cells() {
                assert!(all.insert(*wall), "cell {:?} is both open and wall", wall);
            }
            assert_eq!(all.len(), 81);
        }
    }

    #[test]
    fn test_tiles_match_open_neighbors() {
        for seed in 0..10 {
            let map = generate(10, 50, Some(seed)).unwrap();
            assert!(map.is_connected());
            for tile in map.open_cells() {
                let open_sides = Direction::ALL
                    .into_iter()
                    .filter(|&dir| {
                        tile.cell
                            .neighbor(dir, map.size())
                            .map_or(false, |n| map.tile_at(n).is_some())
                    })
                    .count() as u8;
                assert_eq!(tile.kind.neighbor_count(), open_sides);
                for dir in tile.connectors().iter() {
                    let neighbor = tile.cell.neighbor(dir, map.size()).unwrap();
                    assert!(map.tile_at(neighbor).is_some());
                }
            }
        }
    }

    #[test]
    fn test_seed_cell_comes_first() {
        let map = generate(6, 50, Some(77)).unwrap();
        assert_eq!(map.open_cells()[0].cell, WeightGrid::SEED);
        assert!(map.open_cells()[0].kind != TileKind::Isolated);
    }

    #[test]
    fn test_disconnected_result_detected() {
        let tile = |x, y| ClassifiedTile {
            cell: Cell::new(x, y),
            kind: TileKind::DeadEnd,
            rotation: Rotation::Deg0,
        };
        let map = MapResult {
            size: 3,
            open_cells: vec![tile(0, 0), tile(0, 1), tile(2, 2)],
            wall_cells: BTreeSet::new(),
        };
        assert!(!map.is_connected());
    }

    #[test]
    fn test_unseeded_generation_succeeds() {
        let map = generate(5, 50, None).unwrap();
        assert!(map.open_cells().len() >= 2);
        assert!(map.is_connected());
    }
}
