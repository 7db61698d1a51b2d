// src/generator/classifier.rs

use crate::error::MapGenError;
use crate::map::{Cell, Direction, NeighborMask, Rotation, TileKind, WeightGrid};
use log::{error, info};

/// Picks the piece and rotation for a cell from the sides that have open
/// neighbours.
///
/// The rules are applied in a fixed priority order per neighbour count. An
/// empty pattern yields [`TileKind::Isolated`]; whether that is acceptable is
/// up to the caller.
pub fn classify_pattern(open: NeighborMask) -> (TileKind, Rotation) {
    use Direction::*;

    let up = open.contains(Up);
    let right = open.contains(Right);
    let down = open.contains(Down);
    let left = open.contains(Left);

    match open.count() {
        0 => (TileKind::Isolated, Rotation::Deg0),
        1 => {
            let rotation = if up {
                Rotation::Deg0
            } else if right {
                Rotation::Deg90
            } else if down {
                Rotation::Deg180
            } else {
                Rotation::Deg270
            };
            (TileKind::DeadEnd, rotation)
        }
        2 => {
            if up {
                if down {
                    (TileKind::Straight, Rotation::Deg0)
                } else if left {
                    (TileKind::Corner, Rotation::Neg90)
                } else {
                    (TileKind::Corner, Rotation::Deg0)
                }
            } else if right {
                if left {
                    (TileKind::Straight, Rotation::Deg90)
                } else {
                    (TileKind::Corner, Rotation::Deg90)
                }
            } else if down {
                (TileKind::Corner, Rotation::Deg180)
            } else {
                (TileKind::Corner, Rotation::Deg270)
            }
        }
        3 => {
            // Oriented by the one closed side.
            let rotation = if !up {
                Rotation::Deg90
            } else if !right {
                Rotation::Deg180
            } else if !down {
                Rotation::Deg270
            } else {
                Rotation::Deg0
            };
            (TileKind::TJunction, rotation)
        }
        _ => (TileKind::Cross, Rotation::Deg0),
    }
}

/// Assigns a [`TileKind`] and [`Rotation`] to every open cell of a grown grid.
pub struct NeighborClassifier<'a> {
    grid: &'a mut WeightGrid,
}

impl<'a> NeighborClassifier<'a> {
    pub fn new(grid: &'a mut WeightGrid) -> Self {
        NeighborClassifier { grid }
    }

    /// Classifies every open cell, scanning columns left to right.
    ///
    /// An open cell without open neighbours is an error unless it is the
    /// only open cell on the map.
    pub fn classify_all(self) -> Result<(), MapGenError> {
        let size = self.grid.size();
        let open_count = self.grid.open_cells().len();

        for x in 0..size {
            for y in 0..size {
                let cell = Cell::new(x, y);
                if !self.grid.is_open(cell) {
                    continue;
                }

                let pattern = self.grid.open_neighbors(cell);
                if pattern.is_empty() && open_count > 1 {
                    error!(
                        "Open cell ({}, {}) is isolated among {} open cells",
                        x, y, open_count
                    );
                    return Err(MapGenError::ClassificationError {
                        x,
                        y,
                        open_cells: open_count,
                    });
                }

                let (kind, rotation) = classify_pattern(pattern);
                self.grid.set_classification(cell, kind, rotation);
            }
        }

        info!("Classified {} open cells", open_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn pattern(dirs: &[Direction]) -> NeighborMask {
        NeighborMask::from_directions(dirs)
    }

    #[test]
    fn test_all_sixteen_patterns() {
        use Rotation::*;
        use TileKind::*;

        let expected: [(&[Direction], TileKind, Rotation); 16] = [
            (&[], Isolated, Deg0),
            (&[Up], DeadEnd, Deg0),
            (&[Right], DeadEnd, Deg90),
            (&[Down], DeadEnd, Deg180),
            (&[Left], DeadEnd, Deg270),
            (&[Up, Down], Straight, Deg0),
            (&[Up, Left], Corner, Neg90),
            (&[Up, Right], Corner, Deg0),
            (&[Right, Left], Straight, Deg90),
            (&[Right, Down], Corner, Deg90),
            (&[Down, Left], Corner, Deg180),
            (&[Right, Down, Left], TJunction, Deg90),
            (&[Up, Down, Left], TJunction, Deg180),
            (&[Up, Right, Left], TJunction, Deg270),
            (&[Up, Right, Down], TJunction, Deg0),
            (&[Up, Right, Down, Left], Cross, Deg0),
        ];

        let mut seen = std::collections::HashSet::new();
        for (dirs, kind, rotation) in expected {
            let mask = pattern(dirs);
            assert!(seen.insert(mask.bits()), "duplicate pattern {:?}", mask);
            assert_eq!(classify_pattern(mask), (kind, rotation), "pattern {:?}", mask);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_rotated_connectors_match_pattern() {
        for bits in 1..16u8 {
            let mask = NeighborMask::from_bits(bits);
            let (kind, rotation) = classify_pattern(mask);
            let connectors = kind.base_connectors().rotated_cw(rotation.quarter_turns_cw());
            assert_eq!(connectors, mask, "{:?} {:?}", kind, rotation);
            assert_eq!(kind.neighbor_count(), mask.count());
        }
    }

    #[test]
    fn test_straight_pieces_report_code_five() {
        let (kind, _) = classify_pattern(pattern(&[Up, Down]));
        assert_eq!(kind.code(), 5);
        let (kind, _) = classify_pattern(pattern(&[Left, Right]));
        assert_eq!(kind.code(), 5);
        let (kind, _) = classify_pattern(pattern(&[Up, Left]));
        assert_eq!(kind.code(), 2);
    }

    #[test]
    fn test_seed_only_map_is_isolated() {
        let mut grid = WeightGrid::from_weights(1, vec![0]);
        NeighborClassifier::new(&mut grid).classify_all().unwrap();
        let tile = grid.classification(Cell::new(0, 0)).unwrap();
        assert_eq!(tile.kind, TileKind::Isolated);
        assert_eq!(tile.rotation, Rotation::Deg0);
    }

    #[test]
    fn test_isolated_cell_on_larger_map_is_an_error() {
        let mut grid = WeightGrid::from_weights(3, vec![0; 9]);
        grid.open(Cell::new(1, 0));
        grid.open(Cell::new(2, 2));
        let err = NeighborClassifier::new(&mut grid).classify_all().unwrap_err();
        assert_eq!(
            err,
            MapGenError::ClassificationError { x: 2, y: 2, open_cells: 3 }
        );
    }

    #[test]
    fn test_classifies_a_straight_run() {
        let mut grid = WeightGrid::from_weights(3, vec![0; 9]);
        grid.open(Cell::new(1, 0));
        grid.open(Cell::new(2, 0));
        NeighborClassifier::new(&mut grid).classify_all().unwrap();

        let middle = grid.classification(Cell::new(1, 0)).unwrap();
        assert_eq!((middle.kind, middle.rotation), (TileKind::Straight, Rotation::Deg90));
        let end = grid.classification(Cell::new(2, 0)).unwrap();
        assert_eq!((end.kind, end.rotation), (TileKind::DeadEnd, Rotation::Deg270));
        assert_eq!(grid.classification(Cell::new(1, 1)), None);
    }
}
