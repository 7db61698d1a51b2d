// src/render/ascii.rs

use crate::map::{Cell, Direction, NeighborMask};
use crate::render::{Renderer, TilePlacement};
use std::collections::BTreeSet;
use std::fmt;

pub const WALL_GLYPH: char = '#';
pub const UNSPAWNED_GLYPH: char = ' ';

/// Box-drawing glyph for a set of connected sides.
pub fn glyph_for(connectors: NeighborMask) -> char {
    use Direction::*;
    let has = |dir| connectors.contains(dir);
    match (has(Up), has(Right), has(Down), has(Left)) {
        (false, false, false, false) => '■',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╶',
        (false, false, true, false) => '╷',
        (false, false, false, true) => '╴',
        (true, false, true, false) => '│',
        (false, true, false, true) => '─',
        (true, true, false, false) => '└',
        (false, true, true, false) => '┌',
        (false, false, true, true) => '┐',
        (true, false, false, true) => '┘',
        (true, true, true, false) => '├',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┤',
        (true, true, false, true) => '┴',
        (true, true, true, true) => '┼',
    }
}

/// Draws a map as text, one character per cell, highest row first.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    size: usize,
    glyphs: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(size: usize) -> Self {
        AsciiRenderer {
            size,
            glyphs: vec![UNSPAWNED_GLYPH; size * size],
        }
    }

    fn set(&mut self, cell: Cell, glyph: char) {
        if cell.x < self.size && cell.y < self.size {
            self.glyphs[cell.y * self.size + cell.x] = glyph;
        }
    }

    pub fn glyph_at(&self, cell: Cell) -> Option<char> {
        if cell.x < self.size && cell.y < self.size {
            Some(self.glyphs[cell.y * self.size + cell.x])
        } else {
            None
        }
    }
}

impl Renderer for AsciiRenderer {
    fn walls(&mut self, walls: &BTreeSet<Cell>) {
        for &cell in walls {
            self.set(cell, WALL_GLYPH);
        }
    }

    fn spawn(&mut self, placement: &TilePlacement) {
        self.set(placement.cell, glyph_for(placement.connectors));
    }
}

impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            let row: String = self.glyphs[y * self.size..(y + 1) * self.size]
                .iter()
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::render::{render_map, TileSet};

    #[test]
    fn test_two_by_two_drawing() {
        let map = generate(2, 1, Some(0)).unwrap();
        let mut ascii = AsciiRenderer::new(map.size());
        render_map(&map, &TileSet::unit_squares(), &mut ascii);
        assert_eq!(ascii.to_string(), "╷#\n└╴\n");
    }

    #[test]
    fn test_single_cell_drawing() {
        let map = generate(1, 10, Some(0)).unwrap();
        let mut ascii = AsciiRenderer::new(1);
        render_map(&map, &TileSet::unit_squares(), &mut ascii);
        assert_eq!(ascii.to_string(), "■\n");
    }

    #[test]
    fn test_every_cell_drawn() {
        let map = generate(10, 50, Some(31)).unwrap();
        let mut ascii = AsciiRenderer::new(10);
        render_map(&map, &TileSet::unit_squares(), &mut ascii);
        for x in 0..10 {
            for y in 0..10 {
                assert_ne!(ascii.glyph_at(Cell::new(x, y)), Some(UNSPAWNED_GLYPH));
            }
        }
        assert_eq!(ascii.glyph_at(Cell::new(10, 0)), None);
    }
}
