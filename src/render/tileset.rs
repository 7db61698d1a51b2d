// src/render/tileset.rs

use crate::error::RenderError;
use crate::map::TileKind;
use crate::utils::BoundingBox;
use log::warn;

/// Number of visuals a tile set needs: dead end, corner, T-junction, cross
/// and straight, in that order.
pub const REQUIRED_VISUALS: usize = 5;

/// One tile visual, described by the ground-plane bounds of its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct TileVisual {
    pub name: String,
    pub parts: Vec<BoundingBox>,
}

impl TileVisual {
    pub fn new(name: impl Into<String>, parts: Vec<BoundingBox>) -> Self {
        TileVisual {
            name: name.into(),
            parts,
        }
    }

    /// Union of the bounds of every part.
    pub fn footprint(&self) -> BoundingBox {
        BoundingBox::union_of(&self.parts)
    }
}

/// The visuals a renderer draws, indexed by [`TileKind::visual_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    visuals: Vec<TileVisual>,
    scale: f64,
}

impl TileSet {
    /// Checks that enough visuals are present and derives the tile scale
    /// from the width of the first visual's footprint.
    pub fn new(visuals: Vec<TileVisual>) -> Result<Self, RenderError> {
        if visuals.len() < REQUIRED_VISUALS {
            warn!(
                "Tile set has {} visuals, expected {}",
                visuals.len(),
                REQUIRED_VISUALS
            );
            return Err(RenderError::MissingTiles {
                required: REQUIRED_VISUALS,
                found: visuals.len(),
            });
        }

        let first = &visuals[0];
        let scale = first.footprint().width();
        if scale <= 0.0 || !scale.is_finite() {
            return Err(RenderError::EmptyFootprint {
                name: first.name.clone(),
            });
        }

        Ok(TileSet { visuals, scale })
    }

    /// Five unit-sized visuals, one per piece.
    pub fn unit_squares() -> Self {
        let names = ["dead_end", "corner", "t_junction", "cross", "straight"];
        let visuals = names
            .iter()
            .map(|name| {
                TileVisual::new(*name, vec![BoundingBox::from_center_size(0.5, 0.5, 1.0, 1.0)])
            })
            .collect();
        TileSet { visuals, scale: 1.0 }
    }

    /// World-space side length of one tile.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    pub fn visual_for(&self, kind: TileKind) -> &TileVisual {
        &self.visuals[kind.visual_index()]
    }
}
