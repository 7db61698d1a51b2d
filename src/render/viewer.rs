// src/render/viewer.rs
//! Interactive map viewer built on eframe/egui.
//!
//! Tiles appear one per frame in discovery order. Scroll to zoom, drag to pan.

use crate::generator::MapResult;
use crate::map::{Cell, Direction};
use crate::render::{Renderer, SpawnSchedule, TilePlacement, TileSet};
use egui::{Color32, Painter, Pos2, Rect, Sense, Stroke, Vec2};
use log::info;
use std::collections::BTreeSet;
use std::error::Error;

const CELL_PIXELS: f32 = 48.0;
const TILE_COLOR: Color32 = Color32::from_rgb(70, 90, 120);
const WALL_COLOR: Color32 = Color32::from_rgb(35, 35, 35);
const CONNECTOR_COLOR: Color32 = Color32::from_rgb(230, 200, 90);

/// Window state: the map being revealed and the current view transform.
pub struct MapViewer {
    size: usize,
    schedule: SpawnSchedule,
    walls: BTreeSet<Cell>,
    placed: Vec<TilePlacement>,

    /// Current zoom factor (scales world→screen).
    zoom: f32,
    /// Current pan offset (in screen coordinates).
    pan: Vec2,
}

impl MapViewer {
    pub fn new(map: &MapResult, tiles: &TileSet) -> Self {
        let mut viewer = MapViewer {
            size: map.size(),
            schedule: SpawnSchedule::new(map, tiles),
            walls: BTreeSet::new(),
            placed: Vec::with_capacity(map.open_cells().len()),
            zoom: 1.0,
            pan: Vec2::new(16.0, 16.0),
        };
        viewer.walls(map.wall_cells());
        viewer
    }

    /// Screen position of the top-left corner of `cell`. Higher rows are
    /// drawn nearer the top of the window.
    fn cell_origin(&self, cell: Cell, rect: Rect) -> Pos2 {
        let row_from_top = (self.size - 1 - cell.y) as f32;
        rect.min
            + self.pan
            + Vec2::new(cell.x as f32 * CELL_PIXELS, row_from_top * CELL_PIXELS) * self.zoom
    }

    fn cell_rect(&self, cell: Cell, rect: Rect) -> Rect {
        Rect::from_min_size(
            self.cell_origin(cell, rect),
            Vec2::splat(CELL_PIXELS * self.zoom),
        )
    }

    fn handle_zoom(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.hovered() && ui.input().scroll_delta.y.abs() > 0.0 {
            let factor = 1.0 + ui.input().scroll_delta.y * 0.001;
            self.zoom = (self.zoom * factor).clamp(0.1, 10.0);
            ui.ctx().request_repaint();
        }
    }

    fn handle_pan(&mut self, response: &egui::Response) {
        if response.dragged() {
            self.pan += response.drag_delta();
            response.ctx.request_repaint();
        }
    }

    fn draw_tile(&self, painter: &Painter, placement: &TilePlacement, rect: Rect) {
        let cell_rect = self.cell_rect(placement.cell, rect).shrink(1.0);
        painter.rect_filled(cell_rect, 2.0, TILE_COLOR);

        let center = cell_rect.center();
        let half = cell_rect.width() / 2.0;
        let stroke = Stroke::new(4.0 * self.zoom.max(0.5), CONNECTOR_COLOR);
        for dir in placement.connectors.iter() {
            let offset = match dir {
                Direction::Up => Vec2::new(0.0, -half),
                Direction::Right => Vec2::new(half, 0.0),
                Direction::Down => Vec2::new(0.0, half),
                Direction::Left => Vec2::new(-half, 0.0),
            };
            painter.line_segment([center, center + offset], stroke);
        }
        if placement.connectors.is_empty() {
            painter.circle_filled(center, half / 3.0, CONNECTOR_COLOR);
        }
    }

    /// Draws one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        // One tile per frame.
        if let Some(placement) = self.schedule.tick() {
            self.spawn(&placement);
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}x{} map: {} tiles placed, {} to go, {} walls",
                    self.size,
                    self.size,
                    self.placed.len(),
                    self.schedule.remaining(),
                    self.walls.len()
                ));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let response = ui.interact(rect, ui.id(), Sense::drag());
                self.handle_zoom(ui, &response);
                self.handle_pan(&response);

                let painter = ui.painter_at(rect);
                for &cell in &self.walls {
                    painter.rect_filled(self.cell_rect(cell, rect).shrink(1.0), 0.0, WALL_COLOR);
                }
                for placement in &self.placed {
                    self.draw_tile(&painter, placement, rect);
                }
            });
    }
}

impl Renderer for MapViewer {
    fn walls(&mut self, walls: &BTreeSet<Cell>) {
        self.walls = walls.clone();
    }

    fn spawn(&mut self, placement: &TilePlacement) {
        self.placed.push(*placement);
        if self.schedule.is_finished() {
            info!("All {} tiles placed", self.placed.len());
        }
    }
}

impl eframe::App for MapViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_viewer(map: &MapResult, tiles: &TileSet) -> Result<(), Box<dyn Error>> {
    let viewer = MapViewer::new(map, tiles);
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Tile Map Generator",
        native_options,
        Box::new(move |_cc| Box::new(viewer)),
    );
    // run_native returns (), so there is nothing to propagate.
    Ok(())
}
