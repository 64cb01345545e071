#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use anyhow::Context as _;
use eframe::egui;
use image::{Rgba, RgbaImage};
use image_clipper::config::CONFIG_ENV_VAR;
use image_clipper::{
    ClipperConfig, Color, DrawingSurface, ImageClipper, MoveMode, Point, Rect, Segment, TouchMode,
};
use tracing_subscriber::EnvFilter;

const PADDING: f32 = 20.0;
const BACKDROP_SIZE: u32 = 256;
const BACKDROP_CELL: u32 = 32;

/// Paints clipper strokes through an egui painter, offset to the surface origin.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterSurface<'_> {
    fn pos(&self, x: f32, y: f32) -> egui::Pos2 {
        self.origin + egui::vec2(x, y)
    }
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl DrawingSurface for PainterSurface<'_> {
    fn stroke_rect(&mut self, rect: &Rect, width: f32, color: Color) {
        let rect = egui::Rect::from_min_max(
            self.pos(rect.left, rect.top),
            self.pos(rect.right, rect.bottom),
        );
        self.painter
            .rect_stroke(rect, 0.0, egui::Stroke::new(width, color32(color)));
    }

    fn stroke_lines(&mut self, segments: &[Segment], width: f32, color: Color) {
        let stroke = egui::Stroke::new(width, color32(color));
        for segment in segments {
            self.painter.line_segment(
                [
                    self.pos(segment.from.x, segment.from.y),
                    self.pos(segment.to.x, segment.to.y),
                ],
                stroke,
            );
        }
    }
}

/// Checkerboard shown under the translucent overlay.
fn backdrop_image() -> egui::ColorImage {
    let image = RgbaImage::from_fn(BACKDROP_SIZE, BACKDROP_SIZE, |x, y| {
        let dark = (x / BACKDROP_CELL + y / BACKDROP_CELL) % 2 == 0;
        let shade = if dark { 60 } else { 90 };
        let tint = (y * 80 / BACKDROP_SIZE) as u8;
        Rgba([shade, shade + tint / 2, shade + tint, 255])
    });
    let size = [image.width() as _, image.height() as _];
    let pixels = image.as_flat_samples();
    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice())
}

struct ClipperApp {
    clipper: ImageClipper,
    backdrop: egui::TextureHandle,
    surface_size: Option<egui::Vec2>,
}

impl ClipperApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &ClipperConfig) -> Self {
        let backdrop =
            cc.egui_ctx
                .load_texture("backdrop", backdrop_image(), egui::TextureOptions::NEAREST);
        Self {
            clipper: ImageClipper::new(config.to_style())
                .with_touch_mode(config.touch_mode)
                .with_move_mode(config.move_mode),
            backdrop,
            surface_size: None,
        }
    }

    fn sync_size(&mut self, size: egui::Vec2) {
        if self.surface_size == Some(size) {
            return;
        }
        self.surface_size = Some(size);
        if let Err(e) = self.clipper.set_size(size.x, size.y) {
            tracing::warn!("Skipping layout: {}", e);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut touch_mode = self.clipper.touch_mode();
            ui.label("Touch:");
            egui::ComboBox::from_id_salt("touch_mode")
                .selected_text(match touch_mode {
                    TouchMode::FullArea => "Full area",
                    TouchMode::HandleOnly => "Handles only",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut touch_mode, TouchMode::FullArea, "Full area");
                    ui.selectable_value(&mut touch_mode, TouchMode::HandleOnly, "Handles only");
                });
            self.clipper.set_touch_mode(touch_mode);

            let mut move_mode = self.clipper.move_mode();
            ui.label("Move:");
            egui::ComboBox::from_id_salt("move_mode")
                .selected_text(match move_mode {
                    MoveMode::EdgeWise => "Edge-wise",
                    MoveMode::Translate => "Translate",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut move_mode, MoveMode::EdgeWise, "Edge-wise");
                    ui.selectable_value(&mut move_mode, MoveMode::Translate, "Translate");
                });
            self.clipper.set_move_mode(move_mode);

            if ui.button("Reset").clicked() {
                self.surface_size = None;
            }

            let frame = self.clipper.frame();
            ui.label(format!(
                "Frame: ({:.1}, {:.1}, {:.1}, {:.1})  Action: {:?}",
                frame.left,
                frame.top,
                frame.right,
                frame.bottom,
                self.clipper.action_mask()
            ));
        });
        ui.separator();
    }
}

impl eframe::App for ClipperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);

            let available = ui.available_rect_before_wrap();
            let target_rect = available.shrink(PADDING);
            let response = ui.allocate_rect(available, egui::Sense::drag());
            let painter = ui.painter_at(available);
            self.sync_size(target_rect.size());

            painter.image(
                self.backdrop.id(),
                target_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            // Handle input
            let origin = target_rect.min;
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    self.clipper.on_pointer_down(Point::new(local.x, local.y));
                }
            }

            if response.dragged() {
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.clipper.on_pointer_cancel();
                }
                // egui reports current minus previous; the clipper expects the reverse
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    self.clipper.on_pointer_move(-delta.x, -delta.y);
                }
            }

            if response.drag_stopped() {
                self.clipper.on_pointer_up();
            } else if !response.dragged() && self.clipper.is_pressed() {
                // drag lost without a release, e.g. the window lost focus
                self.clipper.on_pointer_cancel();
            }

            let mut surface = PainterSurface {
                painter: &painter,
                origin,
            };
            self.clipper.draw(&mut surface);
        });
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config_path() {
        Some(path) => ClipperConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClipperConfig::default(),
    };
    tracing::info!(touch_mode = ?config.touch_mode, move_mode = ?config.move_mode, "Starting clipper");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Image Clipper",
        options,
        Box::new(move |cc| Ok(Box::new(ClipperApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run clipper: {e}"))
}
