use std::collections::HashMap;
use std::time::Instant;

use crate::config::AppConfig;
use crate::gallery::{self, Gallery};
use crate::transform::TransformController;

// Palette carried over from the original gallery design.
const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(0xfe, 0xf8, 0xca);
const BACKDROP_FILL: egui::Color32 = egui::Color32::from_rgb(0xf2, 0xd0, 0xc4);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xe9, 0xe0, 0xc4);
const INK: egui::Color32 = egui::Color32::from_rgb(0x20, 0x1c, 0x18);

const CARD_MAX_WIDTH: f32 = 560.0;
/// Zoom factor granted to one unit of scroll wheel travel.
const SCROLL_ZOOM_RATE: f32 = 0.001;

pub struct PortraitsApp {
    gallery: Gallery,
    transform: TransformController,
    /// Decoded artwork textures by cursor value; `None` records a decode
    /// failure so it is logged once instead of retried every frame.
    textures: HashMap<u8, Option<egui::TextureHandle>>,
    config: AppConfig,
}

impl PortraitsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, gallery: Gallery) -> Self {
        Self {
            gallery,
            transform: TransformController::new(),
            textures: HashMap::new(),
            config,
        }
    }

    fn texture_for_current(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let cursor = self.gallery.cursor();
        if let Some(cached) = self.textures.get(&cursor) {
            return cached.clone();
        }
        let artwork = self.gallery.current();
        let tex = match crate::assets::decode_color_image(artwork.image) {
            Ok(img) => Some(ctx.load_texture(artwork.title, img, egui::TextureOptions::LINEAR)),
            Err(err) => {
                tracing::warn!(title = artwork.title, error = %err, "embedded artwork failed to decode");
                None
            }
        };
        self.textures.insert(cursor, tex.clone());
        tex
    }

    /// Maps the frame's raw input onto the transform controller: multi-touch
    /// pinch/rotate/pan where available, mouse drag and scroll wheel as the
    /// desktop equivalents, double-click as the double-tap shortcut.
    fn handle_gestures(&mut self, response: &egui::Response, ui: &egui::Ui) {
        if let Some(touch) = ui.input(|i| i.multi_touch()) {
            self.transform.apply_gesture(
                touch.zoom_delta,
                touch.translation_delta,
                touch.rotation_delta.to_degrees(),
            );
        } else if response.dragged() {
            self.transform.apply_gesture(1.0, response.drag_delta(), 0.0);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.transform
                    .apply_gesture(1.0 + scroll * SCROLL_ZOOM_RATE, egui::Vec2::ZERO, 0.0);
            }
        }

        if response.double_clicked() {
            self.transform.double_tap(Instant::now());
            ui.ctx().request_repaint();
        }
    }

    fn show_artwork_card(&mut self, ui: &mut egui::Ui) {
        let avail_w = ui.available_width().min(CARD_MAX_WIDTH);
        let card_h = (ui.ctx().screen_rect().height() * 0.55).max(180.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(avail_w, card_h), egui::Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 12.0, egui::Color32::WHITE);

        self.handle_gestures(&response, ui);

        match self.texture_for_current(ui.ctx()) {
            Some(tex) => {
                let t = self.transform.current();
                let base = fit_size(tex.size_vec2(), rect.width() - 16.0, rect.height() - 16.0);
                let image_rect =
                    egui::Rect::from_center_size(rect.center() + t.translation, base * t.scale);
                let mut mesh = egui::Mesh::with_texture(tex.id());
                mesh.add_rect_with_uv(
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                mesh.rotate(
                    egui::emath::Rot2::from_angle(t.rotation_deg.to_radians()),
                    image_rect.center(),
                );
                painter.add(mesh);
            }
            None => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "⚠ Could not decode artwork",
                    egui::FontId::proportional(14.0),
                    egui::Color32::DARK_RED,
                );
            }
        }
    }
}

/// Largest size with the texture's aspect ratio that fits the card.
fn fit_size(tex_size: egui::Vec2, max_w: f32, max_h: f32) -> egui::Vec2 {
    let scale = (max_w / tex_size.x).min(max_h / tex_size.y);
    tex_size * scale
}

impl eframe::App for PortraitsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        // Drive the double-tap zoom animation before drawing the frame.
        if self.transform.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(HEADER_FILL).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("🖌 Art Portraits")
                            .size(26.0)
                            .strong()
                            .color(INK),
                    );
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKDROP_FILL))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(12.0);
                            let title = self.gallery.current().title;
                            ui.label(
                                egui::RichText::new(title).size(24.0).strong().color(INK),
                            );
                            ui.add_space(8.0);

                            self.show_artwork_card(ui);
                            ui.add_space(8.0);

                            // Artist line plus the caption text for this artwork.
                            let detail = self.gallery.current().detail;
                            egui::Frame::new()
                                .fill(egui::Color32::WHITE)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.set_max_width(CARD_MAX_WIDTH);
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            egui::RichText::new("Artist:").italics().color(INK),
                                        );
                                        ui.label(egui::RichText::new(gallery::ARTIST).color(INK));
                                    });
                                    ui.label(egui::RichText::new(detail).color(INK));
                                });

                            ui.add_space(16.0);
                            ui.horizontal(|ui| {
                                let prev =
                                    egui::Button::new(egui::RichText::new("Previous").color(INK))
                                        .fill(BUTTON_FILL);
                                if ui.add(prev).clicked() {
                                    let cursor = self.gallery.retreat();
                                    tracing::debug!(cursor, "retreat");
                                }
                                ui.add_space(16.0);
                                let next =
                                    egui::Button::new(egui::RichText::new("Next").color(INK))
                                        .fill(BUTTON_FILL);
                                if ui.add(next).clicked() {
                                    let cursor = self.gallery.advance();
                                    tracing::debug!(cursor, "advance");
                                }
                            });
                            ui.add_space(12.0);
                        });
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}

#[cfg(test)]
mod tests {
    use super::fit_size;

    #[test]
    fn fit_size_letterboxes_portrait_textures() {
        let fitted = fit_size(egui::vec2(360.0, 480.0), 544.0, 240.0);
        assert_eq!(fitted, egui::vec2(180.0, 240.0));
    }

    #[test]
    fn fit_size_preserves_aspect_for_wide_textures() {
        let fitted = fit_size(egui::vec2(100.0, 50.0), 400.0, 400.0);
        assert_eq!(fitted, egui::vec2(400.0, 200.0));
    }
}
