//! Preview application with eframe/egui integration.

use egui::{ColorImage, TextureHandle, TextureOptions};
use hueshift_core::BgrImage;

/// Preview application: one image, closes on any key press.
pub struct PreviewApp {
    /// Image waiting to be uploaded to the GPU (taken on first frame).
    pending: Option<ColorImage>,
    /// Uploaded display texture.
    texture: Option<TextureHandle>,
}

impl PreviewApp {
    /// Creates the app with the image to display.
    pub fn new(image: ColorImage) -> Self {
        Self {
            pending: Some(image),
            texture: None,
        }
    }

    /// Returns true if any key was pressed this frame.
    fn key_pressed(ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        })
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload the texture lazily on the first frame.
        if self.texture.is_none() {
            if let Some(image) = self.pending.take() {
                self.texture = Some(ctx.load_texture("preview", image, TextureOptions::LINEAR));
            }
        }

        if Self::key_pressed(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                let avail = ui.available_size();
                let size = texture.size_vec2();
                let scale = (avail.x / size.x).min(avail.y / size.y);
                let display = size * scale;
                ui.centered_and_justified(|ui| {
                    ui.image(egui::load::SizedTexture::new(texture.id(), display));
                });
            }
        });
    }
}

/// Converts a BGR image to an egui color image (RGB order).
pub(crate) fn to_color_image(image: &BgrImage) -> ColorImage {
    ColorImage::from_rgb(
        [image.width as usize, image.height as usize],
        &image.to_rgb(),
    )
}
