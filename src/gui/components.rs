use super::models::{PixelArtGui, Preview};
use crate::{MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, PixelShape};
use eframe::egui::{self, Align, Color32, Frame, Layout, RichText, Ui};

const COMPONENT_HEIGHT: f32 = 80.0;
const COMPONENT_WIDTH: f32 = 120.0;

pub struct FileSelectionComponent;

impl FileSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut PixelArtGui) {
        ui.heading("Image");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("PNG or JPEG:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_input_file();
                    }
                });
            });

            if let Some(path) = &app.input_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }
        });
    }
}

pub struct PixelOptionsComponent;

impl PixelOptionsComponent {
    /// Returns true when a parameter changed this frame.
    pub fn render(ui: &mut Ui, app: &mut PixelArtGui) -> bool {
        ui.heading("Pixel Options");
        let mut changed = false;

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.label("Pixel Size");
            changed |= ui
                .add(egui::Slider::new(
                    &mut app.pixel_size,
                    MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE,
                ))
                .on_hover_text("Adjust to control the level of pixelation.")
                .changed();

            ui.add_space(10.0);

            ui.label("Pixel Shape")
                .on_hover_text("Choose the shape of the pixels.");
            ui.horizontal(|ui| {
                for shape in PixelShape::ALL {
                    changed |= ui
                        .radio_value(&mut app.shape, shape, shape.as_str())
                        .changed();
                }
            });

            ui.add_space(10.0);
            ui.checkbox(&mut app.auto_process, "Update on change");
        });

        changed
    }
}

pub struct PresetComponent;

impl PresetComponent {
    pub fn render(ui: &mut Ui, app: &mut PixelArtGui) {
        ui.heading("Presets");

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                if let Err(e) = app.save_preset() {
                    tracing::warn!("Preset not saved: {}", e);
                }
            }
            if ui.button("Load").clicked() {
                match app.load_preset() {
                    Ok(()) => app.process_image(),
                    Err(e) => tracing::warn!("Preset not loaded: {}", e),
                }
            }
        });
    }
}

pub struct PreviewComponent;

impl PreviewComponent {
    fn show_image(ui: &mut Ui, caption: &str, preview: &Preview, max_width: f32) {
        ui.vertical(|ui| {
            ui.add(
                egui::Image::from_bytes(preview.uri.clone(), preview.bytes.clone())
                    .max_width(max_width)
                    .shrink_to_fit(),
            );
            ui.label(
                RichText::new(format!("{} ({}x{})", caption, preview.width, preview.height))
                    .color(Color32::from_gray(180)),
            );
        });
    }

    pub fn render(ui: &mut Ui, app: &mut PixelArtGui) {
        if let Some(message) = &app.error_message {
            ui.label(RichText::new(message).color(Color32::from_rgb(255, 100, 100)));
        }
        if let Some(message) = &app.info_message {
            ui.label(RichText::new(message).color(Color32::from_rgb(100, 200, 255)));
        }
        if let Some(message) = &app.success_message {
            ui.label(RichText::new(message).color(Color32::from_rgb(100, 255, 100)));
        }

        if app.original_preview.is_none() && app.result_preview.is_none() {
            if app.error_message.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Upload an image (optimized for smartphone wallpaper)")
                            .color(Color32::from_gray(120)),
                    );
                });
            }
            return;
        }

        let half_width = (ui.available_width() / 2.0 - 10.0).max(50.0);
        ui.horizontal_top(|ui| {
            if let Some(preview) = &app.original_preview {
                Self::show_image(ui, "Original Image", preview, half_width);
            }
            if let Some(preview) = &app.result_preview {
                Self::show_image(ui, "Pixelated Image", preview, half_width);
            }
        });

        if app.result.is_some() {
            ui.add_space(10.0);
            if ui
                .button(RichText::new("Download Pixel Art").size(16.0))
                .clicked()
            {
                app.download_pixel_art();
            }
        }
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut PixelArtGui) {
        ui.horizontal(|ui| {
            let cmd = app.generate_cli_command();
            if ui
                .small_button("Copy CLI")
                .on_hover_text(cmd.as_str())
                .clicked()
            {
                ui.ctx().copy_text(cmd);
                tracing::info!("CLI command copied to clipboard");
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(duration) = app.last_processing_duration {
                    ui.label(
                        RichText::new(format!("Last run: {:.2?}", duration))
                            .color(Color32::from_gray(150)),
                    );
                }
                ui.checkbox(&mut app.show_logs, "Show logs");
            });
        });
    }
}
