use super::components::*;
use super::models::PixelArtGui;
use crate::gui::logging::{LogEntry, get_log_buffer, trim_to_capacity};
use eframe::egui;
use egui_extras::install_image_loaders;
use tracing::Level;

fn format_log_entry(entry: &LogEntry) -> egui::RichText {
    let color = match entry.level {
        Level::ERROR => egui::Color32::from_rgb(255, 100, 100),
        Level::WARN => egui::Color32::from_rgb(255, 200, 100),
        Level::INFO => egui::Color32::from_rgb(100, 200, 255),
        Level::DEBUG => egui::Color32::from_rgb(150, 150, 150),
        Level::TRACE => egui::Color32::from_rgb(100, 100, 100),
    };

    egui::RichText::new(format!(
        "[{}] {}: {}",
        entry.timestamp, entry.level, entry.message
    ))
    .color(color)
    .monospace()
}

impl PixelArtGui {
    /// Move freshly captured log entries into the panel's list. Returns true
    /// when something new arrived.
    fn drain_new_logs(&mut self) -> bool {
        let mut new_messages = Vec::new();
        if let Ok(mut buf) = get_log_buffer().lock() {
            new_messages.extend(buf.drain(..));
        }
        if new_messages.is_empty() {
            return false;
        }
        if let Ok(mut logs) = self.log_messages.lock() {
            logs.extend(new_messages);
            trim_to_capacity(&mut logs);
        }
        true
    }

    fn render_logs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Log Output");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Save").clicked() {
                    if let Err(e) = self.save_logs_to_file() {
                        tracing::warn!("Logs not saved: {}", e);
                    }
                }
                ui.selectable_value(&mut self.min_log_level, Level::ERROR, "ERROR");
                ui.selectable_value(&mut self.min_log_level, Level::WARN, "WARN");
                ui.selectable_value(&mut self.min_log_level, Level::INFO, "INFO");
                ui.selectable_value(&mut self.min_log_level, Level::DEBUG, "DEBUG");
                ui.selectable_value(&mut self.min_log_level, Level::TRACE, "ALL");
            });
        });

        egui::ScrollArea::vertical()
            .max_height(160.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if let Ok(logs) = self.log_messages.lock() {
                    if logs.is_empty() {
                        ui.label(
                            egui::RichText::new("No log messages")
                                .color(egui::Color32::from_gray(120)),
                        );
                    }
                    for entry in logs.iter().filter(|entry| {
                        self.min_log_level == Level::TRACE || entry.level == self.min_log_level
                    }) {
                        ui.label(format_log_entry(entry));
                    }
                }
            });
    }
}

impl eframe::App for PixelArtGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initialize logging and image loaders on first update
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            crate::gui::models::init_gui_logging();
            install_image_loaders(ctx);
        });

        let mut style = (*ctx.style()).clone();
        style.visuals.override_text_color = Some(egui::Color32::from_gray(220));
        style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 30);
        style.visuals.window_fill = egui::Color32::from_rgb(25, 25, 25);
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(20, 20, 20);
        ctx.set_style(style);

        if self.drain_new_logs() {
            ctx.request_repaint();
        }

        for uri in self.take_stale_uris() {
            ctx.forget_image(&uri);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Image Pixel Art Generator")
                        .size(32.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(10.0)
                        .color(egui::Color32::from_gray(150)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_enabled_ui(self.input_bytes.is_some(), |ui| {
                        if ui
                            .button(egui::RichText::new("Process").size(16.0))
                            .clicked()
                        {
                            self.process_image();
                        }
                    });
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            FooterComponent::render(ui, self);
            if self.show_logs {
                ui.separator();
                self.render_logs(ui);
            }
        });

        egui::SidePanel::left("left_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                FileSelectionComponent::render(ui, self);
                ui.separator();

                if PixelOptionsComponent::render(ui, self) && self.auto_process {
                    self.process_image();
                }
                ui.separator();

                PresetComponent::render(ui, self);
                ui.add_space(20.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    PreviewComponent::render(ui, self);
                });
        });
    }
}
