use crate::core::params::{self, PixelArtParams};
use crate::gui::logging::{GuiLogLayer, LogEntry};
use crate::{DEFAULT_PIXEL_SIZE, PixelArt, PixelShape};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep eframe/winit chatter out of the log panel
        let filter = EnvFilter::new("trace")
            .add_directive("eframe=info".parse().expect("static directive"))
            .add_directive("winit=info".parse().expect("static directive"));

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Encoded image bytes shown in a preview, keyed by a URI unique to its content.
#[derive(Clone)]
pub struct Preview {
    pub uri: String,
    pub bytes: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
}

pub struct PixelArtGui {
    // Input
    pub input_path: Option<PathBuf>,
    pub input_bytes: Option<Arc<[u8]>>,

    // Pixelation parameters
    pub pixel_size: u32,
    pub shape: PixelShape,
    /// Re-run the pipeline whenever a parameter changes
    pub auto_process: bool,

    // Results
    pub original_preview: Option<Preview>,
    pub result_preview: Option<Preview>,
    pub result: Option<PixelArt>,
    pub generation: u64,
    /// Preview URIs replaced since the last frame; their cached images are released in `update`
    pub stale_uris: Vec<String>,

    // Status
    pub info_message: Option<String>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    pub last_processing_duration: Option<Duration>,

    // Log panel
    pub min_log_level: Level,
    pub show_logs: bool,
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,
}

impl Default for PixelArtGui {
    fn default() -> Self {
        Self {
            input_path: None,
            input_bytes: None,
            pixel_size: DEFAULT_PIXEL_SIZE,
            shape: PixelShape::Square,
            auto_process: true,
            original_preview: None,
            result_preview: None,
            result: None,
            generation: 0,
            stale_uris: Vec::new(),
            info_message: None,
            success_message: None,
            error_message: None,
            last_processing_duration: None,
            min_log_level: Level::INFO,
            show_logs: false,
            log_messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl PixelArtGui {
    pub fn params(&self) -> PixelArtParams {
        PixelArtParams::new(self.pixel_size, self.shape)
    }

    pub fn apply_params(&mut self, params: PixelArtParams) {
        self.pixel_size = params.pixel_size;
        self.shape = params.shape;
    }

    pub fn clear_status(&mut self) {
        self.info_message = None;
        self.success_message = None;
        self.error_message = None;
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let logs = self
            .log_messages
            .lock()
            .map_err(|e| format!("Failed to lock logs: {}", e))?;

        let filtered_logs: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| self.min_log_level == Level::TRACE || entry.level == self.min_log_level)
            .collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("Log files", &["log", "txt"])
            .set_file_name("pixelart.log")
            .save_file()
        {
            let mut log_content = String::new();
            log_content.push_str("=== PIXELART Log File ===\n");
            log_content.push_str(&format!("Generated: {}\n", chrono::Utc::now().to_rfc3339()));
            log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
            log_content.push_str("=========================\n\n");

            for entry in &filtered_logs {
                log_content.push_str(&format!(
                    "[{}] {} {}: {}\n",
                    entry.timestamp, entry.level, entry.target, entry.message
                ));
            }

            fs::write(&save_path, log_content)?;

            tracing::info!(
                "Filtered logs saved to: {:?} ({} entries)",
                save_path,
                filtered_logs.len()
            );
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn save_preset(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("PIXELART Preset files", &["pixelart"])
            .set_file_name("pixelart_preset.pixelart")
            .save_file()
        {
            params::save_preset(&save_path, &self.params())?;
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn load_preset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(load_path) = rfd::FileDialog::new()
            .add_filter("PIXELART Preset files", &["pixelart"])
            .pick_file()
        {
            let preset = params::load_preset(&load_path)?;
            self.apply_params(preset);
            Ok(())
        } else {
            Err("No preset file selected".into())
        }
    }

    pub fn generate_cli_command(&self) -> String {
        let mut cmd = String::from("cargo run --release --bin pixelart --");
        if let Some(input_path) = &self.input_path {
            cmd.push_str(&format!(" --input {:?}", input_path));
        }
        cmd.push_str(&format!(" --pixel-size {}", self.pixel_size));
        cmd.push_str(&format!(" --shape {}", self.shape.as_str()));
        cmd.push_str(" --log");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli() {
        let gui = PixelArtGui::default();
        assert_eq!(gui.params(), PixelArtParams::default());
        assert!(gui.result.is_none());
    }

    #[test]
    fn cli_command_reflects_state() {
        let mut gui = PixelArtGui::default();
        gui.input_path = Some(PathBuf::from("photo.jpg"));
        gui.apply_params(PixelArtParams::new(35, PixelShape::Circle));
        let cmd = gui.generate_cli_command();
        assert!(cmd.contains("--input \"photo.jpg\""));
        assert!(cmd.contains("--pixel-size 35"));
        assert!(cmd.contains("--shape circle"));
    }
}
