use super::models::{PixelArtGui, Preview};
use crate::{DOWNLOAD_FILE_NAME, InputFormat, process_bytes};
use std::fs;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

impl PixelArtGui {
    pub fn select_input_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &InputFormat::EXTENSIONS)
            .pick_file()
        {
            info!("Selected input file: {:?}", path);
            match fs::read(&path) {
                Ok(bytes) => {
                    self.input_path = Some(path);
                    self.load_input_bytes(bytes);
                }
                Err(e) => {
                    error!("Failed to read {:?}: {}", path, e);
                    self.fail(e.to_string());
                }
            }
        }
    }

    /// Replace the current input; the previous result is discarded.
    pub fn load_input_bytes(&mut self, bytes: Vec<u8>) {
        self.input_bytes = Some(Arc::from(bytes));
        self.result = None;
        let result_preview = self.result_preview.take();
        self.retire_preview(result_preview);
        let original_preview = self.original_preview.take();
        self.retire_preview(original_preview);
        self.clear_status();
        self.process_image();
    }

    fn next_uri(&mut self, name: &str, extension: &str) -> String {
        self.generation += 1;
        format!("bytes://{}-{}.{}", name, self.generation, extension)
    }

    fn retire_preview(&mut self, preview: Option<Preview>) {
        if let Some(preview) = preview {
            self.stale_uris.push(preview.uri);
        }
    }

    /// URIs whose previews were replaced; the caller drops them from the image caches.
    pub fn take_stale_uris(&mut self) -> Vec<String> {
        std::mem::take(&mut self.stale_uris)
    }

    fn fail(&mut self, message: String) {
        self.result = None;
        let result_preview = self.result_preview.take();
        self.retire_preview(result_preview);
        self.success_message = None;
        self.info_message = None;
        self.error_message = Some(format!("An error occurred: {}", message));
    }

    /// Run the whole pipeline on the current input. Any failure ends up in
    /// `error_message` and clears the previous output.
    pub fn process_image(&mut self) {
        let Some(bytes) = self.input_bytes.clone() else {
            debug!("No input selected, nothing to process");
            return;
        };

        let params = self.params();
        let start = Instant::now();

        match process_bytes(&bytes, &params) {
            Ok(art) => {
                let duration = start.elapsed();
                self.last_processing_duration = Some(duration);
                info!("Processing completed in {:.2?}", duration);

                if self.original_preview.is_none() {
                    let extension = match art.input_format {
                        InputFormat::Png => "png",
                        InputFormat::Jpeg => "jpg",
                    };
                    self.original_preview = Some(Preview {
                        uri: self.next_uri("original", extension),
                        bytes: bytes.clone(),
                        width: art.original.width(),
                        height: art.original.height(),
                    });
                }

                let previous = self.result_preview.take();
                self.retire_preview(previous);
                self.result_preview = Some(Preview {
                    uri: self.next_uri("pixel-art", "png"),
                    bytes: Arc::from(art.png.clone()),
                    width: art.image.width(),
                    height: art.image.height(),
                });

                self.error_message = None;
                self.info_message = art
                    .resized()
                    .then(|| "Image resized to standard smartphone wallpaper dimensions.".to_string());
                self.success_message = Some("Your pixel art is ready!".to_string());
                self.result = Some(art);
            }
            Err(e) => {
                error!("An error occurred: {}", e);
                let original_preview = self.original_preview.take();
                self.retire_preview(original_preview);
                self.fail(e.to_string());
            }
        }
    }

    pub fn download_pixel_art(&mut self) {
        let Some(art) = &self.result else {
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(DOWNLOAD_FILE_NAME)
            .save_file()
        {
            match fs::write(&path, &art.png) {
                Ok(()) => info!("Pixel art saved to: {:?}", path),
                Err(e) => {
                    error!("Failed to save {:?}: {}", path, e);
                    self.error_message = Some(format!("An error occurred: {}", e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitmap, PixelShape, encode_png};
    use image::Rgb;

    #[test]
    fn successful_processing_fills_previews() {
        let mut gui = PixelArtGui::default();
        let img = Bitmap::from_pixel(30, 30, Rgb([0, 128, 0]));
        gui.shape = PixelShape::Star;
        gui.load_input_bytes(encode_png(&img).unwrap());

        assert!(gui.error_message.is_none());
        assert!(gui.success_message.is_some());
        assert!(gui.info_message.is_none());
        let original = gui.original_preview.as_ref().unwrap();
        let result = gui.result_preview.as_ref().unwrap();
        assert!(original.uri.ends_with(".png"));
        assert_ne!(original.uri, result.uri);
        assert_eq!((result.width, result.height), (30, 30));
    }

    #[test]
    fn reprocessing_changes_result_uri() {
        let mut gui = PixelArtGui::default();
        let img = Bitmap::from_pixel(12, 12, Rgb([1, 2, 3]));
        gui.load_input_bytes(encode_png(&img).unwrap());
        let first = gui.result_preview.as_ref().unwrap().uri.clone();

        gui.pixel_size = 6;
        gui.process_image();
        assert_ne!(gui.result_preview.as_ref().unwrap().uri, first);
    }

    #[test]
    fn replaced_previews_are_queued_for_release() {
        let mut gui = PixelArtGui::default();
        let img = Bitmap::from_pixel(12, 12, Rgb([9, 9, 9]));
        gui.load_input_bytes(encode_png(&img).unwrap());
        assert!(gui.take_stale_uris().is_empty());

        let original = gui.original_preview.as_ref().unwrap().uri.clone();
        let first = gui.result_preview.as_ref().unwrap().uri.clone();
        gui.pixel_size = 6;
        gui.process_image();
        assert_eq!(gui.take_stale_uris(), vec![first]);
        assert!(gui.take_stale_uris().is_empty());

        let second = gui.result_preview.as_ref().unwrap().uri.clone();
        gui.load_input_bytes(b"garbage".to_vec());
        assert_eq!(gui.take_stale_uris(), vec![second, original]);
        assert!(gui.original_preview.is_none());
        assert!(gui.result_preview.is_none());
    }

    #[test]
    fn failure_shows_message_and_no_output() {
        let mut gui = PixelArtGui::default();
        gui.load_input_bytes(b"not an image at all".to_vec());

        assert!(gui.result.is_none());
        assert!(gui.result_preview.is_none());
        assert!(gui.original_preview.is_none());
        assert!(gui.success_message.is_none());
        assert!(gui.error_message.as_deref().unwrap().starts_with("An error occurred: "));
    }
}
