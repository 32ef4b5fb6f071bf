//! High-level, ergonomic library API: turn image bytes or files into pixel art
//! in memory or on disk, plus a batch helper for directories. Prefer these
//! entrypoints over the low-level processing modules when embedding PIXELART.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::PixelArtParams;
use crate::core::processing::pipeline::process_image_bytes;
use crate::error::{Error, Result};
use crate::io::reader::read_image_bytes;
use crate::types::InputFormat;

pub use crate::core::processing::pipeline::PixelArt;

/// Process encoded PNG/JPEG bytes entirely in memory.
pub fn process_bytes(bytes: &[u8], params: &PixelArtParams) -> Result<PixelArt> {
    process_image_bytes(bytes, params)
}

/// Read an image file and process it in memory (no output written).
pub fn process_file_to_buffer(input: &Path, params: &PixelArtParams) -> Result<PixelArt> {
    let bytes = read_image_bytes(input)?;
    process_image_bytes(&bytes, params)
}

/// Process `input` and write the PNG result to `output`.
pub fn process_file_to_path(input: &Path, output: &Path, params: &PixelArtParams) -> Result<PixelArt> {
    let art = process_file_to_buffer(input, params)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &art.png)?;
    info!("Saved pixel art {:?} -> {:?}", input, output);
    Ok(art)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// One pass over `input_dir`: the number of entries and the PNG/JPEG files
/// among them, sorted by name.
fn scan_directory(input_dir: &Path) -> Result<(usize, Vec<PathBuf>)> {
    let mut total = 0;
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        total += 1;
        if path.is_file() && InputFormat::matches_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok((total, files))
}

/// Files directly under `input_dir` with a PNG/JPEG extension, sorted by name.
pub fn iterate_image_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let (_, files) = scan_directory(input_dir)?;
    Ok(files.into_iter())
}

/// Output file name for a batch input: `<stem>_pixel_art.png`.
pub fn output_name_for(input: &Path) -> Result<String> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidArgument {
            arg: "input",
            value: input.display().to_string(),
        })?;
    Ok(format!("{}_pixel_art.png", stem))
}

/// Process every PNG/JPEG file in `input_dir` into `output_dir` using `params`.
/// Entries that are not PNG/JPEG files are counted as skipped. If
/// `continue_on_error` is true, failures are counted and processing continues;
/// otherwise the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &PixelArtParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(output_dir)?;

    let (total, files) = scan_directory(input_dir)?;
    let mut report = BatchReport {
        skipped: total - files.len(),
        ..BatchReport::default()
    };

    for path in files {
        let output_path = output_dir.join(output_name_for(&path)?);
        info!("Processing: {:?} -> {:?}", path, output_path);

        match process_file_to_path(&path, &output_path, params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        assert_eq!(output_name_for(Path::new("dir/beach.jpg")).unwrap(), "beach_pixel_art.png");
        assert_eq!(output_name_for(Path::new("a.b.png")).unwrap(), "a.b_pixel_art.png");
        assert!(output_name_for(Path::new("/")).is_err());
    }

    #[test]
    fn scan_counts_every_entry_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.JPG"), b"").unwrap();
        std::fs::write(dir.path().join("a.png"), b"").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let (total, files) = scan_directory(dir.path()).unwrap();
        assert_eq!(total, 4);
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap()).collect();
        assert_eq!(names, ["a.png", "b.JPG"]);
    }

    #[test]
    fn skipped_entries_are_counted_from_the_same_listing() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("broken.png"), b"nope").unwrap();
        std::fs::write(input.path().join("notes.txt"), b"hi").unwrap();
        std::fs::create_dir(input.path().join("sub")).unwrap();

        let params = PixelArtParams::default();
        let report = process_directory_to_path(input.path(), output.path(), &params, true).unwrap();
        assert_eq!(
            report,
            BatchReport {
                processed: 0,
                skipped: 2,
                errors: 1
            }
        );
    }
}
