#![doc = r#"
PIXELART: turn photos into smartphone-wallpaper pixel art.

The library runs a short, pure pipeline over an in-memory RGB bitmap:
decode (PNG/JPEG) → resize to fit 1080×2400 without upscaling → pixelate into
square, circle or star cells filled with each cell's average colour → encode
as PNG. It powers both the `pixelart` CLI and the `pixelartUI` GUI.

Add dependency
--------------
```toml
[dependencies]
pixelart = { version = "0.1", default-features = false }
```

Quick start: bytes in, PNG bytes out
------------------------------------
```rust,no_run
use pixelart::{process_bytes, PixelArtParams, PixelShape};

fn main() -> pixelart::Result<()> {
    let bytes = std::fs::read("/photos/beach.jpg")?;
    let art = process_bytes(&bytes, &PixelArtParams::new(20, PixelShape::Star))?;
    std::fs::write(pixelart::DOWNLOAD_FILE_NAME, &art.png)?;
    Ok(())
}
```

Working on bitmaps directly
---------------------------
```rust
use image::Rgb;
use pixelart::core::processing::pixelate::pixelate;
use pixelart::{Bitmap, PixelShape};

let img = Bitmap::from_pixel(40, 40, Rgb([255, 0, 0]));
let out = pixelate(&img, 20, PixelShape::Square).unwrap();
assert_eq!(out, img);
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use pixelart::{process_directory_to_path, PixelArtParams};

fn main() -> pixelart::Result<()> {
    let report = process_directory_to_path(
        Path::new("/photos"),
        Path::new("/out"),
        &PixelArtParams::default(),
        true, // continue_on_error
    )?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `pixelart::Result<T>`; every failure (corrupt
upload, unsupported format, zero-sized image, bad parameters) is a
`pixelart::Error` and nothing is recovered internally.

```rust
use pixelart::{process_bytes, Error, PixelArtParams};

match process_bytes(b"not an image", &PixelArtParams::default()) {
    Ok(_) => unreachable!(),
    Err(Error::Image(e)) => eprintln!("decode failed: {e}"),
    Err(other) => eprintln!("An error occurred: {other}"),
}
```

Feature flags
-------------
- `gui`: builds the GUI module and the `pixelartUI` binary.
- `full`: everything.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: resize, grid, shapes and pixelation primitives.
- [`io`]: decoder and PNG writer.
- [`types`]: `PixelShape`, `Bitmap` and the fixed constants.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use core::params::{PixelArtParams, load_preset, save_preset};
pub use error::{Error, Result};
pub use types::{
    Bitmap, DEFAULT_PIXEL_SIZE, DOWNLOAD_FILE_NAME, InputFormat, MAX_HEIGHT, MAX_PIXEL_SIZE,
    MAX_WIDTH, MIN_PIXEL_SIZE, OUTPUT_MIME_TYPE, PixelShape,
};

// Codec helpers
pub use io::reader::{decode_image, open_image};
pub use io::writers::{encode_png, write_png};

// High-level API re-exports
pub use api::{
    BatchReport, PixelArt, iterate_image_files, output_name_for, process_bytes,
    process_directory_to_path, process_file_to_buffer, process_file_to_path,
};
