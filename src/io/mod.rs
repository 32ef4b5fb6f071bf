//! I/O layer: the `reader` decodes PNG/JPEG bytes into RGB bitmaps and the
//! `writers` encode results as PNG, in memory or on disk.
pub mod reader;
pub use reader::{decode_image, open_image, read_image_bytes};

pub mod writers;
