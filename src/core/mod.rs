//! Core processing building blocks: fit-to-wallpaper resizing, the cell grid,
//! shape rendering and pixelation, plus the decode/encode pipeline. These are
//! the primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
