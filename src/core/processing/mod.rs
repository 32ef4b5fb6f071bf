pub mod grid;
pub mod pipeline;
pub mod pixelate;
pub mod resize;
pub mod shapes;
