//! Display module — the render surface the camera takes its size from.

mod display;

pub use display::{Display, DisplayConfig};
