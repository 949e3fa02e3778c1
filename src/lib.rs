pub mod icon_gen;
pub mod manifest;
pub mod raster;

pub use icon_gen::{generate_icons, render, write_icon, OUTPUT_DIR};
pub use manifest::{icon_specs, IconSpec};
