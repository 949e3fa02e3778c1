//! The fixed list of app icon sizes to produce
//!
//! Sizes are iOS point sizes, so one of them is fractional (83.5 for the iPad Pro
//! app launcher). The rendered pixel size truncates it while the filename keeps
//! the fractional form that the asset catalog expects.

use anyhow::{Context, Result};
use serde::Deserialize;

const ICON_MANIFEST: &str = r#"
[
  { "size": 20, "filename": "icon_20.png" },
  { "size": 29, "filename": "icon_29.png" },
  { "size": 40, "filename": "icon_40.png" },
  { "size": 60, "filename": "icon_60.png" },
  { "size": 76, "filename": "icon_76.png" },
  { "size": 83.5, "filename": "icon_83.5.png" },
  { "size": 120, "filename": "icon_120.png" },
  { "size": 152, "filename": "icon_152.png" },
  { "size": 167, "filename": "icon_167.png" },
  { "size": 1024, "filename": "icon_1024.png" }
]
"#;

/// One icon file to produce
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconSpec {
    /// Nominal size, possibly fractional
    pub size: f64,

    /// Output filename inside the icon set directory
    pub filename: String,
}

impl IconSpec {
    /// Pixel edge length of the rendered image
    pub fn pixel_size(&self) -> u32 {
        self.size as u32
    }

    /// Nominal dimensions for progress output, e.g. `20x20` or `83.5x83.5`
    pub fn dimensions(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Load the icon list in output order
pub fn icon_specs() -> Result<Vec<IconSpec>> {
    serde_json::from_str(ICON_MANIFEST).context("Failed to parse embedded icon manifest")
}
