use crate::manifest::{icon_specs, IconSpec};
use crate::raster::{fill_ellipse, fill_polygon, fill_rect, fill_rounded_rect};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icon set directory the binary writes into, relative to the working directory
pub const OUTPUT_DIR: &str = "RecipeApp/Assets.xcassets/AppIcon.appiconset";

/// Edge length of the design canvas all shape coordinates are given in
pub const DESIGN_SIZE: f64 = 1024.0;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const BACKGROUND_BLUE: Rgba<u8> = Rgba([74, 144, 226, 255]);
pub const SILHOUETTE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 230]);
pub const HEART_RED: Rgba<u8> = Rgba([255, 107, 107, 255]);

/// A family member: round head above a rounded body, in design units
struct Figure {
    head_x: f64,
    head_y: f64,
    head_radius: f64,
    body_x: f64,
    body_y: f64,
    body_width: f64,
    body_height: f64,
    body_radius: f64,
}

// Parents on the outside, children in between
const FAMILY: [Figure; 4] = [
    Figure {
        head_x: 300.0,
        head_y: 400.0,
        head_radius: 60.0,
        body_x: 270.0,
        body_y: 460.0,
        body_width: 60.0,
        body_height: 120.0,
        body_radius: 30.0,
    },
    Figure {
        head_x: 724.0,
        head_y: 400.0,
        head_radius: 60.0,
        body_x: 694.0,
        body_y: 460.0,
        body_width: 60.0,
        body_height: 120.0,
        body_radius: 30.0,
    },
    Figure {
        head_x: 400.0,
        head_y: 500.0,
        head_radius: 40.0,
        body_x: 380.0,
        body_y: 540.0,
        body_width: 40.0,
        body_height: 80.0,
        body_radius: 20.0,
    },
    Figure {
        head_x: 624.0,
        head_y: 500.0,
        head_radius: 40.0,
        body_x: 604.0,
        body_y: 540.0,
        body_width: 40.0,
        body_height: 80.0,
        body_radius: 20.0,
    },
];

/// Maps design units to whole output pixels, truncating
#[derive(Debug, Clone, Copy)]
struct Scale(f64);

impl Scale {
    fn for_size(size: u32) -> Self {
        Scale(f64::from(size) / DESIGN_SIZE)
    }

    fn px(self, design_units: f64) -> i32 {
        (design_units * self.0) as i32
    }
}

/// Draw the Family Health icon at `size` x `size` pixels
///
/// The composition is laid out on a 1024 unit canvas and every coordinate is
/// scaled and truncated to whole pixels before drawing. Later shapes overwrite
/// earlier ones, so the output only ever contains the four palette colors.
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let scale = Scale::for_size(size);
    let edge = size as i32;

    fill_ellipse(&mut img, [0, 0, edge, edge], BACKGROUND_BLUE);

    for figure in &FAMILY {
        draw_figure(&mut img, figure, scale);
    }

    draw_heart(&mut img, scale);
    draw_cross(&mut img, scale);

    img
}

fn draw_figure(img: &mut RgbaImage, figure: &Figure, scale: Scale) {
    let head_x = scale.px(figure.head_x);
    let head_y = scale.px(figure.head_y);
    let head_radius = scale.px(figure.head_radius);
    fill_ellipse(
        img,
        [
            head_x - head_radius,
            head_y - head_radius,
            head_x + head_radius,
            head_y + head_radius,
        ],
        SILHOUETTE_WHITE,
    );

    let body_x = scale.px(figure.body_x);
    let body_y = scale.px(figure.body_y);
    fill_rounded_rect(
        img,
        [
            body_x,
            body_y,
            body_x + scale.px(figure.body_width),
            body_y + scale.px(figure.body_height),
        ],
        scale.px(figure.body_radius),
        SILHOUETTE_WHITE,
    );
}

/// Two lobes side by side above a downward triangle
fn draw_heart(img: &mut RgbaImage, scale: Scale) {
    let x = scale.px(512.0);
    let y = scale.px(650.0);
    let size = scale.px(60.0);

    let left = x - size;
    let right = x + size;
    let top = y - size;
    let bottom = y + size;

    fill_ellipse(img, [left, top, x, y], HEART_RED);
    fill_ellipse(img, [x, top, right, y], HEART_RED);
    fill_polygon(img, &[(x, y), (left, bottom), (right, bottom)], HEART_RED);
}

fn draw_cross(img: &mut RgbaImage, scale: Scale) {
    let x = scale.px(500.0);
    let y = scale.px(520.0);
    let offset = scale.px(20.0);
    let bar = scale.px(24.0);

    // Vertical bar
    fill_rect(
        img,
        [x, y, x + bar, y + scale.px(80.0)],
        SILHOUETTE_WHITE,
    );
    // Horizontal bar
    fill_rect(
        img,
        [
            x - offset,
            y + offset,
            x + scale.px(64.0) - offset,
            y + offset + bar,
        ],
        SILHOUETTE_WHITE,
    );
}

/// Render one icon and write it as a PNG into `out_dir`
///
/// The directory must already exist. An existing file with the same name is
/// replaced.
pub fn write_icon(spec: &IconSpec, out_dir: &Path) -> Result<PathBuf> {
    let size = spec.pixel_size();
    let icon = render(size);
    log::debug!("Rendered {} at {size}x{size}", spec.filename);

    let output_path = out_dir.join(&spec.filename);
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create PNG file {}", output_path.display()))?;

    let mut out_file = BufWriter::new(file);
    write_png(&icon, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", output_path.display()))?;
    out_file.flush()?;

    log::debug!("Wrote {}", output_path.display());
    Ok(output_path)
}

/// Write every icon in the manifest into `out_dir`, in manifest order
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    log::info!("Writing app icons to {}", out_dir.display());

    for spec in icon_specs()? {
        println!("Generating {} ({})", spec.filename, spec.dimensions());
        write_icon(&spec, out_dir)?;
    }

    println!("All icons generated successfully!");
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}
