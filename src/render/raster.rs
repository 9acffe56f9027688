use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{HandscriptError, HandscriptResult};

/// Rasterized frame in straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub rgba8: Vec<u8>,
}

impl Raster {
    /// Write the frame as PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> HandscriptResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterize an SVG document at `scale` with `usvg`/`resvg`.
pub fn rasterize_svg(svg: &str, scale: f32) -> HandscriptResult<Raster> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(HandscriptError::validation("scale must be finite and > 0"));
    }
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| HandscriptError::svg(format!("parse svg tree: {e}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    const MAX_DIM: u32 = 16_384;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(HandscriptError::validation(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| HandscriptError::svg("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba8 = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba8);
    Ok(Raster {
        width,
        height,
        rgba8,
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
