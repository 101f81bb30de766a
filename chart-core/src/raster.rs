use std::sync::Arc;

use log::{debug, warn};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::ChartError;
use crate::scene::Scene;
use crate::style::ChartStyle;
use crate::svg::scene_to_svg;

/// Font database holding the embedded face, mapped to the generic serif and
/// sans-serif families. Empty when the font could not be bundled; text is
/// then left out of raster output.
pub fn font_database() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    if !fonts::is_available() {
        warn!("embedded font is missing; chart text will not be rasterized");
        return db;
    }
    db.load_font_data(fonts::FONT_BYTES.to_vec());
    let family = db
        .faces()
        .next()
        .and_then(|face| face.families.first().map(|(n, _)| n.clone()));
    if let Some(name) = family {
        debug!("raster font family: {name}");
        db.set_serif_family(name.clone());
        db.set_sans_serif_family(name);
    }
    db
}

/// Rasterize an SVG document onto a `width × height` pixmap.
pub fn rasterize_svg(
    svg: &str,
    width: u32,
    height: u32,
    fontdb: Arc<usvg::fontdb::Database>,
) -> Result<tiny_skia::Pixmap, ChartError> {
    let mut opt = usvg::Options::default();
    opt.fontdb = fontdb;
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ChartError::Pixmap { width, height })?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    Ok(pixmap)
}

/// RGBA pixmap to PNG bytes. No filtering and default compression, so the
/// same pixels always give the same bytes.
pub fn encode_png_deterministic(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, ChartError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        let mut writer = enc.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }
    Ok(buf)
}

/// Render a scene straight to PNG bytes at the scene's canvas size.
pub fn scene_to_png(scene: &Scene, style: &ChartStyle) -> Result<Vec<u8>, ChartError> {
    let svg = scene_to_svg(scene, style.ascent, style.descent);
    let pixmap = rasterize_svg(&svg, scene.width, scene.height, Arc::new(font_database()))?;
    encode_png_deterministic(&pixmap)
}
