/// Errors from measuring, loading styles and rasterizing. Layout itself
/// cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("embedded font is missing; rebuild the fonts crate with network access or FONT_TTF set")]
    FontUnavailable,

    #[error("failed to parse font face: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),

    #[error("invalid chart style: {0}")]
    Style(#[from] toml::de::Error),

    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("pixmap alloc failed for {width}x{height}")]
    Pixmap { width: u32, height: u32 },

    #[error("png encode: {0}")]
    Png(#[from] png::EncodingError),
}
