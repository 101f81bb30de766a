//! Font bundled into chart rendering.
//!
//! Source Han Sans SC covers the Latin digits and letters, the Unicode Roman
//! numerals, and the CJK labels used on exported charts. The build script
//! fetches it (or copies `FONT_TTF`); if neither works the bytes are empty and
//! callers fall back to approximate metrics.

pub static FONT_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/SourceHanSansSC-Regular.otf"));

pub fn is_available() -> bool {
    !FONT_BYTES.is_empty()
}
