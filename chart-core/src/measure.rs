//! Text width measurement.
//!
//! Layout only needs the advance width of a string at a font size. The
//! measurer is passed in so the same layout runs against a browser canvas,
//! the embedded font, or a fixed approximation in tests.

use log::debug;
use ttf_parser::Face;

use crate::error::ChartError;

/// Width of `text` set at `font_size` pixels. Must be deterministic.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> f64,
{
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self(text, font_size)
    }
}

/// Fixed per-character advances: `narrow` em for ASCII, one em otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxMeasurer {
    pub narrow: f64,
}

impl Default for ApproxMeasurer {
    fn default() -> Self {
        ApproxMeasurer { narrow: 0.5 }
    }
}

impl TextMeasurer for ApproxMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars()
            .map(|c| if c.is_ascii() { self.narrow } else { 1.0 })
            .sum::<f64>()
            * font_size
    }
}

/// Sums horizontal glyph advances from a font face. No shaping or kerning.
#[derive(Clone)]
pub struct FontMeasurer {
    face: Face<'static>,
}

impl FontMeasurer {
    /// Measurer over the font bundled by the `fonts` crate.
    pub fn embedded() -> Result<Self, ChartError> {
        Self::from_static(fonts::FONT_BYTES)
    }

    pub fn from_static(bytes: &'static [u8]) -> Result<Self, ChartError> {
        if bytes.is_empty() {
            return Err(ChartError::FontUnavailable);
        }
        let face = Face::parse(bytes, 0)?;
        debug!(
            "font measurer: {} glyphs, {} units/em",
            face.number_of_glyphs(),
            face.units_per_em()
        );
        Ok(FontMeasurer { face })
    }

    fn advance_units(&self, c: char) -> f64 {
        let upm = self.face.units_per_em() as f64;
        self.face
            .glyph_index(c)
            .and_then(|g| self.face.glyph_hor_advance(g))
            .map(|a| a as f64)
            // missing glyphs get half an em
            .unwrap_or(upm / 2.0)
    }
}

impl TextMeasurer for FontMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let upm = self.face.units_per_em() as f64;
        let units: f64 = text.chars().map(|c| self.advance_units(c)).sum();
        units * font_size / upm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_measurers() {
        let m = |t: &str, size: f64| t.len() as f64 * size;
        assert_eq!(m.text_width("654", 10.0), 30.0);
    }

    #[test]
    fn approx_widths() {
        let m = ApproxMeasurer::default();
        assert_eq!(m.text_width("", 64.0), 0.0);
        assert_eq!(m.text_width("65", 64.0), 64.0);
        assert_eq!(m.text_width("Ⅱ", 64.0), 64.0);
    }

    #[test]
    fn empty_font_is_unavailable() {
        assert!(matches!(
            FontMeasurer::from_static(&[]),
            Err(ChartError::FontUnavailable)
        ));
        assert!(matches!(
            FontMeasurer::from_static(b"not a font"),
            Err(ChartError::FontParse(_))
        ));
    }

    #[test]
    fn embedded_font_measures_when_present() {
        let Ok(m) = FontMeasurer::embedded() else {
            return;
        };
        let one = m.text_width("6", 64.0);
        assert!(one > 0.0);
        assert!((m.text_width("66", 64.0) - 2.0 * one).abs() < 1e-9);
        assert_eq!(m.text_width("6", 64.0), m.text_width("6", 64.0));
    }
}
