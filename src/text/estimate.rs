use unicode_width::UnicodeWidthChar;

use super::{TextMeasurer, TextMetrics, TextStyle};

const LINE_HEIGHT_FACTOR: f64 = 1.2;
const MONOSPACE_ADVANCE: f64 = 0.6;

/// Deterministic, backend-independent width estimate.
///
/// Widths are summed from per-character advance classes (in em) and scaled
/// by the font size. Wide East Asian characters count a full em; monospace
/// families use a single advance for every narrow character.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl EstimatedTextMeasurer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn advance_em(ch: char, monospace: bool) -> f64 {
        if ch.width().unwrap_or(0) >= 2 {
            return 1.0;
        }
        if monospace {
            return MONOSPACE_ADVANCE;
        }
        match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' | ';' | '!' | '|' | 'i' | 'l' | 'j' | '\'' => 0.34,
            '-' | '+' | '%' | '(' | ')' | '/' | 'f' | 't' | 'r' => 0.42,
            ' ' => 0.33,
            'm' | 'w' | 'M' | 'W' => 0.86,
            'A'..='Z' => 0.68,
            _ => 0.56,
        }
    }

    fn is_monospace(family: &str) -> bool {
        let family = family.to_ascii_lowercase();
        family.contains("mono") || family.contains("courier") || family.contains("consolas")
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }
        let monospace = Self::is_monospace(&style.font_family);
        let units: f64 = text.chars().map(|ch| Self::advance_em(ch, monospace)).sum();
        TextMetrics {
            width: units * style.font_size_px,
            height: style.font_size_px * LINE_HEIGHT_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EstimatedTextMeasurer;
    use crate::text::{TextMeasurer, TextStyle};

    #[test]
    fn width_scales_with_font_size() {
        let mut measurer = EstimatedTextMeasurer::new();
        let small = measurer.measure("12.50ms", &TextStyle::new("Helvetica", 10.0));
        let large = measurer.measure("12.50ms", &TextStyle::new("Helvetica", 20.0));
        assert!((large.width - 2.0 * small.width).abs() <= 1e-9);
        assert!((large.height - 24.0).abs() <= 1e-9);
    }

    #[test]
    fn monospace_family_uses_uniform_advance() {
        let mut measurer = EstimatedTextMeasurer::new();
        let style = TextStyle::new("DejaVu Sans Mono", 10.0);
        let narrow = measurer.measure("iiii", &style);
        let wide = measurer.measure("MMMM", &style);
        assert_eq!(narrow.width, wide.width);
    }

    #[test]
    fn wide_characters_count_a_full_em() {
        let mut measurer = EstimatedTextMeasurer::new();
        let metrics = measurer.measure("\u{6f22}\u{5b57}", &TextStyle::new("Helvetica", 14.0));
        assert!((metrics.width - 28.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_text_has_no_extent() {
        let mut measurer = EstimatedTextMeasurer::new();
        let metrics = measurer.measure("", &TextStyle::new("Helvetica", 14.0));
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.height, 0.0);
    }
}
