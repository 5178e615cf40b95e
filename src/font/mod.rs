use std::collections::HashMap;

use crate::{
    afm::{self, FontMetrics},
    codec,
    encoding::EncodingName,
    error::FontResult,
    geometry::BoundingBox,
    name_enum,
};

mod data;

name_enum!(
    /// The 14 fonts every PDF consumer is required to provide
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum StandardFont {
        Courier = "Courier",
        CourierBold = "Courier-Bold",
        CourierOblique = "Courier-Oblique",
        CourierBoldOblique = "Courier-BoldOblique",

        Helvetica = "Helvetica",
        HelveticaBold = "Helvetica-Bold",
        HelveticaOblique = "Helvetica-Oblique",
        HelveticaBoldOblique = "Helvetica-BoldOblique",

        TimesRoman = "Times-Roman",
        TimesBold = "Times-Bold",
        TimesItalic = "Times-Italic",
        TimesBoldItalic = "Times-BoldItalic",

        Symbol = "Symbol",
        ZapfDingbats = "ZapfDingbats",
    }
);

impl StandardFont {
    /// The encoding text should be encoded with before being shown in this font
    pub const fn default_encoding(self) -> EncodingName {
        match self {
            StandardFont::Symbol => EncodingName::Symbol,
            StandardFont::ZapfDingbats => EncodingName::ZapfDingbats,
            _ => EncodingName::WinAnsi,
        }
    }
}

/// A font's metrics along with the lookup tables derived from them
#[derive(Debug, PartialEq)]
pub struct Font {
    metrics: FontMetrics,
    width_by_glyph: HashMap<String, f32>,
    bbox_by_glyph: HashMap<String, BoundingBox>,
    kern_by_pair: HashMap<String, HashMap<String, f32>>,
    glyph_by_code: HashMap<i32, String>,
}

impl Font {
    pub(crate) fn load(font: StandardFont) -> FontResult<Self> {
        let afm = codec::decompress(font.compressed_metrics())?;

        Ok(Self::from_metrics(afm::parse(&afm)?))
    }

    /// Builds the lookup tables. Should a glyph name appear more than once, the
    /// last occurrence wins.
    pub fn from_metrics(metrics: FontMetrics) -> Self {
        let mut width_by_glyph = HashMap::with_capacity(metrics.char_metrics.len());
        let mut bbox_by_glyph = HashMap::with_capacity(metrics.char_metrics.len());
        let mut glyph_by_code = HashMap::new();

        for metric in &metrics.char_metrics {
            if width_by_glyph
                .insert(metric.name.clone(), metric.width)
                .is_some()
            {
                log::warn!(
                    "{}: glyph {:?} is defined more than once",
                    metrics.font_name,
                    metric.name
                );
            }

            bbox_by_glyph.insert(metric.name.clone(), metric.bounding_box);

            if metric.default_code >= 0 {
                glyph_by_code.insert(metric.default_code, metric.name.clone());
            }
        }

        let mut kern_by_pair: HashMap<String, HashMap<String, f32>> = HashMap::new();

        for pair in &metrics.kern_pairs {
            kern_by_pair
                .entry(pair.left.clone())
                .or_default()
                .insert(pair.right.clone(), pair.x_offset);
        }

        Self {
            metrics,
            width_by_glyph,
            bbox_by_glyph,
            kern_by_pair,
            glyph_by_code,
        }
    }

    pub fn name(&self) -> &str {
        &self.metrics.font_name
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn width_of_glyph(&self, glyph: &str) -> Option<f32> {
        self.width_by_glyph.get(glyph).copied()
    }

    pub fn bounding_box_of_glyph(&self, glyph: &str) -> Option<BoundingBox> {
        self.bbox_by_glyph.get(glyph).copied()
    }

    /// Kerning is directional: the adjustment for `(A, V)` says nothing about `(V, A)`
    pub fn x_axis_kerning_for_pair(&self, left: &str, right: &str) -> Option<f32> {
        self.kern_by_pair.get(left)?.get(right).copied()
    }

    /// The glyph at `code` in the font's built-in encoding
    pub fn glyph_for_code(&self, code: i32) -> Option<&str> {
        self.glyph_by_code.get(&code).map(String::as_str)
    }

    /// Total advance of a run of glyphs, including pair kerning, in text space
    /// units at the given font size. Glyphs the font doesn't know advance by 0.
    pub fn width_of_glyphs_at_size(&self, glyphs: &[&str], size: f32) -> f32 {
        let mut total = 0.0;

        for (idx, glyph) in glyphs.iter().enumerate() {
            total += self.width_of_glyph(glyph).unwrap_or(0.0);

            if let Some(next) = glyphs.get(idx + 1) {
                total += self.x_axis_kerning_for_pair(glyph, next).unwrap_or(0.0);
            }
        }

        total * size / 1000.0
    }

    /// Distance from the top of the font to its baseline, or to the bottom of its
    /// descenders if `include_descender` is set
    pub fn height_at_size(&self, size: f32, include_descender: bool) -> f32 {
        let top = self.metrics.ascender.unwrap_or(self.metrics.font_bbox.max.y);
        let bottom = self.metrics.descender.unwrap_or(self.metrics.font_bbox.min.y);

        let mut height = top - bottom;

        if !include_descender {
            height += self.metrics.descender.unwrap_or(0.0);
        }

        height * size / 1000.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::afm::{CharacterMetric, KernPair};

    fn glyph(code: i32, name: &str, width: f32) -> CharacterMetric {
        CharacterMetric {
            default_code: code,
            width,
            name: name.to_owned(),
            bounding_box: BoundingBox::new(0.0, 0.0, width, 700.0),
            ligatures: Vec::new(),
        }
    }

    fn font(char_metrics: Vec<CharacterMetric>, kern_pairs: Vec<KernPair>) -> Font {
        Font::from_metrics(FontMetrics {
            afm_version: "4.1".to_owned(),
            comments: Vec::new(),
            font_name: "Test".to_owned(),
            full_name: String::new(),
            family_name: String::new(),
            weight: String::new(),
            character_set: String::new(),
            version: String::new(),
            notice: String::new(),
            encoding_scheme: String::new(),
            italic_angle: 0.0,
            underline_position: -100.0,
            underline_thickness: 50.0,
            cap_height: None,
            x_height: None,
            ascender: Some(718.0),
            descender: Some(-207.0),
            std_hw: None,
            std_vw: None,
            is_fixed_pitch: false,
            font_bbox: BoundingBox::new(-166.0, -225.0, 1000.0, 931.0),
            characters: None,
            declared_glyphs: None,
            declared_kern_pairs: None,
            char_metrics,
            kern_pairs,
        })
    }

    #[test]
    fn kerning_is_directional() {
        let font = font(
            vec![glyph(65, "A", 667.0), glyph(86, "V", 667.0)],
            vec![KernPair::new("A", "V", -70.0)],
        );

        assert_eq!(font.x_axis_kerning_for_pair("A", "V"), Some(-70.0));
        assert_eq!(font.x_axis_kerning_for_pair("V", "A"), None);
        assert_eq!(font.x_axis_kerning_for_pair("A", "A"), None);
    }

    #[test]
    fn kern_pairs_may_name_missing_glyphs() {
        let font = font(vec![glyph(65, "A", 667.0)], vec![KernPair::new("A", "Aogonek", -40.0)]);

        assert_eq!(font.x_axis_kerning_for_pair("A", "Aogonek"), Some(-40.0));
        assert_eq!(font.width_of_glyph("Aogonek"), None);
    }

    #[test]
    fn duplicate_glyph_names_last_wins() {
        let font = font(
            vec![glyph(65, "A", 667.0), glyph(-1, "A", 700.0)],
            Vec::new(),
        );

        assert_eq!(font.width_of_glyph("A"), Some(700.0));
        assert_eq!(
            font.bounding_box_of_glyph("A"),
            Some(BoundingBox::new(0.0, 0.0, 700.0, 700.0))
        );
        assert_eq!(font.glyph_for_code(65), Some("A"));
        assert_eq!(font.glyph_for_code(-1), None);
    }

    #[test]
    fn unknown_glyph_is_absent() {
        let font = font(vec![glyph(32, "space", 278.0)], Vec::new());

        assert_eq!(font.width_of_glyph("nonexistent-glyph"), None);
        assert_eq!(font.bounding_box_of_glyph("nonexistent-glyph"), None);
    }

    #[test]
    fn run_width_includes_kerning() {
        let font = font(
            vec![glyph(65, "A", 667.0), glyph(86, "V", 667.0)],
            vec![KernPair::new("A", "V", -70.0)],
        );

        assert_eq!(font.width_of_glyphs_at_size(&["A", "V"], 1000.0), 1264.0);
        assert_eq!(font.width_of_glyphs_at_size(&["V", "A"], 10.0), 13.34);
        assert_eq!(font.width_of_glyphs_at_size(&["A", "missing"], 1000.0), 667.0);
        assert_eq!(font.width_of_glyphs_at_size(&[], 12.0), 0.0);
    }

    #[test]
    fn height() {
        let font = font(Vec::new(), Vec::new());

        assert_eq!(font.height_at_size(1000.0, true), 925.0);
        assert_eq!(font.height_at_size(1000.0, false), 718.0);
    }

    #[test]
    fn names_round_trip() {
        for &font in StandardFont::ALL {
            assert_eq!(StandardFont::from_name(font.name()), Some(font));
        }

        assert_eq!(StandardFont::ALL.len(), 14);
        assert_eq!(StandardFont::from_name("NotAFont"), None);
        assert_eq!(StandardFont::from_name("helvetica"), None);
    }

    #[test]
    fn default_encodings() {
        assert_eq!(StandardFont::Symbol.default_encoding(), EncodingName::Symbol);
        assert_eq!(
            StandardFont::ZapfDingbats.default_encoding(),
            EncodingName::ZapfDingbats
        );
        assert_eq!(
            StandardFont::TimesBoldItalic.default_encoding(),
            EncodingName::WinAnsi
        );
    }
}
