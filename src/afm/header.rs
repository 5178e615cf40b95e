use crate::{error::FontResult, geometry::BoundingBox};

use super::{lines, parse_bounding_box, parse_integer, parse_number, split_key_value};

/// The global font information preceding `StartCharMetrics`
#[derive(Debug, Default)]
pub(super) struct FontHeader {
    pub afm_version: Option<String>,
    pub comments: Vec<String>,
    pub font_name: Option<String>,
    pub full_name: Option<String>,
    pub family_name: Option<String>,
    pub weight: Option<String>,
    pub character_set: Option<String>,
    pub version: Option<String>,
    pub notice: Option<String>,
    pub encoding_scheme: Option<String>,
    pub italic_angle: Option<f32>,
    pub underline_position: Option<f32>,
    pub underline_thickness: Option<f32>,
    pub cap_height: Option<f32>,
    pub x_height: Option<f32>,
    pub ascender: Option<f32>,
    pub descender: Option<f32>,
    pub std_hw: Option<f32>,
    pub std_vw: Option<f32>,
    pub is_fixed_pitch: Option<bool>,
    pub font_bbox: Option<BoundingBox>,
    pub characters: Option<usize>,
}

impl FontHeader {
    pub fn parse(text: &str) -> FontResult<Self> {
        let mut header = Self::default();

        for line in lines(text) {
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = split_key_value(line);
            let owned = || Some(value.to_owned());

            match key {
                "StartFontMetrics" => header.afm_version = owned(),
                "Comment" => header.comments.push(value.to_owned()),
                "FontName" => header.font_name = owned(),
                "FullName" => header.full_name = owned(),
                "FamilyName" => header.family_name = owned(),
                "Weight" => header.weight = owned(),
                "CharacterSet" => header.character_set = owned(),
                "Version" => header.version = owned(),
                "Notice" => header.notice = owned(),
                "EncodingScheme" => header.encoding_scheme = owned(),
                "ItalicAngle" => header.italic_angle = Some(parse_number(key, value)?),
                "UnderlinePosition" => header.underline_position = Some(parse_number(key, value)?),
                "UnderlineThickness" => {
                    header.underline_thickness = Some(parse_number(key, value)?)
                }
                "CapHeight" => header.cap_height = Some(parse_number(key, value)?),
                "XHeight" => header.x_height = Some(parse_number(key, value)?),
                "Ascender" => header.ascender = Some(parse_number(key, value)?),
                "Descender" => header.descender = Some(parse_number(key, value)?),
                "StdHW" => header.std_hw = Some(parse_number(key, value)?),
                "StdVW" => header.std_vw = Some(parse_number(key, value)?),
                "IsFixedPitch" => header.is_fixed_pitch = Some(value == "true"),
                "FontBBox" => header.font_bbox = Some(parse_bounding_box(key, value)?),
                "Characters" => header.characters = Some(parse_integer(key, value)?),
                _ => log::trace!("skipping AFM header key {:?}", key),
            }
        }

        Ok(header)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::FontError;

    #[test]
    fn symbolic_font_header() {
        let header = FontHeader::parse(
            "StartFontMetrics 4.1
FontName ZapfDingbats
FullName ITC Zapf Dingbats
FamilyName ZapfDingbats
Weight Medium
ItalicAngle 0
IsFixedPitch false
CharacterSet Special
FontBBox -1 -143 981 820
EncodingScheme FontSpecific
Characters 202
",
        )
        .unwrap();

        assert_eq!(header.full_name.as_deref(), Some("ITC Zapf Dingbats"));
        assert_eq!(header.encoding_scheme.as_deref(), Some("FontSpecific"));
        assert_eq!(header.characters, Some(202));
        assert_eq!(header.is_fixed_pitch, Some(false));
        assert_eq!(header.cap_height, None);
        assert_eq!(header.ascender, None);
    }

    #[test]
    fn fractional_italic_angle() {
        let header = FontHeader::parse("ItalicAngle -15.5\nIsFixedPitch true\n").unwrap();

        assert_eq!(header.italic_angle, Some(-15.5));
        assert_eq!(header.is_fixed_pitch, Some(true));
    }

    #[test]
    fn bare_cr_separates_keys() {
        let header =
            FontHeader::parse("FontName Courier\rCapHeight 562\rIsFixedPitch true\r").unwrap();

        assert_eq!(header.font_name.as_deref(), Some("Courier"));
        assert_eq!(header.cap_height, Some(562.0));
        assert_eq!(header.is_fixed_pitch, Some(true));
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let header = FontHeader::parse("MappingScheme 1\nEscChar 255\nFontName Symbol\n").unwrap();

        assert_eq!(header.font_name.as_deref(), Some("Symbol"));
    }

    #[test]
    fn invalid_number() {
        assert!(matches!(
            FontHeader::parse("CapHeight tall\n"),
            Err(FontError::InvalidNumber { .. })
        ));
    }
}
