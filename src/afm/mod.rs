//! Parser for the subset of the Adobe Font Metrics format used by the 14
//! standard fonts: the font header, `CharMetrics` and `KernPairs`.
//!
//! <https://adobe-type-tools.github.io/font-tech-notes/pdfs/5004.AFM_Spec.pdf>

use crate::{
    error::{FontError, FontResult},
    geometry::BoundingBox,
};

pub use self::{char_metrics::CharacterMetric, char_metrics::Ligature, kern_pairs::KernPair};

use self::header::FontHeader;

mod char_metrics;
mod header;
mod kern_pairs;

/// Everything the AFM file says about one font.
///
/// Glyph names within `char_metrics` are expected to be unique. `kern_pairs` may
/// name glyphs that have no entry in `char_metrics`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// The argument to `StartFontMetrics`, e.g. `4.1`
    pub afm_version: String,
    pub comments: Vec<String>,

    pub font_name: String,
    pub full_name: String,
    pub family_name: String,
    pub weight: String,
    pub character_set: String,
    pub version: String,
    pub notice: String,
    pub encoding_scheme: String,

    pub italic_angle: f32,
    pub underline_position: f32,
    pub underline_thickness: f32,

    /// Absent for the symbolic fonts
    pub cap_height: Option<f32>,
    pub x_height: Option<f32>,
    pub ascender: Option<f32>,
    pub descender: Option<f32>,

    /// Dominant width of horizontal stems
    pub std_hw: Option<f32>,

    /// Dominant width of vertical stems
    pub std_vw: Option<f32>,

    pub is_fixed_pitch: bool,
    pub font_bbox: BoundingBox,

    /// Number of glyphs the font declares via `Characters`
    pub characters: Option<usize>,

    /// The counts given after `StartCharMetrics` and `StartKernPairs`
    pub declared_glyphs: Option<usize>,
    pub declared_kern_pairs: Option<usize>,

    pub char_metrics: Vec<CharacterMetric>,
    pub kern_pairs: Vec<KernPair>,
}

pub fn parse(raw: &str) -> FontResult<FontMetrics> {
    let char_metrics_section = Section::find(raw, &["StartCharMetrics"], "EndCharMetrics")?
        .ok_or(FontError::MissingSection {
            section: "StartCharMetrics",
        })?;

    let header = FontHeader::parse(&raw[..char_metrics_section.marker_offset])?;
    let char_metrics = char_metrics::parse_char_metrics(&char_metrics_section)?;

    let (kern_pairs, declared_kern_pairs) = match Section::find(
        raw,
        &["StartKernPairs", "StartKernPairs0"],
        "EndKernPairs",
    )? {
        Some(section) => (
            kern_pairs::parse_kern_pairs(&section)?,
            section.declared_count,
        ),
        None => (Vec::new(), None),
    };

    Ok(FontMetrics {
        afm_version: header.afm_version.unwrap_or_default(),
        comments: header.comments,
        font_name: header.font_name.ok_or(FontError::MissingRequiredKey {
            key: "FontName",
        })?,
        full_name: header.full_name.unwrap_or_default(),
        family_name: header.family_name.unwrap_or_default(),
        weight: header.weight.unwrap_or_default(),
        character_set: header.character_set.unwrap_or_default(),
        version: header.version.unwrap_or_default(),
        notice: header.notice.unwrap_or_default(),
        encoding_scheme: header.encoding_scheme.unwrap_or_default(),
        italic_angle: header.italic_angle.unwrap_or(0.0),
        underline_position: header.underline_position.unwrap_or(0.0),
        underline_thickness: header.underline_thickness.unwrap_or(0.0),
        cap_height: header.cap_height,
        x_height: header.x_height,
        ascender: header.ascender,
        descender: header.descender,
        std_hw: header.std_hw,
        std_vw: header.std_vw,
        is_fixed_pitch: header.is_fixed_pitch.unwrap_or(false),
        font_bbox: header.font_bbox.ok_or(FontError::MissingRequiredKey {
            key: "FontBBox",
        })?,
        characters: header.characters,
        declared_glyphs: char_metrics_section.declared_count,
        declared_kern_pairs,
        char_metrics,
        kern_pairs,
    })
}

/// The text between a `Start...` line and its matching `End...` line
#[derive(Debug)]
struct Section<'a> {
    /// Byte offset of the line holding the start marker
    marker_offset: usize,

    /// The count given after the start marker, if any
    declared_count: Option<usize>,

    body: &'a str,
}

impl<'a> Section<'a> {
    /// Returns `Ok(None)` if no start marker is present. A start marker without
    /// a matching end marker is an error.
    fn find(
        raw: &'a str,
        start_markers: &[&str],
        end_marker: &'static str,
    ) -> FontResult<Option<Section<'a>>> {
        let mut lines = lines_with_offsets(raw);

        let (marker_offset, marker_line) = match lines.find(|(_, line)| {
            first_token(line).map_or(false, |token| start_markers.contains(&token))
        }) {
            Some(found) => found,
            None => return Ok(None),
        };

        let declared_count = marker_line
            .split_whitespace()
            .nth(1)
            .and_then(|count| count.parse().ok());

        let body_start = marker_offset + marker_line.len();

        let (body_end, _) = lines
            .find(|(_, line)| first_token(line) == Some(end_marker))
            .ok_or(FontError::MissingSection {
                section: end_marker,
            })?;

        Ok(Some(Section {
            marker_offset,
            declared_count,
            body: &raw[body_start..body_end],
        }))
    }
}

/// Splits on CR and LF, yielding each line along with the byte offset it starts at.
///
/// A CRLF pair yields an extra empty line, which every caller skips.
fn lines_with_offsets(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;

    raw.split(['\r', '\n']).map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line)
    })
}

/// Splits on CR and LF alike; blank lines are kept
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    lines_with_offsets(raw).map(|(_, line)| line)
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Splits `KEY value` at the first run of whitespace
fn split_key_value(s: &str) -> (&str, &str) {
    match s.trim().split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => (s.trim(), ""),
    }
}

fn parse_number(key: &str, value: &str) -> FontResult<f32> {
    fast_float::parse(value).map_err(|_| FontError::InvalidNumber {
        key: key.to_owned().into(),
        value: value.to_owned(),
    })
}

fn parse_integer<T: std::str::FromStr>(key: &str, value: &str) -> FontResult<T> {
    value.parse().map_err(|_| FontError::InvalidNumber {
        key: key.to_owned().into(),
        value: value.to_owned(),
    })
}

fn parse_bounding_box(key: &str, value: &str) -> FontResult<BoundingBox> {
    let mut coords = [0.0; 4];
    let mut parts = value.split_whitespace();

    for coord in &mut coords {
        let part = parts.next().ok_or_else(|| FontError::InvalidValue {
            key: key.to_owned().into(),
            value: value.to_owned(),
        })?;

        *coord = parse_number(key, part)?;
    }

    if parts.next().is_some() {
        return Err(FontError::InvalidValue {
            key: key.to_owned().into(),
            value: value.to_owned(),
        });
    }

    Ok(BoundingBox::from_array(coords))
}
