use crate::{
    error::{FontError, FontResult},
    geometry::BoundingBox,
};

use super::{parse_bounding_box, parse_integer, parse_number, split_key_value, Section};

/// The static metrics of a single glyph
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterMetric {
    /// The glyph's code in the font's built-in encoding, or -1 if it is unencoded
    pub default_code: i32,

    /// Horizontal advance
    pub width: f32,

    pub name: String,

    pub bounding_box: BoundingBox,

    /// Ligature rules in the order they were declared
    pub ligatures: Vec<Ligature>,
}

/// `L successor ligature`: when this glyph is followed by `successor`, the pair
/// may be replaced by `ligature`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ligature {
    pub successor: String,
    pub ligature: String,
}

pub(super) fn parse_char_metrics(section: &Section) -> FontResult<Vec<CharacterMetric>> {
    let metrics = section
        .body
        .split(|c: char| c == '\r' || c == '\n' || c == '\t')
        .filter(|line| !line.trim().is_empty())
        .map(parse_char_metric)
        .collect::<FontResult<Vec<CharacterMetric>>>()?;

    if let Some(declared) = section.declared_count {
        if declared != metrics.len() {
            log::debug!(
                "StartCharMetrics declares {} glyphs, found {}",
                declared,
                metrics.len()
            );
        }
    }

    Ok(metrics)
}

/// Parses one `C 65 ; WX 722 ; N A ; B 15 0 706 674 ;` line.
///
/// Only the first `C`, `WX`, `N` and `B` fragment is used; every `L` fragment is kept.
fn parse_char_metric(line: &str) -> FontResult<CharacterMetric> {
    let mut default_code = None;
    let mut width = None;
    let mut name = None;
    let mut bounding_box = None;
    let mut ligatures = Vec::new();

    for fragment in line.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        let (key, value) = split_key_value(fragment);

        match key {
            "C" => {
                if default_code.is_none() {
                    default_code = Some(parse_integer(key, value)?);
                }
            }
            "WX" => {
                if width.is_none() {
                    width = Some(parse_number(key, value)?);
                }
            }
            "N" => {
                if name.is_none() {
                    name = Some(value.to_owned());
                }
            }
            "B" => {
                if bounding_box.is_none() {
                    bounding_box = Some(parse_bounding_box(key, value)?);
                }
            }
            "L" => ligatures.push(parse_ligature(value)?),
            _ => {
                return Err(FontError::UnrecognizedMetricKey {
                    key: key.to_owned(),
                })
            }
        }
    }

    Ok(CharacterMetric {
        default_code: default_code.unwrap_or(-1),
        width: width.ok_or(FontError::MissingMetricField { field: "WX" })?,
        name: name
            .filter(|name| !name.is_empty())
            .ok_or(FontError::MissingMetricField { field: "N" })?,
        bounding_box: bounding_box.unwrap_or_else(BoundingBox::empty),
        ligatures,
    })
}

fn parse_ligature(value: &str) -> FontResult<Ligature> {
    let mut names = value.split_whitespace();

    match (names.next(), names.next(), names.next()) {
        (Some(successor), Some(ligature), None) => Ok(Ligature {
            successor: successor.to_owned(),
            ligature: ligature.to_owned(),
        }),
        _ => Err(FontError::InvalidValue {
            key: "L".into(),
            value: value.to_owned(),
        }),
    }
}
