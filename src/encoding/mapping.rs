use std::collections::HashMap;

use crate::error::{FontError, FontResult};

use super::EncodedGlyph;

/// Parses a mapping file in the style of Adobe's `symbol.txt`/`zdingbat.txt`:
///
/// ```text
/// # comment
/// 0041	41	# A
/// ```
///
/// Columns are the Unicode scalar value and the encoded byte, both in hex,
/// followed by the glyph name after `#`. If a code point is listed twice the
/// later line wins.
pub(super) fn parse_mapping(text: &str) -> FontResult<HashMap<u32, EncodedGlyph>> {
    let mut mappings = HashMap::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (code_point, glyph) = parse_line(line).ok_or_else(|| FontError::InvalidMappingLine {
            line: line.to_owned(),
        })?;

        mappings.insert(code_point, glyph);
    }

    Ok(mappings)
}

fn parse_line(line: &str) -> Option<(u32, EncodedGlyph)> {
    let (columns, name) = line.split_once('#')?;
    let mut columns = columns.split_whitespace();

    let code_point = u32::from_str_radix(columns.next()?, 16).ok()?;
    let code = u8::from_str_radix(columns.next()?, 16).ok()?;

    if columns.next().is_some() {
        return None;
    }

    let name = name.trim();

    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }

    Some((
        code_point,
        EncodedGlyph {
            code,
            name: name.to_owned(),
        },
    ))
}
