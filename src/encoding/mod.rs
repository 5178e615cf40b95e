use std::collections::HashMap;

use crate::{
    codec,
    error::{FontError, FontResult},
    name_enum,
};

mod mapping;

name_enum!(
    /// The single-byte encodings used to show text in the standard fonts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum EncodingName {
        /// The built-in encoding of the Symbol font
        Symbol = "Symbol",

        /// The built-in encoding of the ZapfDingbats font
        ZapfDingbats = "ZapfDingbats",

        /// Windows code page 1252, used for every non-symbolic standard font
        WinAnsi = "WinAnsi",
    }
);

impl EncodingName {
    fn compressed_mapping(self) -> &'static str {
        match self {
            EncodingName::Symbol => {
                include_str!(concat!(env!("OUT_DIR"), "/symbol.txt.b64"))
            }
            EncodingName::ZapfDingbats => {
                include_str!(concat!(env!("OUT_DIR"), "/zapfdingbats.txt.b64"))
            }
            EncodingName::WinAnsi => include_str!(concat!(env!("OUT_DIR"), "/win1252.txt.b64")),
        }
    }
}

/// A character code in the target encoding along with the glyph it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGlyph {
    pub code: u8,
    pub name: String,
}

/// Maps Unicode scalar values to an encoding's codes and glyph names
#[derive(Debug, PartialEq)]
pub struct EncodingTable {
    encoding: EncodingName,
    mappings: HashMap<u32, EncodedGlyph>,
}

impl EncodingTable {
    pub(crate) fn load(encoding: EncodingName) -> FontResult<Self> {
        let text = codec::decompress(encoding.compressed_mapping())?;

        Ok(Self::new(encoding, mapping::parse_mapping(&text)?))
    }

    pub fn new(encoding: EncodingName, mappings: HashMap<u32, EncodedGlyph>) -> Self {
        Self { encoding, mappings }
    }

    pub fn name(&self) -> EncodingName {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &EncodedGlyph)> {
        self.mappings.iter().map(|(&code_point, glyph)| (code_point, glyph))
    }

    pub fn can_encode(&self, code_point: u32) -> bool {
        self.mappings.contains_key(&code_point)
    }

    pub fn encode(&self, code_point: u32) -> FontResult<&EncodedGlyph> {
        self.mappings
            .get(&code_point)
            .ok_or(FontError::UnsupportedCodePoint {
                code_point,
                encoding: self.encoding.name(),
            })
    }

    /// Encodes every char of `text`, failing on the first one the encoding lacks
    pub fn encode_str(&self, text: &str) -> FontResult<Vec<&EncodedGlyph>> {
        text.chars().map(|c| self.encode(u32::from(c))).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table() -> EncodingTable {
        let mut mappings = HashMap::new();
        mappings.insert(
            0x41,
            EncodedGlyph {
                code: 0x41,
                name: "A".to_owned(),
            },
        );
        mappings.insert(
            0x20AC,
            EncodedGlyph {
                code: 0x80,
                name: "Euro".to_owned(),
            },
        );

        EncodingTable::new(EncodingName::WinAnsi, mappings)
    }

    #[test]
    fn encode_and_can_encode_agree() {
        let table = table();

        for code_point in [0x41, 0x42, 0x20AC, 0x81, 0x1F600] {
            assert_eq!(table.can_encode(code_point), table.encode(code_point).is_ok());
        }
    }

    #[test]
    fn unsupported_code_point_names_the_encoding() {
        match table().encode(0x81) {
            Err(FontError::UnsupportedCodePoint {
                code_point,
                encoding,
            }) => {
                assert_eq!(code_point, 0x81);
                assert_eq!(encoding, "WinAnsi");
            }
            other => panic!("expected UnsupportedCodePoint, got {:?}", other),
        }
    }

    #[test]
    fn encode_str() {
        let table = table();

        let codes = table
            .encode_str("A€A")
            .unwrap()
            .iter()
            .map(|glyph| glyph.code)
            .collect::<Vec<u8>>();

        assert_eq!(codes, [0x41, 0x80, 0x41]);
        assert!(matches!(
            table.encode_str("AB"),
            Err(FontError::UnsupportedCodePoint {
                code_point: 0x42,
                ..
            })
        ));
    }

    #[test]
    fn names_round_trip() {
        for &encoding in EncodingName::ALL {
            assert_eq!(EncodingName::from_name(encoding.name()), Some(encoding));
        }

        assert_eq!(EncodingName::from_name("MacRoman"), None);
    }
}
