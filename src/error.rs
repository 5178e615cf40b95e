use std::{borrow::Cow, fmt, io, string::FromUtf8Error};

pub type FontResult<T> = Result<T, FontError>;

#[derive(Debug)]
pub enum FontError {
    /// The requested font is not one of the 14 standard fonts
    UnknownFont {
        name: String,
    },

    /// The requested encoding is not one of Symbol, ZapfDingbats or WinAnsi
    UnknownEncoding {
        name: String,
    },

    /// The encoding has no glyph for this code point
    UnsupportedCodePoint {
        code_point: u32,
        encoding: &'static str,
    },

    /// A `CharMetrics` line contained a key other than `C`, `WX`, `N`, `B` or `L`
    UnrecognizedMetricKey {
        key: String,
    },

    /// A `Start<section>`/`End<section>` marker pair could not be found
    MissingSection {
        section: &'static str,
    },

    MissingRequiredKey {
        key: &'static str,
    },

    /// A `CharMetrics` line had no `N` or no `WX` fragment
    MissingMetricField {
        field: &'static str,
    },

    InvalidNumber {
        key: Cow<'static, str>,
        value: String,
    },

    InvalidValue {
        key: Cow<'static, str>,
        value: String,
    },

    InvalidMappingLine {
        line: String,
    },

    Decompress(io::Error),
    Base64(base64::DecodeError),
    Utf8(FromUtf8Error),
}

impl From<io::Error> for FontError {
    fn from(err: io::Error) -> Self {
        Self::Decompress(err)
    }
}

impl From<base64::DecodeError> for FontError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err)
    }
}

impl From<FromUtf8Error> for FontError {
    fn from(err: FromUtf8Error) -> Self {
        Self::Utf8(err)
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFont { name } => write!(f, "unknown standard font {:?}", name),
            Self::UnsupportedCodePoint {
                code_point,
                encoding,
            } => match char::from_u32(*code_point) {
                Some(c) => write!(f, "{} cannot encode {:?} (U+{:04X})", encoding, c, code_point),
                None => write!(f, "{} cannot encode U+{:04X}", encoding, code_point),
            },
            Self::UnrecognizedMetricKey { key } => {
                write!(f, "unrecognized character metric key {:?}", key)
            }
            _ => write!(f, "{:#?}", self),
        }
    }
}

impl std::error::Error for FontError {}
