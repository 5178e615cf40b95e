use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use once_cell::sync::OnceCell;

use crate::{
    encoding::{EncodingName, EncodingTable},
    error::{FontError, FontResult},
    font::{Font, StandardFont},
};

/// Lazily decoded metrics for the standard fonts and their encodings.
///
/// Each font and encoding is decompressed and parsed at most once per cache, on
/// first request. Threads racing on a first request wait for the one doing the
/// work and then share its result. Failures are not cached.
///
/// Owners typically create one of these at startup and hand out references.
#[derive(Debug, Default)]
pub struct StandardFonts {
    fonts: [OnceCell<Arc<Font>>; StandardFont::ALL.len()],
    encodings: [OnceCell<Arc<EncodingTable>>; EncodingName::ALL.len()],
    fonts_parsed: AtomicUsize,
    encodings_parsed: AtomicUsize,
}

impl StandardFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_font(&self, name: &str) -> FontResult<Arc<Font>> {
        let font = StandardFont::from_name(name).ok_or_else(|| FontError::UnknownFont {
            name: name.to_owned(),
        })?;

        self.font(font)
    }

    pub fn font(&self, font: StandardFont) -> FontResult<Arc<Font>> {
        self.fonts[font as usize]
            .get_or_try_init(|| {
                log::debug!("parsing metrics for {}", font);
                self.fonts_parsed.fetch_add(1, Ordering::SeqCst);

                Font::load(font).map(Arc::new)
            })
            .map(Arc::clone)
    }

    pub fn resolve_encoding(&self, name: &str) -> FontResult<Arc<EncodingTable>> {
        let encoding = EncodingName::from_name(name).ok_or_else(|| FontError::UnknownEncoding {
            name: name.to_owned(),
        })?;

        self.encoding(encoding)
    }

    pub fn encoding(&self, encoding: EncodingName) -> FontResult<Arc<EncodingTable>> {
        self.encodings[encoding as usize]
            .get_or_try_init(|| {
                log::debug!("parsing {} encoding", encoding);
                self.encodings_parsed.fetch_add(1, Ordering::SeqCst);

                EncodingTable::load(encoding).map(Arc::new)
            })
            .map(Arc::clone)
    }

    /// How many times font metrics have been parsed by this cache
    pub fn fonts_parsed(&self) -> usize {
        self.fonts_parsed.load(Ordering::SeqCst)
    }

    /// How many times an encoding table has been parsed by this cache
    pub fn encodings_parsed(&self) -> usize {
        self.encodings_parsed.load(Ordering::SeqCst)
    }
}
