//! Metrics and encodings for the 14 standard PostScript fonts.
//!
//! The AFM files for each font ship compressed inside the library and are only
//! inflated and parsed when a [`StandardFonts`] cache is first asked for them.

pub use crate::{
    afm::{CharacterMetric, FontMetrics, KernPair, Ligature},
    cache::StandardFonts,
    encoding::{EncodedGlyph, EncodingName, EncodingTable},
    error::{FontError, FontResult},
    font::{Font, StandardFont},
    geometry::{BoundingBox, Point},
};

pub mod afm;
pub mod codec;
pub mod encoding;
pub mod geometry;

mod cache;
mod error;
mod font;
mod macros;
