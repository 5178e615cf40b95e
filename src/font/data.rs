use super::StandardFont;

/// Deflated, base64-encoded AFM files, written to `OUT_DIR` by the build script
macro_rules! compressed_afm {
    ($file:literal) => {
        include_str!(concat!(env!("OUT_DIR"), "/", $file, ".afm.b64"))
    };
}

impl StandardFont {
    pub(crate) fn compressed_metrics(self) -> &'static str {
        match self {
            StandardFont::Courier => compressed_afm!("Courier"),
            StandardFont::CourierBold => compressed_afm!("Courier-Bold"),
            StandardFont::CourierOblique => compressed_afm!("Courier-Oblique"),
            StandardFont::CourierBoldOblique => compressed_afm!("Courier-BoldOblique"),

            StandardFont::Helvetica => compressed_afm!("Helvetica"),
            StandardFont::HelveticaBold => compressed_afm!("Helvetica-Bold"),
            StandardFont::HelveticaOblique => compressed_afm!("Helvetica-Oblique"),
            StandardFont::HelveticaBoldOblique => compressed_afm!("Helvetica-BoldOblique"),

            StandardFont::TimesRoman => compressed_afm!("Times-Roman"),
            StandardFont::TimesBold => compressed_afm!("Times-Bold"),
            StandardFont::TimesItalic => compressed_afm!("Times-Italic"),
            StandardFont::TimesBoldItalic => compressed_afm!("Times-BoldItalic"),

            StandardFont::Symbol => compressed_afm!("Symbol"),
            StandardFont::ZapfDingbats => compressed_afm!("ZapfDingbats"),
        }
    }
}
