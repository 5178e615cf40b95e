use anyhow::Context;
use standard_fonts::{StandardFont, StandardFonts};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let font_name = match args.next() {
        Some(arg) if arg == "--list" => {
            for font in StandardFont::ALL {
                println!("{}", font);
            }

            return Ok(());
        }
        Some(name) => name,
        None => anyhow::bail!("usage: afm-metrics <font name> [text] | --list"),
    };

    let fonts = StandardFonts::new();

    let font = fonts
        .load_font(&font_name)
        .with_context(|| format!("loading metrics for {:?}", font_name))?;

    let metrics = font.metrics();

    println!("FontName        {}", metrics.font_name);
    println!("FullName        {}", metrics.full_name);
    println!("Weight          {}", metrics.weight);
    println!("ItalicAngle     {}", metrics.italic_angle);
    println!("IsFixedPitch    {}", metrics.is_fixed_pitch);
    println!("FontBBox        {:?}", metrics.font_bbox.to_array());
    println!("Glyphs          {}", metrics.char_metrics.len());
    println!("KernPairs       {}", metrics.kern_pairs.len());

    let text = match args.next() {
        Some(text) => text,
        None => return Ok(()),
    };

    // the font was found by name, so it is one of the standard fonts
    let encoding_name = StandardFont::from_name(&font_name)
        .map(StandardFont::default_encoding)
        .context("not a standard font")?;
    let encoding = fonts.encoding(encoding_name)?;

    let glyphs = encoding
        .encode_str(&text)
        .with_context(|| format!("encoding {:?} as {}", text, encoding_name))?;

    println!();

    for glyph in &glyphs {
        let width = match font.width_of_glyph(&glyph.name) {
            Some(width) => width.to_string(),
            None => "-".to_owned(),
        };

        println!("{:#04x}  {:<16} {:>6}", glyph.code, glyph.name, width);
    }

    let names = glyphs
        .iter()
        .map(|glyph| glyph.name.as_str())
        .collect::<Vec<&str>>();

    println!();
    println!("width at 1000   {}", font.width_of_glyphs_at_size(&names, 1000.0));

    Ok(())
}
