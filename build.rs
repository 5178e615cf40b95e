use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

// the library decodes the tokens with the same module
#[allow(dead_code)]
#[path = "src/codec.rs"]
mod codec;
#[allow(dead_code)]
#[path = "src/error.rs"]
mod error;

/// Deflates and base64-encodes every dataset under `data/` into `OUT_DIR`, so the
/// library can embed the tokens with `include_str!` and inflate them on first use.
fn main() -> anyhow::Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    println!("cargo:rerun-if-changed=data");

    compress_dir(&manifest_dir.join("data/afm"), &out_dir, "afm")?;
    compress_dir(&manifest_dir.join("data/encodings"), &out_dir, "txt")?;

    Ok(())
}

fn compress_dir(dir: &Path, out_dir: &Path, extension: &str) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let raw = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .context("dataset file name is not utf-8")?;

        fs::write(
            out_dir.join(format!("{file_name}.b64")),
            codec::compress(&raw)?,
        )?;
    }

    Ok(())
}
