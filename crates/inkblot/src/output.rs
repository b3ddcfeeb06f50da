//! PNG encoding and challenge records printed by the CLI.

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage};
use inkblot::Captcha;
use serde::Serialize;
use std::path::Path;

/// One line of CLI output
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeRecord {
    /// Written PNG file
    pub file: String,
    /// Expected answer
    pub answer: String,
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...` when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .context("PNG encode failed")?;
    Ok(png)
}

pub fn data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Write `captcha` as `captcha_<millis>_<index>.png` inside `dir`
pub fn save(dir: &Path, index: usize, captcha: &Captcha, inline: bool) -> Result<ChallengeRecord> {
    let png = encode_png(&captcha.image)?;
    let filename = format!(
        "captcha_{}_{:04}.png",
        chrono::Utc::now().timestamp_millis(),
        index
    );
    let path = dir.join(filename);

    std::fs::write(&path, &png).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = ?path, bytes = png.len(), "Wrote CAPTCHA image");

    let (width, height) = captcha.image.dimensions();
    Ok(ChallengeRecord {
        file: path.display().to_string(),
        answer: captcha.answer.clone(),
        width,
        height,
        image_data: inline.then(|| data_uri(&png)),
    })
}
