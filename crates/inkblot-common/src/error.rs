//! Common error types for Inkblot components.

use thiserror::Error;

/// Errors surfaced by CAPTCHA generation.
///
/// Nothing here is retried internally: every failure aborts the call that
/// produced it and no partial image is returned.
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Font directory unreadable, font file unreadable or unparseable,
    /// or no font registered at all
    #[error("Font load error: {0}")]
    FontLoad(String),

    /// Glyph rasterization failed while drawing noise or answer text
    #[error("Glyph render error: {0}")]
    GlyphRender(String),

    /// Generation parameters that cannot produce an image
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CaptchaError {
    /// Returns true for configuration/IO failures, false for rendering failures
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::FontLoad(_) | Self::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        assert!(CaptchaError::FontLoad("missing".into()).is_config_error());
        assert!(CaptchaError::InvalidConfig("width".into()).is_config_error());
        assert!(!CaptchaError::GlyphRender("glyph".into()).is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = CaptchaError::FontLoad("fonts/a.ttf: not found".into());
        assert_eq!(err.to_string(), "Font load error: fonts/a.ttf: not found");
    }
}
