//! Process-wide collection of registered typefaces.

use std::path::{Path, PathBuf};

use inkblot_common::CaptchaError;
use rand::Rng;

use super::{FontSource, Typeface};

/// Registered typefaces.
///
/// Lifecycle: empty → populated (`&mut self`) → shared read-only (`&self`).
#[derive(Default)]
pub struct FontRegistry {
    faces: Vec<Box<dyn Typeface>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every matching file in `dir`
    pub fn from_dir(dir: impl AsRef<Path>, suffix: &str) -> Result<Self, CaptchaError> {
        let mut registry = Self::new();
        registry.read_dir(dir, suffix)?;
        Ok(registry)
    }

    /// Register the files directly inside `dir` whose name ends with
    /// `suffix` (case-insensitive). Subdirectories are skipped, not walked.
    ///
    /// Files are only read when first drawn with. Returns how many were added.
    pub fn read_dir(&mut self, dir: impl AsRef<Path>, suffix: &str) -> Result<usize, CaptchaError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| CaptchaError::FontLoad(format!("{}: {e}", dir.display())))?;

        let suffix = suffix.to_uppercase();
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| CaptchaError::FontLoad(format!("{}: {e}", dir.display())))?;
            let path = entry.path();
            if path.is_dir() {
                tracing::trace!(path = ?path, "Skipping directory");
                continue;
            }
            if entry.file_name().to_string_lossy().to_uppercase().ends_with(&suffix) {
                paths.push(path);
            } else {
                tracing::debug!(path = ?path, "Skipping file without font suffix");
            }
        }

        paths.sort();
        let added = paths.len();
        for path in paths {
            self.register_path(path);
        }

        if added == 0 {
            tracing::warn!(dir = %dir.display(), suffix = %suffix, "No fonts found");
        } else {
            tracing::info!(dir = %dir.display(), count = added, "Registered fonts");
        }
        Ok(added)
    }

    /// Register one font file
    pub fn register_path(&mut self, path: impl Into<PathBuf>) {
        self.faces.push(Box::new(FontSource::from_path(path)));
    }

    /// Register any typeface, e.g. a [`FontSource`] built from embedded bytes
    pub fn register(&mut self, face: impl Typeface + 'static) {
        self.faces.push(Box::new(face));
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.faces.iter().map(|face| face.name())
    }

    /// Pick a registered typeface uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Result<&dyn Typeface, CaptchaError> {
        if self.faces.is_empty() {
            return Err(CaptchaError::FontLoad("no fonts registered".to_string()));
        }
        let index = rng.random_range(0..self.faces.len());
        Ok(self.faces[index].as_ref())
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::BlockFace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_read_dir_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.ttf", "a.TTF", "c.otf", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"font").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.ttf")).unwrap();
        std::fs::write(dir.path().join("nested.ttf").join("d.ttf"), b"font").unwrap();

        let registry = FontRegistry::from_dir(dir.path(), ".ttf").unwrap();
        assert_eq!(registry.len(), 2);

        let names: Vec<&str> = registry.names().collect();
        assert!(names[0].ends_with("a.TTF"));
        assert!(names[1].ends_with("b.ttf"));
    }

    #[test]
    fn test_read_dir_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.otf"), b"font").unwrap();

        let mut registry = FontRegistry::new();
        registry.register(BlockFace);
        assert_eq!(registry.read_dir(dir.path(), ".OTF").unwrap(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unreadable_dir() {
        let err = FontRegistry::from_dir("/nonexistent/inkblot/fonts", ".ttf").unwrap_err();
        assert!(matches!(err, CaptchaError::FontLoad(_)));
    }

    #[test]
    fn test_choose_from_empty_registry() {
        let registry = FontRegistry::new();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(registry.is_empty());
        assert!(matches!(registry.choose(&mut rng), Err(CaptchaError::FontLoad(_))));
    }

    #[test]
    fn test_choose_returns_registered_face() {
        let mut registry = FontRegistry::new();
        registry.register(BlockFace);
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(registry.choose(&mut rng).unwrap().name(), "block");
    }
}
