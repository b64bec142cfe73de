//! Saved site images.
//!
//! The admin screens collect references from their upload widgets and only
//! persist them when the user presses Save.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::image::ImageReference;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<ImageReference>,
    /// Keyed by category slug
    #[serde(default)]
    pub categories: BTreeMap<String, ImageReference>,
}

impl SiteImages {
    /// Load from disk; a missing file yields the empty default
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved site images yet");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SiteError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(
            path = %path.display(),
            categories = self.categories.len(),
            hero = self.hero.is_some(),
            "site images saved"
        );
        Ok(())
    }

    pub fn category(&self, slug: &str) -> Option<&ImageReference> {
        self.categories.get(slug)
    }

    pub fn set_category(&mut self, slug: impl Into<String>, reference: ImageReference) {
        self.categories.insert(slug.into(), reference);
    }

    /// References that would be lost if this machine went away
    pub fn inline_count(&self) -> usize {
        self.hero
            .iter()
            .chain(self.categories.values())
            .filter(|r| r.is_inline())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let images = SiteImages::load(temp.path().join("nope.json")).unwrap();
        assert_eq!(images, SiteImages::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("site-images.json");

        let mut images = SiteImages {
            hero: Some(ImageReference::Url("https://cdn.example/hero.png".to_string())),
            ..Default::default()
        };
        images.set_category("shoes", ImageReference::DataUri("data:image/png;base64,AQID".to_string()));
        images.save(&path).unwrap();

        let loaded = SiteImages::load(&path).unwrap();
        assert_eq!(loaded, images);
        assert_eq!(loaded.inline_count(), 1);
        assert!(loaded.category("shoes").is_some());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site-images.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(SiteImages::load(&path), Err(SiteError::Serialization(_))));
    }
}
