//! Image items and the sources an embedding page can build a collection from.

use crate::errors::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// One displayable image with optional height metadata (meters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: String,
    /// Fully resolved, directly loadable locator.
    pub url: String,
    #[serde(
        default,
        rename = "displayName",
        alias = "name",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(default, alias = "hauteur", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl ImageItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            display_name: None,
            height: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Height usable for layout: non-finite values count as missing.
    pub fn known_height(&self) -> Option<f32> {
        self.height.filter(|h| h.is_finite())
    }

    /// Caption for the item at `index`, falling back to its 1-based position.
    pub fn caption(&self, index: usize) -> String {
        match &self.display_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Image {}", index + 1),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    id: Option<String>,
    url: String,
    #[serde(default, rename = "displayName", alias = "name")]
    display_name: Option<String>,
    #[serde(default, alias = "hauteur")]
    height: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    title: Option<String>,
    items: Vec<ManifestEntry>,
}

/// An ordered, validated set of items. Order drives navigation and the
/// even-spacing layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection {
    pub title: Option<String>,
    items: Vec<ImageItem>,
}

impl ItemCollection {
    /// Build a collection, rejecting empty urls and duplicate ids.
    pub fn new(title: Option<String>, items: Vec<ImageItem>) -> Result<Self> {
        validate(&items)?;
        Ok(Self { title, items })
    }

    /// Parse a JSON manifest. Entries without an id get a random one.
    pub fn from_manifest_str(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        let items = manifest
            .items
            .into_iter()
            .map(|entry| ImageItem {
                id: entry
                    .id
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                url: entry.url,
                display_name: entry.display_name,
                height: entry.height,
            })
            .collect();
        Self::new(manifest.title, items)
    }

    pub fn load_manifest(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ViewerError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_manifest_str(&content).map_err(|e| match e {
            ViewerError::JsonError { source } => ViewerError::InvalidManifest {
                path: path.to_path_buf(),
                message: source.to_string(),
            },
            other => other,
        })
    }

    /// Collect the supported images directly inside `dir`, natural-sorted by
    /// file name so `2.jpg` comes before `10.jpg`.
    pub fn from_folder(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ViewerError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ViewerError::FolderScan {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && is_supported_image(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort_by(|a, b| {
            let a_name = file_name_lower(a);
            let b_name = file_name_lower(b);
            natord::compare(&a_name, &b_name)
        });

        let items = files
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ImageItem::new(name.clone(), format!("file://{}", path.display())).with_name(name)
            })
            .collect();

        let title = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Self::new(title, items)
    }

    /// A directory is scanned for images; anything else is read as a manifest.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::from_folder(path)
        } else {
            Self::load_manifest(path)
        }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ImageItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate(items: &[ImageItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if item.url.trim().is_empty() {
            return Err(ViewerError::InvalidItem {
                position,
                message: "url is empty".to_string(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ViewerError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_aliases_and_generated_ids() {
        let json = r#"{
            "title": "Pylône A12",
            "items": [
                { "id": "a", "url": "file:///a.jpg", "name": "Ville01", "hauteur": 58 },
                { "url": "file:///b.jpg", "displayName": "Ville02" },
                { "id": "c", "url": "file:///c.jpg", "height": 12.5 }
            ]
        }"#;

        let collection = ItemCollection::from_manifest_str(json).unwrap();
        assert_eq!(collection.title.as_deref(), Some("Pylône A12"));
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.items()[0].height, Some(58.0));
        assert_eq!(collection.items()[0].display_name.as_deref(), Some("Ville01"));
        assert!(!collection.items()[1].id.is_empty());
        assert_eq!(collection.items()[1].height, None);
        assert_eq!(collection.items()[2].height, Some(12.5));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![ImageItem::new("x", "u1"), ImageItem::new("x", "u2")];
        let err = ItemCollection::new(None, items).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_empty_url_rejected() {
        let items = vec![ImageItem::new("x", "u1"), ImageItem::new("y", "  ")];
        match ItemCollection::new(None, items) {
            Err(ViewerError::InvalidItem { position, .. }) => assert_eq!(position, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_manifest_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ItemCollection::load_manifest(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MANIFEST");

        let missing = dir.path().join("missing.json");
        let err = ItemCollection::load_manifest(&missing).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_folder_scan_natural_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.jpg", "2.JPG", "1.png", "notes.txt", "3.webp"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let collection = ItemCollection::from_folder(dir.path()).unwrap();
        let ids: Vec<&str> = collection.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1.png", "2.JPG", "3.webp", "10.jpg"]);
        assert!(collection.items()[0].url.starts_with("file://"));
        assert!(collection.items().iter().all(|i| i.height.is_none()));
    }

    #[test]
    fn test_caption_fallback() {
        let item = ImageItem::new("a", "u");
        assert_eq!(item.caption(0), "Image 1");
        assert_eq!(item.with_name("Mât").caption(0), "Mât");
    }
}
