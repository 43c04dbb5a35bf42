//! Sprite assets
//!
//! The game draws a fixed set of named images. All of them must resolve
//! before the first tick; any failure aborts startup with one aggregate
//! error listing every missing sprite. After startup a missing entry only
//! turns its draw call into a no-op.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named image resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpriteKey {
    Player,
    Hazard,
    Coffee,
    Credit,
    Ground,
    Background,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 6] = [
        SpriteKey::Player,
        SpriteKey::Hazard,
        SpriteKey::Coffee,
        SpriteKey::Credit,
        SpriteKey::Ground,
        SpriteKey::Background,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKey::Player => "player.png",
            SpriteKey::Hazard => "deadline.png",
            SpriteKey::Coffee => "coffee.png",
            SpriteKey::Credit => "credit.png",
            SpriteKey::Ground => "ground.png",
            SpriteKey::Background => "background.png",
        }
    }
}

/// A decoded RGBA8 image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    pub key: SpriteKey,
    pub reason: String,
}

impl fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {}", self.key.file_name(), self.key, self.reason)
    }
}

fn describe(failures: &[AssetFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Startup asset gate failed
#[derive(Error, Debug)]
#[error("failed to load {} asset(s): {}", .failures.len(), describe(.failures))]
pub struct AssetLoadError {
    pub failures: Vec<AssetFailure>,
}

/// Resolves one named sprite
pub trait AssetLoader {
    fn load(&self, key: SpriteKey) -> Result<ImageAsset, String>;
}

/// Loads PNG files named by [`SpriteKey::file_name`] from a directory
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: SpriteKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, key: SpriteKey) -> Result<ImageAsset, String> {
        let path = self.path_for(key);
        let img = image::open(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(ImageAsset {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}

/// Every sprite that resolved
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    images: BTreeMap<SpriteKey, ImageAsset>,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SpriteKey, image: ImageAsset) {
        self.images.insert(key, image);
    }

    pub fn get(&self, key: SpriteKey) -> Option<&ImageAsset> {
        self.images.get(&key)
    }

    pub fn contains(&self, key: SpriteKey) -> bool {
        self.images.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Resolve every sprite, failing if any one of them fails
pub fn load_all(loader: &dyn AssetLoader) -> Result<AssetSet, AssetLoadError> {
    let mut set = AssetSet::new();
    let mut failures = Vec::new();

    for key in SpriteKey::ALL {
        match loader.load(key) {
            Ok(image) => {
                log::debug!("Loaded {:?} ({}x{})", key, image.width, image.height);
                set.insert(key, image);
            }
            Err(reason) => failures.push(AssetFailure { key, reason }),
        }
    }

    if !failures.is_empty() {
        return Err(AssetLoadError { failures });
    }
    log::info!("Loaded {} sprites", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves a 1x1 image for every key except the listed ones
    struct FakeLoader {
        missing: Vec<SpriteKey>,
    }

    impl AssetLoader for FakeLoader {
        fn load(&self, key: SpriteKey) -> Result<ImageAsset, String> {
            if self.missing.contains(&key) {
                return Err("not found".into());
            }
            Ok(ImageAsset {
                width: 1,
                height: 1,
                rgba: vec![255; 4],
            })
        }
    }

    #[test]
    fn test_load_all_succeeds() {
        let set = load_all(&FakeLoader { missing: vec![] }).unwrap();
        assert_eq!(set.len(), SpriteKey::ALL.len());
        assert!(SpriteKey::ALL.iter().all(|&k| set.contains(k)));
    }

    #[test]
    fn test_failures_are_aggregated() {
        let loader = FakeLoader {
            missing: vec![SpriteKey::Coffee, SpriteKey::Background],
        };
        let err = load_all(&loader).unwrap_err();
        let keys: Vec<_> = err.failures.iter().map(|f| f.key).collect();
        assert_eq!(keys, [SpriteKey::Coffee, SpriteKey::Background]);

        let msg = err.to_string();
        assert!(msg.starts_with("failed to load 2 asset(s)"), "{msg}");
        assert!(msg.contains("coffee.png"));
        assert!(msg.contains("background.png"));
    }

    #[test]
    fn test_fs_loader_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        for key in SpriteKey::ALL {
            image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
                .save(dir.path().join(key.file_name()))
                .unwrap();
        }

        let set = load_all(&FsAssetLoader::new(dir.path())).unwrap();
        let player = set.get(SpriteKey::Player).unwrap();
        assert_eq!((player.width, player.height), (4, 2));
        assert_eq!(player.rgba.len(), 4 * 2 * 4);
        assert_eq!(&player.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_fs_loader_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(1, 1)
            .save(dir.path().join(SpriteKey::Ground.file_name()))
            .unwrap();

        let err = load_all(&FsAssetLoader::new(dir.path())).unwrap_err();
        assert_eq!(err.failures.len(), SpriteKey::ALL.len() - 1);
        assert!(err.failures.iter().all(|f| f.key != SpriteKey::Ground));
    }
}
