//! Sprite loading
//!
//! Sprites are optional decoration. A missing or unreadable image is logged
//! once and the entity falls back to a solid placeholder shape; collisions only
//! ever look at entity geometry.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;

/// Every sprite the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Player,
    PlayerCollided,
    Asteroid,
    Enemy,
    LifePickup,
    ShieldPickup,
    Projectile,
    Ground,
    Background,
    FullHeart,
    EmptyHeart,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 11] = [
        SpriteKey::Player,
        SpriteKey::PlayerCollided,
        SpriteKey::Asteroid,
        SpriteKey::Enemy,
        SpriteKey::LifePickup,
        SpriteKey::ShieldPickup,
        SpriteKey::Projectile,
        SpriteKey::Ground,
        SpriteKey::Background,
        SpriteKey::FullHeart,
        SpriteKey::EmptyHeart,
    ];

    /// File name inside the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteKey::Player => "ufo.png",
            SpriteKey::PlayerCollided => "ufoCollision.png",
            SpriteKey::Asteroid => "asteroid2.png",
            SpriteKey::Enemy => "ship.png",
            SpriteKey::LifePickup => "heart.png",
            SpriteKey::ShieldPickup => "shield.png",
            SpriteKey::Projectile => "projectile.png",
            SpriteKey::Ground => "ground.png",
            SpriteKey::Background => "space.png",
            SpriteKey::FullHeart => "whole_heart.png",
            SpriteKey::EmptyHeart => "no_heart.png",
        }
    }
}

/// Asset load failure (always handled internally)
#[derive(Debug)]
pub enum AssetError {
    NotFound(PathBuf),
    Decode(image::ImageError),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "missing image {}", path.display()),
            Self::Decode(err) => write!(f, "cannot decode image: {err}"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err)
    }
}

/// A decoded sprite
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: String,
    pub pixels: RgbaImage,
}

impl Sprite {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Source of sprites; `None` means "use the placeholder"
pub trait AssetLoader {
    fn load(&mut self, name: &str) -> Option<Sprite>;
}

/// Loads PNGs from a directory
#[derive(Debug, Clone)]
pub struct DirAssetLoader {
    dir: PathBuf,
}

impl DirAssetLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn try_load(&self, name: &str) -> Result<Sprite, AssetError> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }
        let pixels = image::open(&path)?.to_rgba8();
        Ok(Sprite {
            name: name.to_string(),
            pixels,
        })
    }
}

impl AssetLoader for DirAssetLoader {
    fn load(&mut self, name: &str) -> Option<Sprite> {
        match self.try_load(name) {
            Ok(sprite) => {
                log::debug!("Loaded sprite {} ({}x{})", name, sprite.width(), sprite.height());
                Some(sprite)
            }
            Err(err) => {
                log::warn!("{err}; using placeholder");
                None
            }
        }
    }
}

/// Loader that never finds anything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLoader for NoAssets {
    fn load(&mut self, _name: &str) -> Option<Sprite> {
        None
    }
}

/// Loaded sprites keyed by entity type
#[derive(Debug, Default)]
pub struct Assets {
    sprites: HashMap<SpriteKey, Sprite>,
}

impl Assets {
    /// Try every sprite once; failures leave gaps that draw as placeholders
    pub fn load(loader: &mut dyn AssetLoader) -> Self {
        let mut sprites = HashMap::new();
        for key in SpriteKey::ALL {
            if let Some(sprite) = loader.load(key.file_name()) {
                sprites.insert(key, sprite);
            }
        }
        log::info!(
            "Sprites loaded: {}/{}",
            sprites.len(),
            SpriteKey::ALL.len()
        );
        Self { sprites }
    }

    pub fn sprite(&self, key: SpriteKey) -> Option<&Sprite> {
        self.sprites.get(&key)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
