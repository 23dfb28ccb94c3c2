use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use thiserror::Error;

use crate::asset_keys::{validate_asset_key, AssetKeyError};

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("invalid asset key '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: AssetKeyError,
    },
    #[error("failed to open image at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image at {path} has zero width or height")]
    EmptyImage { path: PathBuf },
}

/// A decoded RGBA image, typically a sprite sheet. Shared between sprite
/// instances via `Arc`; dropping the last handle releases the pixel data.
#[derive(Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Load `assets/<key>.png` under the resolved application root. Missing
    /// or undecodable assets surface here, before any window is opened.
    pub fn load(assets_dir: &Path, key: &str) -> Result<Arc<Self>, TextureError> {
        validate_asset_key(key).map_err(|source| TextureError::InvalidKey {
            key: key.to_string(),
            source,
        })?;
        let path = assets_dir.join(format!("{key}.png"));
        let reader = ImageReader::open(&path).map_err(|source| TextureError::Open {
            path: path.clone(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| TextureError::Decode {
            path: path.clone(),
            source,
        })?;
        let image = decoded.to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(TextureError::EmptyImage { path });
        }
        Ok(Arc::new(Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        }))
    }

    /// Build a texture from raw RGBA bytes. `rgba` must hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Arc<Self> {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Arc::new(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
