//! Bouncer sprite loading
//!
//! Load failure is a normal outcome here, not an error path: setup consumes
//! `SpriteLoad::Unavailable` and starts with no bouncers.

use std::path::{Path, PathBuf};

use image::GenericImageView;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Decoded sprite metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Outcome of loading the bouncer sprite
#[derive(Debug)]
pub enum SpriteLoad {
    Loaded(Sprite),
    Unavailable(SimError),
}

/// Decode the image at `path`
pub fn load_sprite(path: &Path) -> SpriteLoad {
    match image::open(path) {
        Ok(img) => {
            let (width, height) = img.dimensions();
            log::info!("Loaded sprite {} ({}x{})", path.display(), width, height);
            SpriteLoad::Loaded(Sprite {
                path: path.to_path_buf(),
                width,
                height,
            })
        }
        Err(e) => SpriteLoad::Unavailable(SimError::ResourceUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
