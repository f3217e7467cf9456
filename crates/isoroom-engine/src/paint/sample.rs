//! Dominant-color sampling for small decorative sprites.
//!
//! The room cache never touches pixels itself. When a sprite passes the
//! thumbnail size gate, the cache asks its [`ColorSampler`] for an average
//! color and stores the answer next to (not instead of) the declared tint.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::sprite::RoomObjectSprite;

use super::Color;

/// Texture access capability used by the average-color heuristic.
pub trait ColorSampler {
    /// Returns the average visible color of the sprite's texture, if known.
    fn average_color(&self, sprite: &RoomObjectSprite) -> Option<Color>;
}

/// Sampler that never samples. This is the cache default.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoSampling;

impl ColorSampler for NoSampling {
    #[inline]
    fn average_color(&self, _sprite: &RoomObjectSprite) -> Option<Color> {
        None
    }
}

/// Sampler backed by decoded RGBA textures, keyed by sprite asset name.
#[derive(Debug, Default)]
pub struct ImageColorSampler {
    textures: HashMap<String, RgbaImage>,
}

impl ImageColorSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an already decoded texture under `name`, replacing any previous one.
    pub fn insert_texture(&mut self, name: impl Into<String>, texture: RgbaImage) {
        self.textures.insert(name.into(), texture);
    }

    /// Decodes an image file and registers it under `name`.
    pub fn load_texture(&mut self, name: impl Into<String>, path: &Path) -> Result<()> {
        let texture = image::open(path)
            .with_context(|| format!("failed to load texture from {}", path.display()))?
            .to_rgba8();

        let name = name.into();
        log::debug!(
            "loaded texture '{name}' ({}x{}) from {}",
            texture.width(),
            texture.height(),
            path.display()
        );
        self.insert_texture(name, texture);
        Ok(())
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl ColorSampler for ImageColorSampler {
    fn average_color(&self, sprite: &RoomObjectSprite) -> Option<Color> {
        let Some(texture) = self.textures.get(sprite.name.as_str()) else {
            log::debug!("no texture registered for sprite '{}'", sprite.name);
            return None;
        };
        average_visible(texture)
    }
}

/// Mean straight-alpha RGB over pixels with non-zero alpha.
///
/// Returns `None` for fully transparent or empty images.
fn average_visible(texture: &RgbaImage) -> Option<Color> {
    let (mut r, mut g, mut b, mut n) = (0u64, 0u64, 0u64, 0u64);

    for px in texture.pixels() {
        let [pr, pg, pb, pa] = px.0;
        if pa == 0 {
            continue;
        }
        r += u64::from(pr);
        g += u64::from(pg);
        b += u64::from(pb);
        n += 1;
    }

    if n == 0 {
        return None;
    }

    Some(Color::from_rgb_u8((r / n) as u8, (g / n) as u8, (b / n) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sprite(name: &str) -> RoomObjectSprite {
        RoomObjectSprite {
            name: name.to_string(),
            ..RoomObjectSprite::default()
        }
    }

    #[test]
    fn no_sampling_returns_none() {
        assert_eq!(NoSampling.average_color(&sprite("poster")), None);
    }

    #[test]
    fn averages_opaque_pixels_only() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        img.put_pixel(0, 0, Rgba([200, 100, 0, 255]));
        img.put_pixel(1, 1, Rgba([100, 50, 20, 128]));

        let mut sampler = ImageColorSampler::new();
        sampler.insert_texture("poster", img);

        assert_eq!(
            sampler.average_color(&sprite("poster")),
            Some(Color::from_rgb_u8(150, 75, 10))
        );
    }

    #[test]
    fn fully_transparent_texture_has_no_color() {
        let mut sampler = ImageColorSampler::new();
        sampler.insert_texture("ghost", RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0])));
        assert_eq!(sampler.average_color(&sprite("ghost")), None);
    }

    #[test]
    fn unknown_texture_has_no_color() {
        let sampler = ImageColorSampler::new();
        assert_eq!(sampler.average_color(&sprite("missing")), None);
    }

    #[test]
    fn load_texture_reports_missing_file() {
        let mut sampler = ImageColorSampler::new();
        let err = sampler
            .load_texture("poster", Path::new("/definitely/not/here.png"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to load texture"));
        assert_eq!(sampler.texture_count(), 0);
    }
}
