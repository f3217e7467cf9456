use crate::paint::{BlendMode, Color};

use super::SpriteType;

/// Declared visual attributes of one sprite.
///
/// Owned by the object visualization that produced it; the cache reads it but
/// never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomObjectSprite {
    /// Asset name. Empty means "nothing to draw".
    pub name: String,
    /// Room object type this sprite was generated for (e.g. `"external_image_wallitem_poster"`).
    pub object_type: Option<String>,
    /// Free-form visualization tag, e.g. `"THUMBNAIL"`.
    pub tag: String,
    pub sprite_type: SpriteType,
    pub flip_h: bool,
    /// 0 = invisible, 255 = opaque.
    pub alpha: u8,
    pub color: Color,
    pub blend_mode: BlendMode,
    pub width: u32,
    pub height: u32,
    /// Avatar posture, if any.
    pub posture: Option<String>,
    /// Facing in 45° steps (0..8).
    pub direction: i32,
}

impl Default for RoomObjectSprite {
    fn default() -> Self {
        Self {
            name: String::new(),
            object_type: None,
            tag: String::new(),
            sprite_type: SpriteType::Default,
            flip_h: false,
            alpha: 255,
            color: Color::WHITE,
            blend_mode: BlendMode::Normal,
            width: 0,
            height: 0,
            posture: None,
            direction: 0,
        }
    }
}

impl RoomObjectSprite {
    /// Sprite with the given asset name and default attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    #[inline]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[inline]
    pub fn with_sprite_type(mut self, sprite_type: SpriteType) -> Self {
        self.sprite_type = sprite_type;
        self
    }

    #[inline]
    pub fn with_direction(mut self, direction: i32) -> Self {
        self.direction = direction;
        self
    }
}
