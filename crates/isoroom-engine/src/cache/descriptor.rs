use crate::paint::Color;

use super::ObjectId;

/// Flattened, self-contained snapshot of one renderable sprite.
///
/// Produced fresh by every
/// [`get_sortable_sprite_list`](super::RoomObjectCache::get_sortable_sprite_list)
/// call; holds no reference back to the source sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDescriptor {
    pub object_id: ObjectId,
    pub x: i32,
    pub y: i32,
    pub z: f64,
    pub name: String,
    pub flip_h: bool,
    pub alpha: u8,
    /// Declared tint, stringified. Never replaced by a sampled color.
    pub color: String,
    /// Blend mode code, stringified.
    pub blend_mode: String,
    pub width: u32,
    pub height: u32,
    pub object_type: Option<String>,
    pub posture: Option<String>,
    /// Perspective shear for thumbnail sprites.
    pub skew: Option<f32>,
    /// Draw a decorative frame around the thumbnail.
    pub frame: bool,
    /// Sampler result for sprites that passed the size gate.
    pub average_color: Option<Color>,
}
