use super::RoomObjectSprite;

/// A sprite bound to a render position.
///
/// `name` is the instance reference name, which may differ from the asset
/// name (`sprite.name`), e.g. when it still carries an unresolved
/// `%image.library.url%` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableSprite {
    pub sprite: RoomObjectSprite,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub z: f64,
}

impl SortableSprite {
    /// Binds `sprite` at `(x, y, z)`; the reference name defaults to the asset name.
    pub fn new(sprite: RoomObjectSprite, x: i32, y: i32, z: f64) -> Self {
        let name = sprite.name.clone();
        Self { sprite, name, x, y, z }
    }

    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
