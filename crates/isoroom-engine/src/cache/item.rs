use crate::sprite::SortableSprite;

use super::{AccurateZ, ObjectId};

/// Sprite cache for a single room object.
///
/// Entries are created by [`RoomObjectCache`](super::RoomObjectCache) and
/// handed out by `&mut` borrow; sprites are kept in caller order.
#[derive(Debug)]
pub struct ObjectCacheItem {
    object_id: ObjectId,
    accurate_z: AccurateZ,
    sprites: Vec<SortableSprite>,
    disposed: bool,
}

impl ObjectCacheItem {
    pub fn new(accurate_z: AccurateZ) -> Self {
        Self {
            object_id: ObjectId::NONE,
            accurate_z,
            sprites: Vec::new(),
            disposed: false,
        }
    }

    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    #[inline]
    pub fn set_object_id(&mut self, id: ObjectId) {
        self.object_id = id;
    }

    #[inline]
    pub fn accurate_z(&self) -> &AccurateZ {
        &self.accurate_z
    }

    #[inline]
    pub fn sprites(&self) -> &[SortableSprite] {
        &self.sprites
    }

    #[inline]
    pub fn sprites_mut(&mut self) -> &mut Vec<SortableSprite> {
        &mut self.sprites
    }

    #[inline]
    pub fn push_sprite(&mut self, sprite: SortableSprite) {
        self.sprites.push(sprite);
    }

    /// Replaces all sprites, e.g. after the object visualization changed.
    pub fn set_sprites(&mut self, sprites: Vec<SortableSprite>) {
        self.sprites = sprites;
    }

    /// Clears sprites but keeps allocated capacity for reuse.
    #[inline]
    pub fn clear_sprites(&mut self) {
        self.sprites.clear();
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the entry's sprite storage.
    ///
    /// Must be called at most once. The cache always detaches the entry from
    /// its map before calling this.
    pub fn dispose(&mut self) {
        debug_assert!(!self.disposed, "ObjectCacheItem disposed twice");
        if self.disposed {
            return;
        }
        self.sprites = Vec::new();
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::RoomObjectSprite;

    fn sprite(name: &str) -> SortableSprite {
        SortableSprite::new(RoomObjectSprite::named(name), 0, 0, 0.0)
    }

    #[test]
    fn new_entry_is_empty_and_unassigned() {
        let item = ObjectCacheItem::new(AccurateZ::default());
        assert!(item.object_id().is_none());
        assert!(item.sprites().is_empty());
        assert!(!item.is_disposed());
        assert_eq!(item.accurate_z().as_str(), "object_accurate_z_value");
    }

    #[test]
    fn sprites_keep_caller_order() {
        let mut item = ObjectCacheItem::new(AccurateZ::default());
        item.push_sprite(sprite("b"));
        item.push_sprite(sprite("a"));
        let names: Vec<_> = item.sprites().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);

        item.set_sprites(vec![sprite("c")]);
        assert_eq!(item.sprites().len(), 1);

        item.clear_sprites();
        assert!(item.sprites().is_empty());
    }

    #[test]
    fn dispose_releases_sprites() {
        let mut item = ObjectCacheItem::new(AccurateZ::default());
        item.push_sprite(sprite("a"));
        item.dispose();
        assert!(item.is_disposed());
        assert!(item.sprites().is_empty());
    }
}
