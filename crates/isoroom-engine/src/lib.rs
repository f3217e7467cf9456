//! Isoroom engine crate.
//!
//! Keeps a sprite cache per visible room object and compiles the whole room
//! into render-ready lists once per frame:
//!
//! ```text
//!   visualization ──► RoomObjectCache::get_object_cache(key) ──► ObjectCacheItem
//!                                                                     │ sprites
//!                 ┌───────────────────────────────────────────────────┘
//!                 ▼
//!   get_sortable_sprite_list()   ──► Option<Vec<SpriteDescriptor>>  (depth sort pass)
//!   get_plane_sortable_sprites() ──► Vec<&SortableSprite>           (plane sort pass)
//! ```

pub mod cache;
pub mod logging;
pub mod paint;
pub mod sprite;

pub use cache::{
    AccurateZ, CacheError, ObjectCacheItem, ObjectId, RoomCacheConfig, RoomObjectCache,
    SpriteDescriptor,
};
pub use sprite::{RoomObjectSprite, SortableSprite, SpriteClass, SpriteType};
