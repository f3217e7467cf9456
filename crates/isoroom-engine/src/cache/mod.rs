//! Per-object sprite cache and render-list compilation.
//!
//! Responsibilities:
//! - own one [`ObjectCacheItem`] per room object key, created on first access
//! - tear entries down deterministically (detach from the map, then dispose)
//! - compile the cached sprites into [`SpriteDescriptor`] records and a
//!   separate plane-sprite list, once per frame
//!
//! Nothing here sorts; ordering by depth is left to the render pass.

mod config;
mod descriptor;
mod error;
mod id;
mod item;
mod room;

pub use config::RoomCacheConfig;
pub use descriptor::SpriteDescriptor;
pub use error::CacheError;
pub use id::{AccurateZ, ObjectId};
pub use item::ObjectCacheItem;
pub use room::RoomObjectCache;
