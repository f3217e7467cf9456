//! Room sprite model.
//!
//! Responsibilities:
//! - declared visual attributes of a sprite ([`RoomObjectSprite`])
//! - sprites bound to a render position ([`SortableSprite`])
//! - the closed classification the render-list compiler branches on ([`SpriteClass`])

mod class;
mod definition;
mod kind;
mod sortable;

pub use class::SpriteClass;
pub use definition::RoomObjectSprite;
pub use kind::SpriteType;
pub use sortable::SortableSprite;
