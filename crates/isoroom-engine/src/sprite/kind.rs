/// Render pass a sprite belongs to.
///
/// Only [`SpriteType::RoomPlane`] changes compiler behavior: plane sprites are
/// split off into their own list and sorted by a separate pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum SpriteType {
    #[default]
    Default,
    Avatar,
    AvatarOwn,
    RoomPlane,
}

impl SpriteType {
    #[inline]
    pub const fn is_plane(self) -> bool {
        matches!(self, Self::RoomPlane)
    }
}
