use super::RoomObjectSprite;

const WALL_ITEM_TYPE_PREFIX: &str = "external_image_wallitem";
const GUILD_FORUM_TYPE_PREFIX: &str = "guild_forum";
const THUMBNAIL_TAG: &str = "THUMBNAIL";

/// How the render-list compiler treats a sprite.
///
/// Derived once per sprite by [`SpriteClass::of`]; later decisions branch on
/// the variant instead of re-matching strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SpriteClass {
    /// Floor/wall surface, emitted only through the plane list.
    Plane,
    /// Thumbnail of an external-image wall item (posters, photos).
    WallItemThumbnail,
    /// Thumbnail of a guild forum terminal.
    GuildForumThumbnail,
    Other,
}

impl SpriteClass {
    pub fn of(sprite: &RoomObjectSprite) -> Self {
        if sprite.sprite_type.is_plane() {
            return Self::Plane;
        }

        // Missing type never skews.
        let Some(object_type) = sprite.object_type.as_deref() else {
            return Self::Other;
        };

        if sprite.tag != THUMBNAIL_TAG {
            return Self::Other;
        }

        if object_type.starts_with(WALL_ITEM_TYPE_PREFIX) {
            Self::WallItemThumbnail
        } else if object_type.starts_with(GUILD_FORUM_TYPE_PREFIX) {
            Self::GuildForumThumbnail
        } else {
            Self::Other
        }
    }

    #[inline]
    pub const fn is_skewed(self) -> bool {
        matches!(self, Self::WallItemThumbnail | Self::GuildForumThumbnail)
    }

    /// Perspective shear for skewed thumbnails facing `direction`.
    ///
    /// Directions on the 0/4 axis lean left, everything else leans right.
    pub const fn skew(self, direction: i32) -> Option<f32> {
        if !self.is_skewed() {
            return None;
        }
        if direction % 4 == 0 { Some(-0.5) } else { Some(0.5) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpriteType;

    fn thumb(object_type: &str) -> RoomObjectSprite {
        RoomObjectSprite::named("thumb")
            .with_object_type(object_type)
            .with_tag("THUMBNAIL")
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn wall_item_thumbnail_by_prefix() {
        assert_eq!(
            SpriteClass::of(&thumb("external_image_wallitem_foo")),
            SpriteClass::WallItemThumbnail
        );
    }

    #[test]
    fn guild_forum_thumbnail_by_prefix() {
        assert_eq!(SpriteClass::of(&thumb("guild_forum")), SpriteClass::GuildForumThumbnail);
    }

    #[test]
    fn prefix_must_be_at_start() {
        assert_eq!(SpriteClass::of(&thumb("my_external_image_wallitem")), SpriteClass::Other);
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let s = thumb("external_image_wallitem_foo").with_tag("thumbnail");
        assert_eq!(SpriteClass::of(&s), SpriteClass::Other);
    }

    #[test]
    fn missing_type_is_not_skewed() {
        let s = RoomObjectSprite::named("thumb").with_tag("THUMBNAIL");
        assert_eq!(SpriteClass::of(&s), SpriteClass::Other);
    }

    #[test]
    fn plane_wins_over_thumbnail() {
        let s = thumb("external_image_wallitem_foo").with_sprite_type(SpriteType::RoomPlane);
        assert_eq!(SpriteClass::of(&s), SpriteClass::Plane);
        assert!(!SpriteClass::Plane.is_skewed());
    }

    // ── skew ──────────────────────────────────────────────────────────────

    #[test]
    fn skew_follows_direction_axis() {
        let c = SpriteClass::WallItemThumbnail;
        assert_eq!(c.skew(0), Some(-0.5));
        assert_eq!(c.skew(4), Some(-0.5));
        assert_eq!(c.skew(2), Some(0.5));
        assert_eq!(c.skew(6), Some(0.5));
    }

    #[test]
    fn unskewed_classes_have_no_skew() {
        assert_eq!(SpriteClass::Other.skew(4), None);
        assert_eq!(SpriteClass::Plane.skew(2), None);
    }
}
