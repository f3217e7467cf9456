use std::collections::HashMap;
use std::fmt;

use crate::paint::{ColorSampler, NoSampling};
use crate::sprite::{SortableSprite, SpriteClass};

use super::{AccurateZ, CacheError, ObjectCacheItem, ObjectId, RoomCacheConfig, SpriteDescriptor};

/// Reference-name placeholders that mark sprites showing a remote image.
const IMAGE_LIBRARY_URL: &str = "%image.library.url%";
const GROUP_BADGE_URL: &str = "%group.badge.url%";

/// Asset-name prefix of thumbnails that get a decorative frame.
const FRAMED_NAME_PREFIX: &str = "external_image_wallitem";

/// Live entries keyed by object key, iterated in insertion order.
///
/// Invariant: `order` holds exactly the keys of `items`, oldest first.
#[derive(Debug, Default)]
struct Entries {
    items: HashMap<String, ObjectCacheItem>,
    order: Vec<String>,
}

impl Entries {
    fn get_or_insert_with(
        &mut self,
        key: &str,
        make: impl FnOnce() -> ObjectCacheItem,
    ) -> &mut ObjectCacheItem {
        let order = &mut self.order;
        self.items.entry(key.to_owned()).or_insert_with(|| {
            order.push(key.to_owned());
            log::debug!("room cache: created entry '{key}'");
            make()
        })
    }

    /// Detaches the entry for `key` from both the map and the order.
    fn detach(&mut self, key: &str) -> Option<ObjectCacheItem> {
        let item = self.items.remove(key)?;
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        Some(item)
    }

    /// Entries in insertion order.
    fn iter(&self) -> impl Iterator<Item = (&str, &ObjectCacheItem)> {
        self.order
            .iter()
            .filter_map(|k| self.items.get(k).map(|item| (k.as_str(), item)))
    }
}

enum CacheState {
    Active(Entries),
    Disposed,
}

/// Sprite caches for every visible object in one room.
///
/// Lifecycle:
/// - `Active`: entries are created on access, removed, and compiled
/// - `Disposed` (terminal): every operation except [`dispose`](Self::dispose)
///   fails with [`CacheError::Disposed`]
///
/// Compilation is recomputed on every call; nothing is cached across frames.
pub struct RoomObjectCache {
    state: CacheState,
    config: RoomCacheConfig,
    sampler: Box<dyn ColorSampler>,
}

impl fmt::Debug for RoomObjectCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("RoomObjectCache");
        match &self.state {
            CacheState::Active(entries) => d.field("entries", &entries.items.len()),
            CacheState::Disposed => d.field("entries", &"disposed"),
        };
        d.field("config", &self.config).finish_non_exhaustive()
    }
}

impl RoomObjectCache {
    pub fn new(accurate_z: AccurateZ) -> Self {
        Self::with_config(RoomCacheConfig::new(accurate_z))
    }

    pub fn with_config(config: RoomCacheConfig) -> Self {
        Self {
            state: CacheState::Active(Entries::default()),
            config,
            sampler: Box::new(NoSampling),
        }
    }

    /// Installs the texture sampler consulted by the average-color heuristic.
    pub fn with_sampler(mut self, sampler: impl ColorSampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    #[inline]
    pub fn config(&self) -> &RoomCacheConfig {
        &self.config
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        matches!(self.state, CacheState::Disposed)
    }

    fn entries(&self) -> Result<&Entries, CacheError> {
        match &self.state {
            CacheState::Active(entries) => Ok(entries),
            CacheState::Disposed => Err(CacheError::Disposed),
        }
    }

    // -- Entry lifecycle --

    /// Returns the entry for `key`, creating it on first access.
    pub fn get_object_cache(&mut self, key: &str) -> Result<&mut ObjectCacheItem, CacheError> {
        let CacheState::Active(entries) = &mut self.state else {
            return Err(CacheError::Disposed);
        };
        let accurate_z = &self.config.accurate_z;
        Ok(entries.get_or_insert_with(key, || ObjectCacheItem::new(accurate_z.clone())))
    }

    /// Returns the entry for `key` without creating one.
    pub fn get(&self, key: &str) -> Result<Option<&ObjectCacheItem>, CacheError> {
        Ok(self.entries()?.items.get(key))
    }

    /// Detaches and disposes the entry for `key`. Absent keys are ignored.
    pub fn remove_object_cache(&mut self, key: &str) -> Result<(), CacheError> {
        let CacheState::Active(entries) = &mut self.state else {
            return Err(CacheError::Disposed);
        };

        // Detach first: the entry is out of the map before it is disposed.
        let Some(mut item) = entries.detach(key) else {
            return Ok(());
        };
        item.dispose();

        log::debug!("room cache: removed entry '{key}'");
        Ok(())
    }

    /// Disposes every entry and releases the map.
    ///
    /// Idempotent. Afterwards the cache is terminal.
    pub fn dispose(&mut self) {
        let CacheState::Active(entries) = &mut self.state else {
            return;
        };

        let keys = std::mem::take(&mut entries.order);
        for key in &keys {
            // Detach first, then dispose.
            if let Some(mut item) = entries.items.remove(key) {
                item.dispose();
            }
        }

        self.state = CacheState::Disposed;
        log::debug!("room cache: disposed ({} entries)", keys.len());
    }

    // -- Queries --

    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.entries()?.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.entries()?.items.is_empty())
    }

    pub fn contains(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entries()?.items.contains_key(key))
    }

    /// Live keys in insertion order.
    pub fn keys(&self) -> Result<Vec<&str>, CacheError> {
        Ok(self.entries()?.iter().map(|(k, _)| k).collect())
    }

    // -- Compilation --

    /// Flattens all non-plane, named sprites into descriptor records.
    ///
    /// Returns `Ok(None)` when nothing is renderable, so the caller can skip
    /// the pass entirely. An empty vector is never returned.
    pub fn get_sortable_sprite_list(&self) -> Result<Option<Vec<SpriteDescriptor>>, CacheError> {
        let entries = self.entries()?;
        let mut out = Vec::new();

        for (_, item) in entries.iter() {
            for sprite in item.sprites() {
                if let Some(data) = self.describe(item.object_id(), sprite) {
                    out.push(data);
                }
            }
        }

        log::trace!("room cache: compiled {} sortable sprites", out.len());

        if out.is_empty() {
            return Ok(None);
        }
        Ok(Some(out))
    }

    /// Collects plane sprites across all entries, in entry-then-sprite order.
    ///
    /// Unlike [`get_sortable_sprite_list`](Self::get_sortable_sprite_list),
    /// an empty result is an empty vector.
    pub fn get_plane_sortable_sprites(&self) -> Result<Vec<&SortableSprite>, CacheError> {
        let planes: Vec<&SortableSprite> = self
            .entries()?
            .iter()
            .flat_map(|(_, item)| item.sprites())
            .filter(|s| s.sprite.sprite_type.is_plane())
            .collect();

        log::trace!("room cache: collected {} plane sprites", planes.len());
        Ok(planes)
    }

    fn describe(&self, object_id: ObjectId, sortable: &SortableSprite) -> Option<SpriteDescriptor> {
        let sprite = &sortable.sprite;
        let class = SpriteClass::of(sprite);

        if class == SpriteClass::Plane || sprite.name.is_empty() {
            return None;
        }

        let mut data = SpriteDescriptor {
            object_id,
            x: sortable.x,
            y: sortable.y,
            z: sortable.z,
            name: sprite.name.clone(),
            flip_h: sprite.flip_h,
            alpha: sprite.alpha,
            color: sprite.color.to_string(),
            blend_mode: sprite.blend_mode.to_string(),
            width: sprite.width,
            height: sprite.height,
            object_type: sprite.object_type.clone(),
            posture: sprite.posture.clone(),
            skew: class.skew(sprite.direction),
            frame: false,
            average_color: None,
        };

        if self.wants_average_color(class, sortable) {
            data.average_color = self.sampler.average_color(sprite);
            data.frame = sprite.name.starts_with(FRAMED_NAME_PREFIX);
        }

        Some(data)
    }

    /// Size-gated check for small thumbnail-like sprites.
    fn wants_average_color(&self, class: SpriteClass, sortable: &SortableSprite) -> bool {
        let looks_like_thumbnail = class.is_skewed()
            || sortable.name.contains(IMAGE_LIBRARY_URL)
            || sortable.name.contains(GROUP_BADGE_URL);

        let max = self.config.max_size_for_avg_color;
        looks_like_thumbnail && sortable.sprite.width <= max && sortable.sprite.height <= max
    }
}
