use super::AccurateZ;

/// Largest thumbnail edge, in pixels, still eligible for color sampling.
pub(crate) const MAX_SIZE_FOR_AVG_COLOR: u32 = 200;

/// Room cache configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCacheConfig {
    /// Applied verbatim to every entry the cache creates.
    pub accurate_z: AccurateZ,
    /// Width/height limit (inclusive) for the average-color heuristic.
    pub max_size_for_avg_color: u32,
}

impl Default for RoomCacheConfig {
    fn default() -> Self {
        Self {
            accurate_z: AccurateZ::default(),
            max_size_for_avg_color: MAX_SIZE_FOR_AVG_COLOR,
        }
    }
}

impl RoomCacheConfig {
    pub fn new(accurate_z: AccurateZ) -> Self {
        Self {
            accurate_z,
            ..Self::default()
        }
    }
}
