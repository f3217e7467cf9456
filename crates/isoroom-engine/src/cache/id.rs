use std::fmt;

/// Identifier of the room object that owns a cache entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub i32);

impl ObjectId {
    /// Not yet assigned.
    pub const NONE: Self = Self(-1);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 < 0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Z-accuracy mode handed to every cache entry.
///
/// Opaque to the cache: it names the object model variable the entry reads
/// its accurate Z value from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AccurateZ(pub String);

impl AccurateZ {
    pub fn new(variable: impl Into<String>) -> Self {
        Self(variable.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccurateZ {
    fn default() -> Self {
        Self::new("object_accurate_z_value")
    }
}
