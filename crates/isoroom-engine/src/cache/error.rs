use std::fmt;

/// Errors returned by [`RoomObjectCache`](super::RoomObjectCache).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CacheError {
    /// The cache was disposed and can no longer be used.
    Disposed,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Disposed => write!(f, "room object cache used after dispose"),
        }
    }
}

impl std::error::Error for CacheError {}
