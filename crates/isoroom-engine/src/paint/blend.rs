use std::fmt;

/// Compositing mode requested by a sprite.
///
/// The discriminants are the renderer's numeric blend codes; `Display`
/// writes that code, which is the stringified form used in compiled records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Normal = 0,
    Add = 1,
    Multiply = 2,
    Screen = 3,
}

impl BlendMode {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a blend name as used in asset visualization data.
    ///
    /// Unknown names fall back to [`BlendMode::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "ADD" => Self::Add,
            "MULTIPLY" => Self::Multiply,
            "SCREEN" => Self::Screen,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_writes_numeric_code() {
        assert_eq!(BlendMode::Normal.to_string(), "0");
        assert_eq!(BlendMode::Add.to_string(), "1");
        assert_eq!(BlendMode::Screen.to_string(), "3");
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(BlendMode::from_name("add"), BlendMode::Add);
        assert_eq!(BlendMode::from_name("Multiply"), BlendMode::Multiply);
        assert_eq!(BlendMode::from_name("copy"), BlendMode::Normal);
    }
}
