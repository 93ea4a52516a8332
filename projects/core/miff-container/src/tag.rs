use core::fmt;

/// Four character record type tag, e.g. `MBmp`.
///
/// Tags are raw bytes; they are ASCII in practice but are not required to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordTag([u8; 4]);

impl RecordTag {
    /// Bitmap (texture) record.
    pub const BITMAP: RecordTag = RecordTag(*b"MBmp");
    /// Model action list.
    pub const ACTIONS: RecordTag = RecordTag(*b"MAct");
    /// Model geometry.
    pub const MODEL: RecordTag = RecordTag(*b"MMdl");
    /// Script text line.
    pub const SCRIPT: RecordTag = RecordTag(*b"GScr");

    #[inline]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for RecordTag {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl core::str::FromStr for RecordTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| format!("Invalid record tag: {s}. Tags are exactly 4 bytes, e.g. MBmp"))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}
