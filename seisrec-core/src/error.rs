//! Error types for core format operations

/// Errors that can occur while working with header layouts and buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// No header layout is registered for this version
    UnknownVersion(i32),
    /// No field with this name exists in the layout
    UnknownField,
    /// Header buffer length does not match the layout size
    HeadBufferSize,
    /// Unrecognized on-disk filetype code
    InvalidFiletypeCode(i32),
    /// Unrecognized storage class tag
    InvalidStorageClass(u8),
}

impl core::fmt::Display for CoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoreError::UnknownVersion(v) => write!(f, "Unknown header version {v}"),
            CoreError::UnknownField => write!(f, "Unknown header field"),
            CoreError::HeadBufferSize => write!(f, "Header buffer size mismatch"),
            CoreError::InvalidFiletypeCode(c) => write!(f, "Invalid filetype code {c}"),
            CoreError::InvalidStorageClass(t) => write!(f, "Invalid storage class tag {t}"),
        }
    }
}

/// Result type for core format operations
pub type Result<T> = core::result::Result<T, CoreError>;
