//! Error types for the few operations that can reject their input.
//!
//! Per-frame operations never surface these to callers; they log and keep the
//! previous state. The types exist so the rejecting helpers can be tested and
//! so front-ends can report asset problems with context.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("bounding box is not finite")]
    NonFiniteBounds,
    #[error("ray does not intersect the plane")]
    DegenerateRay,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset is {0} bytes, too short for a GLB header")]
    TooShort(usize),
    #[error("missing glTF magic")]
    BadMagic,
    #[error("unsupported GLB version {0}")]
    UnsupportedVersion(u32),
    #[error("header says {declared} bytes but asset has {actual}")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("first chunk is not JSON")]
    MissingJsonChunk,
    #[error("invalid glTF JSON: {0}")]
    Json(#[from] serde_json::Error),
}
