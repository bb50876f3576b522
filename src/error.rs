use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a photo file into a texture.
///
/// None of these is fatal: the slide shows a placeholder instead.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to upload texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}
