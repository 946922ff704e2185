//!
//! Chart output error.
//!

use std::path::PathBuf;

///
/// Chart output error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output path extension does not name a supported image format.
    #[error("Unsupported chart format of {path:?}. Supported formats: {supported}")]
    UnsupportedFormat {
        /// The output path.
        path: PathBuf,
        /// The supported formats.
        supported: String,
    },
    /// The drawing backend failed.
    #[error("Rendering chart {path:?}: {message}")]
    Rendering {
        /// The output path.
        path: PathBuf,
        /// The backend error message.
        message: String,
    },
}
