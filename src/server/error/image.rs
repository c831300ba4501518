use thiserror::Error;

/// Failures removing a stored image file.
///
/// Image removal is best-effort and happens after the owning record is gone, so these
/// errors are logged and never turned into HTTP responses.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The image path resolves to a file outside the upload directory.
    #[error("Image path '{0}' resolves outside the upload directory")]
    OutsideUploadDir(String),

    /// The file or the upload directory could not be resolved or removed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
