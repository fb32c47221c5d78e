//! Port for uploaded media storage.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by asset store adapters.
    pub enum AssetStoreError {
        /// The upload's file extension is not an accepted image type.
        UnsupportedExtension { extension: String } =>
            "unsupported asset extension '{extension}'",
        /// The requested asset does not exist.
        NotFound { filename: String } =>
            "asset '{filename}' not found",
        /// The requested filename is not a name this store could have issued.
        InvalidFilename { filename: String } =>
            "invalid asset filename '{filename}'",
        /// The underlying storage failed.
        Io { message: String } =>
            "asset storage failed: {message}",
    }
}

/// An upload accepted from the admin console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Filename as submitted by the admin; only its extension and stem are
    /// used, the store issues its own collision-free name.
    pub original_filename: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Receipt for a stored asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAssetHandle {
    /// Absolute public URL the asset is served from.
    pub url: String,
    /// Filename the store issued, relative to the media root.
    pub filename: String,
}

/// An asset read back for serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetContent {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// MIME type inferred from the filename extension.
    pub content_type: &'static str,
}

/// Port for media upload and retrieval.
///
/// Stores issue unique filenames of the form `{stem}-{millis}-{nonce}.{ext}`
/// so repeated uploads of the same file never collide, and only accept a
/// fixed allow-list of image extensions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist an upload and return its public URL and issued filename.
    async fn store(&self, asset: StoredAsset) -> Result<StoredAssetHandle, AssetStoreError>;

    /// Read a previously stored asset by its issued filename.
    async fn open(&self, filename: &str) -> Result<AssetContent, AssetStoreError>;
}
