//! Capability-scoped filesystem implementation of the asset store port.
//!
//! The store holds a [`cap_std::fs::Dir`] handle to the media root, so every
//! read and write is confined to that directory regardless of what filename
//! arrives from the network. Issued filenames carry a timestamp and random
//! nonce, which makes them immutable: a name, once served, always refers to
//! the same bytes, and responses can be cached forever.

use std::path::Path;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::domain::derive_slug;
use crate::domain::ports::{
    AssetContent, AssetStore, AssetStoreError, StoredAsset, StoredAssetHandle,
};
use crate::domain::seo::PublicBaseUrl;

/// Accepted upload extensions and the MIME type each serves with.
const ACCEPTED_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
];

/// Length of the random suffix in issued filenames.
const NONCE_LENGTH: usize = 6;

/// Stem used when the uploaded filename transliterates to nothing.
const FALLBACK_STEM: &str = "asset";

/// Media storage rooted in a single directory on the local filesystem.
pub struct FsAssetStore {
    root: Dir,
    base_url: PublicBaseUrl,
}

impl FsAssetStore {
    /// Open (creating if necessary) the media root directory.
    ///
    /// # Errors
    ///
    /// Returns [`AssetStoreError::Io`] when the directory cannot be created
    /// or opened.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use backend::domain::seo::PublicBaseUrl;
    /// use backend::outbound::assets::FsAssetStore;
    ///
    /// # fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url = PublicBaseUrl::parse("http://localhost:3000")?;
    /// let store = FsAssetStore::open_ambient(std::path::Path::new("/tmp/media"), &base_url)?;
    /// # let _ = store;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open_ambient(path: &Path, base_url: &PublicBaseUrl) -> Result<Self, AssetStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(map_io_error)?;
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(map_io_error)?;
        Ok(Self {
            root,
            base_url: base_url.clone(),
        })
    }
}

fn map_io_error(error: std::io::Error) -> AssetStoreError {
    AssetStoreError::io(error.to_string())
}

/// MIME type for an accepted, already-lowercased extension.
fn content_type_for(extension: &str) -> Option<&'static str> {
    ACCEPTED_EXTENSIONS
        .iter()
        .find(|(accepted, _)| *accepted == extension)
        .map(|(_, content_type)| *content_type)
}

/// Split an uploaded filename into its stem and accepted extension.
fn split_upload_filename(filename: &str) -> Result<(&str, String), AssetStoreError> {
    let Some((stem, extension)) = filename.rsplit_once('.') else {
        return Err(AssetStoreError::unsupported_extension(filename));
    };
    let extension = extension.to_ascii_lowercase();
    if content_type_for(&extension).is_none() {
        return Err(AssetStoreError::unsupported_extension(extension));
    }
    Ok((stem, extension))
}

/// Build a collision-free filename: `{stem}-{millis}-{nonce}.{ext}`.
fn issue_filename(stem: &str, extension: &str) -> String {
    let stem = derive_slug(stem).unwrap_or_else(|| FALLBACK_STEM.to_owned());
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(|byte| char::from(byte.to_ascii_lowercase()))
        .collect();
    format!("{stem}-{}-{nonce}.{extension}", Utc::now().timestamp_millis())
}

/// Reject any name this store could not have issued.
///
/// Issued names never contain path separators or dot segments, so anything
/// carrying them is a traversal attempt, not a lookup miss.
fn check_served_filename(filename: &str) -> Result<&'static str, AssetStoreError> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
        || filename.starts_with('.')
    {
        return Err(AssetStoreError::invalid_filename(filename));
    }
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return Err(AssetStoreError::invalid_filename(filename));
    };
    content_type_for(&extension.to_ascii_lowercase())
        .ok_or_else(|| AssetStoreError::invalid_filename(filename))
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn store(&self, asset: StoredAsset) -> Result<StoredAssetHandle, AssetStoreError> {
        let (stem, extension) = split_upload_filename(&asset.original_filename)?;
        let filename = issue_filename(stem, &extension);

        self.root
            .write(&filename, &asset.bytes)
            .map_err(map_io_error)?;

        let url = self.base_url.join(&format!("/media/{filename}"));
        Ok(StoredAssetHandle { url, filename })
    }

    async fn open(&self, filename: &str) -> Result<AssetContent, AssetStoreError> {
        let content_type = check_served_filename(filename)?;

        let bytes = self.root.read(filename).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                AssetStoreError::not_found(filename)
            } else {
                map_io_error(error)
            }
        })?;

        Ok(AssetContent {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Filesystem round-trip and traversal rejection coverage.
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FsAssetStore {
        let base_url = PublicBaseUrl::parse("http://localhost:3000").expect("base url");
        FsAssetStore::open_ambient(dir.path(), &base_url).expect("open media root")
    }

    #[rstest]
    #[tokio::test]
    async fn stores_and_reads_back_an_upload() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let handle = store
            .store(StoredAsset {
                original_filename: "Şirkət Loqosu.PNG".to_owned(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            })
            .await
            .expect("store upload");

        assert!(handle.filename.starts_with("sirket-loqosu-"));
        assert!(handle.filename.ends_with(".png"));
        assert_eq!(
            handle.url,
            format!("http://localhost:3000/media/{}", handle.filename)
        );

        let content = store.open(&handle.filename).await.expect("read back");
        assert_eq!(content.bytes, vec![0x89, b'P', b'N', b'G']);
        assert_eq!(content.content_type, "image/png");
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_uploads_of_the_same_file_get_distinct_names() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        let upload = StoredAsset {
            original_filename: "logo.png".to_owned(),
            bytes: vec![1, 2, 3],
        };

        let first = store.store(upload.clone()).await.expect("first upload");
        let second = store.store(upload).await.expect("second upload");
        assert_ne!(first.filename, second.filename);
    }

    #[rstest]
    #[case("document.pdf")]
    #[case("script.sh")]
    #[case("noextension")]
    #[tokio::test]
    async fn rejects_uploads_outside_the_image_allow_list(#[case] filename: &str) {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let error = store
            .store(StoredAsset {
                original_filename: filename.to_owned(),
                bytes: vec![0],
            })
            .await
            .expect_err("must reject");
        assert!(matches!(
            error,
            AssetStoreError::UnsupportedExtension { .. }
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn unnamed_stems_fall_back_to_a_generic_name() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let handle = store
            .store(StoredAsset {
                original_filename: "∆∆∆.png".to_owned(),
                bytes: vec![0],
            })
            .await
            .expect("store upload");
        assert!(handle.filename.starts_with("asset-"));
    }

    #[rstest]
    #[case("../../etc/passwd.png")]
    #[case("nested/logo.png")]
    #[case(".hidden.png")]
    #[case("logo.exe")]
    #[case("")]
    #[tokio::test]
    async fn serving_rejects_names_the_store_never_issued(#[case] filename: &str) {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let error = store.open(filename).await.expect_err("must reject");
        assert!(matches!(error, AssetStoreError::InvalidFilename { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_assets_report_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let error = store
            .open("logo-1756600000000-a1b2c3.png")
            .await
            .expect_err("missing file");
        assert_eq!(
            error,
            AssetStoreError::not_found("logo-1756600000000-a1b2c3.png")
        );
    }
}
