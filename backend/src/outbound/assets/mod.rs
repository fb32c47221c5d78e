//! Filesystem-backed media storage adapters.

mod fs_store;

pub use fs_store::FsAssetStore;
