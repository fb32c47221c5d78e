//! Shared cache-control policies for HTTP handlers.

/// Private responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Build the standard cache-control header tuple for private API responses.
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// Uploaded media never changes under a given filename, so clients may cache
/// it indefinitely.
pub const PUBLIC_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the cache-control header tuple for immutable media responses.
pub const fn public_immutable_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_IMMUTABLE)
}
