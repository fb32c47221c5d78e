//! Slug derivation and validation for URL-safe identifiers.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens. [`derive_slug`] is the single canonical
//! transliteration of display titles; write paths fall back to it only when
//! the caller supplies no slug, and uniqueness remains the store's concern.

/// Return `true` when `value` is a valid domain slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Map Azerbaijani-specific characters onto their ASCII equivalents.
///
/// The table covers both cases; everything else passes through untouched.
fn transliterate(ch: char) -> char {
    match ch {
        'ə' | 'Ə' => 'e',
        'ğ' | 'Ğ' => 'g',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' => 'u',
        'ö' | 'Ö' => 'o',
        'ı' | 'I' | 'İ' => 'i',
        'ç' | 'Ç' => 'c',
        other => other,
    }
}

/// Derive a URL-safe slug from a display title.
///
/// Transliterates the Azerbaijani character set, lowercases, strips anything
/// outside `[a-z0-9\s-]`, then collapses whitespace runs and repeated hyphens
/// to single hyphens. Idempotent over its own output. Returns `None` when the
/// title reduces to nothing, which write paths reject as a validation
/// failure.
///
/// # Examples
/// ```
/// use backend::domain::derive_slug;
///
/// assert_eq!(derive_slug("Əli Vəliyev").as_deref(), Some("eli-veliyev"));
/// assert_eq!(derive_slug("∆∆∆"), None);
/// ```
#[must_use]
pub fn derive_slug(title: &str) -> Option<String> {
    let cleaned: String = title
        .chars()
        .map(transliterate)
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || *ch == '-')
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    let mut pending_hyphen = false;
    for ch in cleaned.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        slug.push(ch);
    }

    if slug.is_empty() { None } else { Some(slug) }
}
