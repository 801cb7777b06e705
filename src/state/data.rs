/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog sources and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a photo within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u32);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A category label (e.g., "Futebol")
///
/// The set of categories is closed: it is whatever the loaded catalog contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The gallery's current filter
///
/// `All` is the wildcard: it is never stored on a photo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a photo passes this filter
    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => photo.category == *category,
        }
    }
}

/// Represents a single photo in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique catalog ID
    pub id: PhotoId,
    /// Opaque image reference: a remote URI or a local file path
    #[serde(alias = "url")]
    pub image_ref: String,
    /// Category this photo belongs to
    pub category: Category,
    /// Display title (e.g., "O Chute Decisivo")
    pub title: String,
}

impl Photo {
    pub fn new(id: u32, image_ref: &str, category: &str, title: &str) -> Self {
        Self {
            id: PhotoId(id),
            image_ref: image_ref.to_string(),
            category: Category::new(category),
            title: title.to_string(),
        }
    }

    /// Whether the image reference points at something we can load from disk
    ///
    /// Plain paths and `file://` URIs are local; any other URI scheme
    /// (`https:`, `data:`, ...) is not.
    pub fn is_local(&self) -> bool {
        self.local_path().is_some()
    }

    /// Local filesystem path for the image, if any
    pub fn local_path(&self) -> Option<&str> {
        match uri_scheme(&self.image_ref) {
            None => Some(&self.image_ref),
            Some(scheme) if scheme.eq_ignore_ascii_case("file") => {
                let rest = &self.image_ref[scheme.len() + 1..];
                Some(rest.strip_prefix("//").unwrap_or(rest))
            }
            Some(_) => None,
        }
    }
}

/// The URI scheme of a reference, if it has one
///
/// Single-letter prefixes are Windows drive letters, not schemes.
fn uri_scheme(reference: &str) -> Option<&str> {
    let (scheme, _) = reference.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (valid && scheme.len() > 1).then_some(scheme)
}
