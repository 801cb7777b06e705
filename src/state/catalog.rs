use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use walkdir::WalkDir;

use super::data::{Category, Photo, PhotoId};
use crate::config::CatalogSpec;
use crate::error::CatalogError;

/// Image extensions recognised when building a catalog from a folder
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// The photo catalog: a fixed, ordered, read-only list of photos.
///
/// Built once at startup and shared behind an `Arc` for the whole session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    photos: Vec<Photo>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate photo IDs
    pub fn new(photos: Vec<Photo>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(photos.len());
        for photo in &photos {
            if !seen.insert(photo.id) {
                return Err(CatalogError::DuplicateId(photo.id));
            }
        }
        Ok(Self { photos })
    }

    /// All photos in catalog order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Look up a photo by ID
    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = Vec::new();
        for photo in &self.photos {
            if !categories.contains(&&photo.category) {
                categories.push(&photo.category);
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// A pluggable, read-only supplier of the photo catalog
pub trait CatalogSource {
    /// Short human-readable name used in log lines
    fn describe(&self) -> String;

    /// Load the full catalog
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// The compiled-in portfolio
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(builtin_photos())
    }
}

fn builtin_photos() -> Vec<Photo> {
    const BASE: &str = "https://images.unsplash.com";
    const PARAMS: &str = "?auto=format&fit=crop&q=80&w=1200";

    [
        (1, "photo-1508098682722-e99c43a406b2", "Futebol", "O Chute Decisivo"),
        (2, "photo-1461896736644-31911f99c722", "Corrida", "Explosão na Largada"),
        (3, "photo-1519861531473-9200362f46b3", "Basquete", "Cesta no Último Segundo"),
        (4, "photo-1521537634581-0dced2fee2ef", "Radicais", "Voo no Skate"),
        (5, "photo-1541252260730-0412e3e2104e", "Futebol", "Grito de Gol"),
        (6, "photo-1502224562085-639556652f33", "Corrida", "Foco Absoluto"),
        (7, "photo-1504450758481-7338eba7524a", "Basquete", "Defesa Intransponível"),
        (8, "photo-1531747118685-ca8fa6e08806", "Radicais", "Surf nas Ondas Gigantes"),
    ]
    .into_iter()
    .map(|(id, slug, category, title)| {
        Photo::new(id, &format!("{BASE}/{slug}{PARAMS}"), category, title)
    })
    .collect()
}

/// A catalog stored as a JSON array of photo records
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    pub path: PathBuf,
}

impl CatalogSource for JsonCatalog {
    fn describe(&self) -> String {
        format!("JSON catalog {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let photos: Vec<Photo> = serde_json::from_str(&contents)?;
        Catalog::new(photos)
    }
}

/// A catalog built from a folder of category sub-folders
///
/// Layout: `<root>/<Category>/<photo>.jpg`. Files directly under the root,
/// deeper files and non-image files are ignored. IDs are assigned from 1
/// in sorted path order.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    pub root: PathBuf,
}

impl CatalogSource for DirectoryCatalog {
    fn describe(&self) -> String {
        format!("folder {}", self.root.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        if !self.root.is_dir() {
            return Err(CatalogError::NotADirectory(self.root.clone()));
        }

        let mut photos = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_image(path) {
                continue;
            }

            let Some(category) = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
            else {
                continue;
            };

            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
                .unwrap_or_default();

            let id = photos.len() as u32 + 1;
            photos.push(Photo::new(id, &path.to_string_lossy(), &category, &title));
        }

        Catalog::new(photos)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Resolve the configured catalog source
pub fn source_for(spec: &CatalogSpec) -> Box<dyn CatalogSource + Send> {
    match spec {
        CatalogSpec::Builtin => Box::new(BuiltinCatalog),
        CatalogSpec::Json { path } => Box::new(JsonCatalog { path: path.clone() }),
        CatalogSpec::Directory { path } => Box::new(DirectoryCatalog { root: path.clone() }),
    }
}

/// Outcome of loading the catalog at startup
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Arc<Catalog>,
    /// Set when the configured source failed and the builtin catalog was used
    pub fallback_reason: Option<String>,
}

/// Load the configured catalog off the UI thread
///
/// Falls back to the builtin catalog if the configured source fails.
pub async fn load_catalog(spec: CatalogSpec) -> LoadedCatalog {
    let result = task::spawn_blocking(move || load_with_fallback(&spec)).await;

    match result {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Catalog loading task failed: {}", e);
            builtin_fallback(format!("Task join error: {}", e))
        }
    }
}

fn load_with_fallback(spec: &CatalogSpec) -> LoadedCatalog {
    let source = source_for(spec);

    match source.load() {
        Ok(catalog) => {
            if catalog.is_empty() {
                tracing::warn!("⚠️  {} contains no photos", source.describe());
            }
            tracing::info!("📁 Loaded {} photos from {}", catalog.len(), source.describe());
            LoadedCatalog {
                catalog: Arc::new(catalog),
                fallback_reason: None,
            }
        }
        Err(e) => {
            tracing::warn!("⚠️  Could not load {}: {}", source.describe(), e);
            builtin_fallback(e.to_string())
        }
    }
}

fn builtin_fallback(reason: String) -> LoadedCatalog {
    let catalog = Catalog::new(builtin_photos()).unwrap_or_default();
    LoadedCatalog {
        catalog: Arc::new(catalog),
        fallback_reason: Some(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog.len(), 8);

        let labels: Vec<&str> = catalog.categories().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Futebol", "Corrida", "Basquete", "Radicais"]);

        for category in catalog.categories() {
            let count = catalog.photos().iter().filter(|p| &p.category == category).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let photos = vec![
            Photo::new(1, "a.jpg", "Futebol", "A"),
            Photo::new(1, "b.jpg", "Corrida", "B"),
        ];
        assert!(matches!(
            Catalog::new(photos),
            Err(CatalogError::DuplicateId(PhotoId(1)))
        ));
    }

    #[test]
    fn test_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": 10, "image_ref": "a.jpg", "category": "Futebol", "title": "A"},
                {"id": 11, "url": "b.jpg", "category": "Corrida", "title": "B"}
            ]"#,
        )
        .unwrap();

        let catalog = JsonCatalog { path }.load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(PhotoId(11)).unwrap().title, "B");
    }

    #[test]
    fn test_json_catalog_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": 3, "image_ref": "a.jpg", "category": "Futebol", "title": "A"},
                {"id": 3, "image_ref": "b.jpg", "category": "Futebol", "title": "B"}
            ]"#,
        )
        .unwrap();

        let result = JsonCatalog { path }.load();
        assert!(matches!(result, Err(CatalogError::DuplicateId(PhotoId(3)))));
    }

    #[test]
    fn test_directory_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Futebol")).unwrap();
        fs::create_dir_all(root.join("Corrida/nested")).unwrap();
        fs::write(root.join("Futebol/grito_de-gol.jpg"), b"").unwrap();
        fs::write(root.join("Futebol/notes.txt"), b"").unwrap();
        fs::write(root.join("Corrida/largada.PNG"), b"").unwrap();
        fs::write(root.join("Corrida/nested/deep.jpg"), b"").unwrap();
        fs::write(root.join("loose.jpg"), b"").unwrap();

        let catalog = DirectoryCatalog { root: root.to_path_buf() }.load().unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.photos()[0];
        assert_eq!(first.id, PhotoId(1));
        assert_eq!(first.category.label(), "Corrida");
        assert_eq!(first.title, "largada");

        let second = &catalog.photos()[1];
        assert_eq!(second.category.label(), "Futebol");
        assert_eq!(second.title, "grito de gol");
        assert!(second.is_local());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_catalog_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let shared = tempfile::tempdir().unwrap();
        fs::write(shared.path().join("chute.jpg"), b"").unwrap();
        fs::create_dir_all(shared.path().join("surf")).unwrap();
        fs::write(shared.path().join("surf/onda.jpg"), b"").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Futebol")).unwrap();
        fs::write(root.join("Futebol/gol.jpg"), b"").unwrap();
        symlink(shared.path().join("chute.jpg"), root.join("Futebol/link.jpg")).unwrap();
        symlink(shared.path().join("surf"), root.join("Surf")).unwrap();

        let catalog = DirectoryCatalog { root: root.to_path_buf() }.load().unwrap();
        let found: Vec<(&str, &str)> = catalog
            .photos()
            .iter()
            .map(|p| (p.category.label(), p.title.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![("Futebol", "gol"), ("Futebol", "link"), ("Surf", "onda")]
        );
    }

    #[test]
    fn test_directory_catalog_requires_directory() {
        let result = DirectoryCatalog { root: PathBuf::from("/nonexistent/portfolio") }.load();
        assert!(matches!(result, Err(CatalogError::NotADirectory(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_falls_back_to_builtin() {
        let loaded = load_catalog(CatalogSpec::Json {
            path: PathBuf::from("/nonexistent/catalog.json"),
        })
        .await;

        assert!(loaded.fallback_reason.is_some());
        assert_eq!(loaded.catalog.len(), 8);
    }
}
