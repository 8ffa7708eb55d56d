/// Initial photo list
///
/// The gallery starts from either the photo list bundled with the binary or a
/// folder of images chosen by the user. Whichever it is, that list is also
/// what "restore" brings back.
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::CatalogError;
use crate::state::data::PhotoId;

/// Bundled photo list; its entries are relative to the directory holding `assets/`
const BUNDLED_PHOTOS: &str = include_str!("../assets/photos.json");

/// Folder the bundled photos ship in, relative to the base directory
const BUNDLED_ASSET_DIR: &str = "assets/photos";

/// Image extensions picked up by a folder scan
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Relative references are resolved against this directory
    pub base_dir: PathBuf,
    pub photos: Vec<PhotoId>,
}

impl Catalog {
    /// The photo list shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        let photos: Vec<PhotoId> = serde_json::from_str(BUNDLED_PHOTOS)?;
        Ok(Self {
            base_dir: bundled_base_dir(),
            photos,
        })
    }

    /// Pick the catalog for this launch
    ///
    /// A folder given on the command line wins over the configured one. A
    /// folder without any images falls back to the bundled list.
    pub fn select(cli_dir: Option<PathBuf>, config_dir: Option<&Path>) -> Result<Self, CatalogError> {
        let Some(dir) = cli_dir.or_else(|| config_dir.map(Path::to_path_buf)) else {
            return Self::bundled();
        };

        let catalog = Self::scan(&dir)?;
        if catalog.photos.is_empty() {
            warn!("No images found in {}, using the bundled photos", dir.display());
            return Self::bundled();
        }

        Ok(catalog)
    }

    /// Recursively collect the images in `dir`, sorted by path
    pub fn scan(dir: &Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::MissingDir(dir.to_path_buf()));
        }

        info!("🔍 Scanning folder: {}", dir.display());

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(CatalogError::Scan {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
                Err(e) => {
                    warn!("⚠️  Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && is_image(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        info!("📸 Found {} images", paths.len());

        Ok(Self {
            base_dir: dir.to_path_buf(),
            photos: paths
                .iter()
                .map(|path| PhotoId::new(path.to_string_lossy()))
                .collect(),
        })
    }

    /// Filesystem path for a photo reference
    pub fn resolve(&self, id: &PhotoId) -> PathBuf {
        let path = Path::new(id.as_str());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Directory the bundled references resolve against
///
/// Looks next to the executable first, then in the working directory.
/// Falls back to the working directory when neither ships the assets.
fn bundled_base_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().ok();

    find_asset_root(exe_dir.into_iter().chain(cwd.clone())).unwrap_or_else(|| {
        warn!("⚠️  Bundled photos not found next to the executable or in the working directory");
        cwd.unwrap_or_default()
    })
}

/// First candidate directory that contains the bundled photo folder
fn find_asset_root(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|dir| dir.join(BUNDLED_ASSET_DIR).is_dir())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_bundled_list_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.photos.is_empty());
        assert!(catalog.photos.iter().all(|id| is_image(Path::new(id.as_str()))));
    }

    #[test]
    fn test_bundled_photos_exist_on_disk() {
        // Tests run from the crate root, which ships the assets
        let catalog = Catalog::bundled().unwrap();
        for id in &catalog.photos {
            let path = catalog.resolve(id);
            assert!(path.is_file(), "missing bundled photo {}", path.display());
        }
    }

    #[test]
    fn test_asset_root_prefers_first_candidate_with_assets() {
        let empty = tempfile::tempdir().unwrap();
        let shipped = tempfile::tempdir().unwrap();
        fs::create_dir_all(shipped.path().join(BUNDLED_ASSET_DIR)).unwrap();

        let found = find_asset_root([empty.path().to_path_buf(), shipped.path().to_path_buf()]);
        assert_eq!(found, Some(shipped.path().to_path_buf()));
        assert_eq!(find_asset_root([empty.path().to_path_buf()]), None);
    }

    #[test]
    fn test_scan_skips_unlisted_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.tiff"), b"").unwrap();
        fs::write(dir.path().join("keep.gif"), b"").unwrap();

        let catalog = Catalog::scan(dir.path()).unwrap();
        let names: Vec<&str> = catalog.photos.iter().map(|id| id.file_name()).collect();
        assert_eq!(names, vec!["keep.gif"]);
    }

    #[test]
    fn test_scan_finds_images_recursively_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.JPG"), b"").unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("nested").join("c.webp"), b"").unwrap();

        let catalog = Catalog::scan(dir.path()).unwrap();
        let names: Vec<&str> = catalog.photos.iter().map(|id| id.file_name()).collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.webp"]);
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::scan(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDir(_)));
    }

    #[test]
    fn test_empty_dir_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::select(Some(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(catalog.photos, Catalog::bundled().unwrap().photos);
    }

    #[test]
    fn test_cli_dir_wins_over_config() {
        let cli = tempfile::tempdir().unwrap();
        let configured = tempfile::tempdir().unwrap();
        fs::write(cli.path().join("cli.jpg"), b"").unwrap();
        fs::write(configured.path().join("config.jpg"), b"").unwrap();

        let catalog = Catalog::select(Some(cli.path().to_path_buf()), Some(configured.path())).unwrap();
        assert_eq!(catalog.photos.len(), 1);
        assert_eq!(catalog.photos[0].file_name(), "cli.jpg");
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let catalog = Catalog {
            base_dir: PathBuf::from("/srv/gallery"),
            photos: Vec::new(),
        };
        assert_eq!(
            catalog.resolve(&PhotoId::from("assets/a.jpg")),
            PathBuf::from("/srv/gallery/assets/a.jpg")
        );
        assert_eq!(
            catalog.resolve(&PhotoId::from("/tmp/b.jpg")),
            PathBuf::from("/tmp/b.jpg")
        );
    }
}
