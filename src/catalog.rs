//! Catalog assembly for the front ends
//!
//! Turns the `[shapes]` configuration into the ordered list a viewer cycles
//! through, and provides the `list` and `export` commands.

use std::path::{Path, PathBuf};

use polyhedra_core::{ShapeCatalog, ShapeError};

use crate::config::ShapesConfig;

/// How a configured shape directory combines with the built-in shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// Loaded shapes follow the built-ins
    Append,
    /// Loaded shapes are the whole catalog
    Replace,
}

/// Build the catalog a viewer starts with
///
/// A configured directory that yields no valid shapes is an error under
/// either policy.
pub fn build_catalog(
    config: &ShapesConfig,
    policy: DirectoryPolicy,
) -> Result<ShapeCatalog, ShapeError> {
    let Some(dir) = &config.directory else {
        return Ok(ShapeCatalog::from_kinds(&config.builtin));
    };

    let (catalog, loaded) = match policy {
        DirectoryPolicy::Replace => {
            let catalog = ShapeCatalog::load_dir(dir, &config.extension)?;
            let loaded = catalog.len();
            (catalog, loaded)
        }
        DirectoryPolicy::Append => {
            let mut catalog = ShapeCatalog::from_kinds(&config.builtin);
            let loaded = catalog.extend_from_dir(dir, &config.extension)?;
            if loaded == 0 {
                return Err(ShapeError::EmptyCatalog(dir.clone()));
            }
            (catalog, loaded)
        }
    };

    log::info!(
        "Loaded {} shapes from {}; catalog has {}",
        loaded,
        dir.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// One line per shape: position, name, counts and dimension
pub fn listing(catalog: &ShapeCatalog) -> Vec<String> {
    catalog
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            format!(
                "{:>2}. {:<24} V: {:>5}  E: {:>5}  {}",
                i + 1,
                shape.name(),
                shape.vertex_count(),
                shape.edge_count(),
                if shape.is_4d() { "4D" } else { "3D" },
            )
        })
        .collect()
}

/// Write every built-in shape into `dir`
pub fn export_builtin(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ShapeError> {
    let written = ShapeCatalog::builtin().export_dir(dir, extension)?;
    log::info!("Exported {} shapes to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra_core::ShapeKind;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("polyhedra_app_catalog").join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config(builtin: &[ShapeKind], directory: Option<PathBuf>) -> ShapesConfig {
        ShapesConfig {
            builtin: builtin.to_vec(),
            directory,
            ..ShapesConfig::default()
        }
    }

    const TRIANGLE: &str = "Triangle 0\n3 3\nv 0 0 0 0\nv 1 0 0 0\nv 0 1 0 0\ne 0 1\ne 1 2\ne 2 0\n";

    #[test]
    fn test_builtin_only() {
        let catalog = build_catalog(
            &config(&[ShapeKind::Tesseract, ShapeKind::Cube], None),
            DirectoryPolicy::Append,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name(), "Tesseract");
    }

    #[test]
    fn test_append_and_replace() {
        let dir = temp_dir("append_replace");
        fs::write(dir.join("a.shape"), TRIANGLE).unwrap();
        let shapes = config(&[ShapeKind::Cube], Some(dir));

        let appended = build_catalog(&shapes, DirectoryPolicy::Append).unwrap();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended.get(1).unwrap().name(), "Triangle");

        let replaced = build_catalog(&shapes, DirectoryPolicy::Replace).unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced.get(0).unwrap().name(), "Triangle");
    }

    #[test]
    fn test_directory_without_shapes_fails() {
        let dir = temp_dir("no_shapes");
        fs::write(dir.join("broken.shape"), "Broken 0\n-1 0\n").unwrap();
        let shapes = config(&[ShapeKind::Cube], Some(dir));

        for policy in [DirectoryPolicy::Append, DirectoryPolicy::Replace] {
            let result = build_catalog(&shapes, policy);
            assert!(matches!(result, Err(ShapeError::EmptyCatalog(_))), "{:?}", policy);
        }
    }

    #[test]
    fn test_listing_format() {
        let catalog = ShapeCatalog::from_kinds(&[ShapeKind::Cube, ShapeKind::Tesseract]);
        let lines = listing(&catalog);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1. Cube"));
        assert!(lines[0].ends_with("3D"));
        assert!(lines[1].contains("V:    16"));
        assert!(lines[1].ends_with("4D"));
    }

    #[test]
    fn test_export_builtin_writes_all() {
        let dir = temp_dir("export");
        let written = export_builtin(&dir, "shape").unwrap();
        assert_eq!(written.len(), ShapeKind::ALL.len());
        assert!(written.iter().all(|p| p.exists()));
    }
}
