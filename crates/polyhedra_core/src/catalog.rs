//! Shape catalog
//!
//! The ordered list of shapes a viewer cycles through. It starts from the
//! built-in recipes, from shape files in a directory, or from both.

use std::fs;
use std::path::{Path, PathBuf};

use crate::shape::Shape;
use crate::shape_file;
use crate::{ShapeError, ShapeKind};

/// Ordered collection of shapes
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All nine built-in shapes, in their canonical order
    pub fn builtin() -> Self {
        Self::from_kinds(&ShapeKind::ALL)
    }

    /// Built-in shapes of the given kinds, in the given order
    pub fn from_kinds(kinds: &[ShapeKind]) -> Self {
        let shapes = kinds.iter().map(|kind| kind.build()).collect();
        Self { shapes }
    }

    /// Load every shape file in `dir`
    ///
    /// Fails with [`ShapeError::EmptyCatalog`] if no file loads.
    pub fn load_dir(dir: impl AsRef<Path>, extension: &str) -> Result<Self, ShapeError> {
        let mut catalog = Self::new();
        let loaded = catalog.extend_from_dir(dir.as_ref(), extension)?;
        if loaded == 0 {
            return Err(ShapeError::EmptyCatalog(dir.as_ref().to_path_buf()));
        }
        Ok(catalog)
    }

    /// Append every shape file in `dir`, sorted by file name
    ///
    /// Files that fail to load are logged and skipped. Returns the number of
    /// shapes added; only a failure to list the directory itself is an error.
    pub fn extend_from_dir(&mut self, dir: &Path, extension: &str) -> Result<usize, ShapeError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_extension(path, extension))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match shape_file::load_shape(&path) {
                Ok(shape) => {
                    log::info!(
                        "Loaded shape '{}' from {} ({} vertices, {} edges)",
                        shape.name(),
                        path.display(),
                        shape.vertex_count(),
                        shape.edge_count()
                    );
                    self.shapes.push(shape);
                    loaded += 1;
                }
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Ok(loaded)
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Write every shape into `dir` as numbered shape files
    ///
    /// Returns the paths written, in catalog order.
    pub fn export_dir(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ShapeError> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.shapes.len());
        for (position, shape) in self.shapes.iter().enumerate() {
            let path = dir.join(shape_file::file_name_for(position, shape, extension));
            shape_file::save_shape(shape, &path)?;
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

impl<'a> IntoIterator for &'a ShapeCatalog {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
