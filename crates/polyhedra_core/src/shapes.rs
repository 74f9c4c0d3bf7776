//! Built-in shape kinds
//!
//! `ShapeKind` is the serializable tag for each construction recipe. It lets
//! configuration files name the built-in shapes (`"truncated_octahedron"`)
//! and carries the per-shape facts the recipes need: display name, 4D-ness
//! and edge capacity.

use serde::{Serialize, Deserialize};

use crate::meshes::{self, HYPERSPHERE_EDGE_CAPACITY, MOBIUS_EDGE_CAPACITY, SPHERE_EDGE_CAPACITY};
use crate::polytopes;
use crate::shape::Shape;

/// A built-in construction recipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Icosahedron,
    Dodecahedron,
    Tesseract,
    TruncatedOctahedron,
    StellaOctangula,
    Sphere,
    MobiusStrip,
    Hypersphere,
}

impl ShapeKind {
    /// Every built-in kind, in catalog order
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Cube,
        ShapeKind::Icosahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Tesseract,
        ShapeKind::TruncatedOctahedron,
        ShapeKind::StellaOctangula,
        ShapeKind::Sphere,
        ShapeKind::MobiusStrip,
        ShapeKind::Hypersphere,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Icosahedron => "Icosahedron",
            ShapeKind::Dodecahedron => "Dodecahedron",
            ShapeKind::Tesseract => "Tesseract",
            ShapeKind::TruncatedOctahedron => "Truncated Octahedron",
            ShapeKind::StellaOctangula => "Stella Octangula",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::MobiusStrip => "Mobius Strip",
            ShapeKind::Hypersphere => "Hypersphere",
        }
    }

    /// Whether the shape lives in 4D and needs the W stages
    pub fn is_4d(self) -> bool {
        matches!(self, ShapeKind::Tesseract | ShapeKind::Hypersphere)
    }

    /// Maximum number of edges the recipe may store
    pub fn edge_capacity(self) -> usize {
        match self {
            ShapeKind::Cube => 12,
            ShapeKind::Icosahedron => 30,
            ShapeKind::Dodecahedron => 30,
            ShapeKind::Tesseract => 32,
            ShapeKind::TruncatedOctahedron => 36,
            ShapeKind::StellaOctangula => 24,
            ShapeKind::Sphere => SPHERE_EDGE_CAPACITY,
            ShapeKind::MobiusStrip => MOBIUS_EDGE_CAPACITY,
            ShapeKind::Hypersphere => HYPERSPHERE_EDGE_CAPACITY,
        }
    }

    /// Run the recipe
    pub fn build(self) -> Shape {
        let capacity = self.edge_capacity();
        let (vertices, edges) = match self {
            ShapeKind::Cube => polytopes::cube(capacity),
            ShapeKind::Icosahedron => polytopes::icosahedron(capacity),
            ShapeKind::Dodecahedron => polytopes::dodecahedron(capacity),
            ShapeKind::Tesseract => polytopes::tesseract(capacity),
            ShapeKind::TruncatedOctahedron => polytopes::truncated_octahedron(capacity),
            ShapeKind::StellaOctangula => polytopes::stella_octangula(capacity),
            ShapeKind::Sphere => meshes::sphere(capacity),
            ShapeKind::MobiusStrip => meshes::mobius(capacity),
            ShapeKind::Hypersphere => meshes::hypersphere(capacity),
        };
        Shape::from_recipe(self, vertices, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sets_kind_and_name() {
        for kind in ShapeKind::ALL {
            let shape = kind.build();
            assert_eq!(shape.kind(), Some(kind));
            assert_eq!(shape.name(), kind.name());
            assert_eq!(shape.is_4d(), kind.is_4d());
        }
    }

    #[test]
    fn test_three_d_shapes_have_zero_w() {
        for kind in ShapeKind::ALL.into_iter().filter(|k| !k.is_4d()) {
            let shape = kind.build();
            assert!(shape.vertices().iter().all(|v| v.w == 0.0), "{:?}", kind);
        }
    }

    #[test]
    fn test_serde_names() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;

        let parse = |name: &str| {
            let de: StrDeserializer<Error> = name.into_deserializer();
            ShapeKind::deserialize(de).unwrap()
        };
        assert_eq!(parse("truncated_octahedron"), ShapeKind::TruncatedOctahedron);
        assert_eq!(parse("mobius_strip"), ShapeKind::MobiusStrip);
        assert_eq!(parse("cube"), ShapeKind::Cube);
    }
}
