//! Fixed unit-space solid primitives.
//!
//! Primitives are authored flat-shaded: every face carries its own
//! vertices so face normals stay sharp after transformation.

use std::sync::OnceLock;

use glam::Vec3;

/// An indexed, flat-shaded triangle solid in unit space.
#[derive(Debug, Clone)]
pub struct Primitive {
    /// Vertex positions, duplicated per face.
    pub positions: Vec<Vec3>,
    /// Per-vertex face normals (unit length).
    pub normals: Vec<Vec3>,
    /// Triangle indices into `positions`/`normals`.
    pub indices: Vec<u32>,
}

impl Primitive {
    fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append one convex planar face given in counter-clockwise outward
    /// winding; the face normal is derived from the first three corners and
    /// the polygon is fan-triangulated.
    fn push_face(&mut self, corners: &[Vec3]) {
        let normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();
        let base = self.positions.len() as u32;
        for &corner in corners {
            self.positions.push(corner);
            self.normals.push(normal);
        }
        for i in 1..corners.len() as u32 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }
}

/// The fixed unit wedge: a triangular prism with its apex edge along +X.
///
/// Cross-section triangle in the XY plane (apex at `x = 0.5`, base corners
/// at `x = -0.5, y = ±0.5`), extruded over `z ∈ [-0.5, 0.5]`. 18 vertices,
/// 24 indices. The instance is built once and shared; it is immutable.
pub fn wedge() -> &'static Primitive {
    static WEDGE: OnceLock<Primitive> = OnceLock::new();
    WEDGE.get_or_init(build_wedge)
}

fn build_wedge() -> Primitive {
    let apex_front = Vec3::new(0.5, 0.0, 0.5);
    let apex_back = Vec3::new(0.5, 0.0, -0.5);
    let top_front = Vec3::new(-0.5, 0.5, 0.5);
    let top_back = Vec3::new(-0.5, 0.5, -0.5);
    let bottom_front = Vec3::new(-0.5, -0.5, 0.5);
    let bottom_back = Vec3::new(-0.5, -0.5, -0.5);

    let mut prim = Primitive::with_capacity(18, 24);

    // Triangular caps (±Z).
    prim.push_face(&[apex_front, top_front, bottom_front]);
    prim.push_face(&[apex_back, bottom_back, top_back]);

    // Base quad (-X).
    prim.push_face(&[top_front, top_back, bottom_back, bottom_front]);

    // Slanted quads from the apex edge to each base edge.
    prim.push_face(&[apex_front, apex_back, top_back, top_front]);
    prim.push_face(&[apex_back, apex_front, bottom_front, bottom_back]);

    prim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_counts() {
        let w = wedge();
        assert_eq!(w.positions.len(), 18);
        assert_eq!(w.normals.len(), 18);
        assert_eq!(w.indices.len(), 24);
    }

    #[test]
    fn wedge_indices_in_range() {
        let w = wedge();
        assert!(w.indices.iter().all(|&i| (i as usize) < w.positions.len()));
    }

    #[test]
    fn wedge_normals_unit_and_outward() {
        let w = wedge();
        // The solid is centered near the origin, so every face normal must
        // point away from the centroid of its own vertices.
        for (pos, normal) in w.positions.iter().zip(&w.normals) {
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!(normal.dot(*pos - Vec3::new(-1.0 / 6.0, 0.0, 0.0)) > 0.0);
        }
    }

    #[test]
    fn wedge_fits_unit_extent() {
        let w = wedge();
        for p in &w.positions {
            assert!(p.abs().max_element() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn wedge_is_shared() {
        assert!(std::ptr::eq(wedge(), wedge()));
    }
}
