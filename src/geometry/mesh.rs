//! Append-only mesh accumulation with per-element grouping.
//!
//! [`MeshBuilder`] grows a single vertex/index buffer across a whole
//! backbone traversal; every appended vertex is tagged with the current
//! group id so emitted triangles can be resolved back to their source
//! element. [`Mesh`] is the finalized, immutable result, with byte views
//! ready for GPU upload by a host renderer.

use glam::{Mat3, Mat4};

use super::primitive::Primitive;

/// 28-byte mesh vertex: position, normal, group tag.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit normal (zero when the emitting transform had zero scale).
    pub normal: [f32; 3],
    /// Group id of the backbone element this vertex belongs to.
    pub group: u32,
}

/// An immutable triangle mesh produced by [`MeshBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// An empty mesh, reusing `recycled`'s allocations when provided.
    ///
    /// Recycling is purely an allocation optimization; the returned value
    /// always compares equal to `Mesh::default()`.
    #[must_use]
    pub fn empty(recycled: Option<Self>) -> Self {
        recycled.map_or_else(Self::default, |mut mesh| {
            mesh.vertices.clear();
            mesh.indices.clear();
            mesh
        })
    }

    /// Vertex slice.
    #[must_use]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Triangle index slice.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex buffer as raw bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Growable mesh accumulator keyed by a monotonically set group id.
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    current_group: u32,
}

impl MeshBuilder {
    /// Create a builder with capacity hints, reusing `recycled`'s
    /// allocations when provided.
    #[must_use]
    pub fn with_capacity(
        vertex_hint: usize,
        index_hint: usize,
        recycled: Option<Mesh>,
    ) -> Self {
        let (mut vertices, mut indices) = match recycled {
            Some(mesh) => (mesh.vertices, mesh.indices),
            None => (Vec::new(), Vec::new()),
        };
        vertices.clear();
        indices.clear();
        vertices.reserve(vertex_hint);
        indices.reserve(index_hint);
        Self {
            vertices,
            indices,
            current_group: 0,
        }
    }

    /// Set the group id applied to subsequently appended vertices.
    pub fn set_group(&mut self, group: u32) {
        self.current_group = group;
    }

    /// Append one copy of `prim` transformed by `transform` under the
    /// current group.
    ///
    /// Normals transform through the inverse-transpose of the linear part
    /// so non-uniform scales keep them perpendicular. A singular transform
    /// (zero scale) falls back to the untransposed linear part and yields
    /// zero normals rather than NaNs.
    pub fn add_primitive(&mut self, transform: &Mat4, prim: &Primitive) {
        let base = self.vertices.len() as u32;

        let linear = Mat3::from_mat4(*transform);
        let normal_mat = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            linear
        };

        for (position, normal) in prim.positions.iter().zip(&prim.normals) {
            self.vertices.push(MeshVertex {
                position: transform.transform_point3(*position).to_array(),
                normal: (normal_mat * *normal).normalize_or_zero().to_array(),
                group: self.current_group,
            });
        }
        self.indices.extend(prim.indices.iter().map(|i| base + i));
    }

    /// Number of vertices appended so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Finalize into an immutable [`Mesh`].
    #[must_use]
    pub fn build(self) -> Mesh {
        log::debug!(
            "mesh build: {} vertices, {} triangles",
            self.vertices.len(),
            self.indices.len() / 3
        );
        Mesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::primitive::wedge;

    #[test]
    fn empty_mesh_equals_default() {
        assert_eq!(Mesh::empty(None), Mesh::default());

        let mut builder = MeshBuilder::with_capacity(8, 8, None);
        builder.set_group(3);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        let used = builder.build();
        assert_eq!(Mesh::empty(Some(used)), Mesh::default());
    }

    #[test]
    fn identity_transform_preserves_primitive() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        let mesh = builder.build();
        assert_eq!(mesh.vertex_count(), wedge().positions.len());
        assert_eq!(mesh.triangle_count(), wedge().indices.len() / 3);
        let first = mesh.vertices()[0];
        assert_eq!(Vec3::from(first.position), wedge().positions[0]);
        assert_eq!(Vec3::from(first.normal), wedge().normals[0]);
    }

    #[test]
    fn group_tags_follow_set_group() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        builder.set_group(0);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        builder.set_group(7);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        let mesh = builder.build();

        let per_prim = wedge().positions.len();
        assert!(mesh.vertices()[..per_prim].iter().all(|v| v.group == 0));
        assert!(mesh.vertices()[per_prim..].iter().all(|v| v.group == 7));
    }

    #[test]
    fn second_primitive_indices_are_offset() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        let mesh = builder.build();

        let per_prim = wedge().positions.len() as u32;
        let per_idx = wedge().indices.len();
        assert!(mesh.indices()[..per_idx].iter().all(|&i| i < per_prim));
        assert!(mesh.indices()[per_idx..]
            .iter()
            .all(|&i| (per_prim..2 * per_prim).contains(&i)));
    }

    #[test]
    fn nonuniform_scale_keeps_normals_unit() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        let t = Mat4::from_scale(Vec3::new(3.0, 0.5, 1.5));
        builder.add_primitive(&t, wedge());
        let mesh = builder.build();
        for v in mesh.vertices() {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn zero_scale_is_degenerate_but_finite() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        let mut t = Mat4::from_scale(Vec3::ZERO);
        t.w_axis = Vec3::new(1.0, 2.0, 3.0).extend(1.0);
        builder.add_primitive(&t, wedge());
        let mesh = builder.build();
        for v in mesh.vertices() {
            // Every position collapses onto the translation, normals go to
            // zero, nothing is NaN.
            assert_eq!(v.position, [1.0, 2.0, 3.0]);
            assert_eq!(v.normal, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn recycled_build_matches_fresh_build() {
        let make = |recycled| {
            let mut builder = MeshBuilder::with_capacity(4, 4, recycled);
            builder.set_group(1);
            builder.add_primitive(
                &Mat4::from_translation(Vec3::new(0.5, 0.0, -1.0)),
                wedge(),
            );
            builder.build()
        };

        let fresh = make(None);

        let mut scrap = MeshBuilder::with_capacity(0, 0, None);
        scrap.set_group(9);
        scrap.add_primitive(&Mat4::from_scale(Vec3::splat(4.0)), wedge());
        let recycled = make(Some(scrap.build()));

        assert_eq!(fresh, recycled);
    }

    #[test]
    fn byte_views_cover_buffers() {
        let mut builder = MeshBuilder::with_capacity(0, 0, None);
        builder.add_primitive(&Mat4::IDENTITY, wedge());
        let mesh = builder.build();
        assert_eq!(
            mesh.vertex_bytes().len(),
            mesh.vertex_count() * size_of::<MeshVertex>()
        );
        assert_eq!(mesh.index_bytes().len(), mesh.indices().len() * 4);
    }
}
