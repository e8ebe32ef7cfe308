//! Per-unit mesh cache with digest-based invalidation.
//!
//! Regeneration is skipped when a unit's sampled residue digest and the
//! wedge options are unchanged since the cached build. The cache does not
//! observe the size theme; callers must [`MeshCache::clear`] when the theme
//! or any other global setting changes.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use crate::error::GenerationAborted;
use crate::geometry::Mesh;
use crate::options::WedgeOptions;
use crate::progress::ProgressSink;
use crate::structure::PolymerUnit;
use crate::theme::SizeTheme;
use crate::util::hash::hash_residue_slice_summary;

use super::direction_wedge::create_direction_wedge_mesh;

/// Cache of generated wedge meshes keyed by unit id.
#[derive(Default)]
pub struct MeshCache {
    meshes: FxHashMap<u32, (u64, Mesh)>,
}

impl MeshCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached mesh for `unit`, regenerating when its digest is
    /// stale. A stale entry's allocation is recycled into the rebuild. A
    /// cache hit is byte-identical to regeneration.
    ///
    /// # Errors
    ///
    /// [`GenerationAborted`] when the progress sink cancels; the stale
    /// entry is dropped, so the next call regenerates from scratch.
    pub fn get_or_generate(
        &mut self,
        unit: &PolymerUnit,
        theme: &dyn SizeTheme,
        options: &WedgeOptions,
        progress: &mut dyn ProgressSink,
    ) -> Result<&Mesh, GenerationAborted> {
        let key = unit.id();
        let digest = unit_digest(unit, options);

        let entry = match self.meshes.remove(&key) {
            Some((cached_digest, mesh)) if cached_digest == digest => {
                log::trace!("mesh cache hit for unit {key}");
                (digest, mesh)
            }
            stale => {
                let recycled = stale.map(|(_, mesh)| mesh);
                let mesh = create_direction_wedge_mesh(
                    unit, theme, options, progress, recycled,
                )?;
                (digest, mesh)
            }
        };

        Ok(&self.meshes.entry(key).or_insert(entry).1)
    }

    /// Drop all cached meshes (required after a theme change).
    pub fn clear(&mut self) {
        self.meshes.clear();
    }

    /// Number of cached units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// Digest of everything generation observes about a unit besides the theme.
fn unit_digest(unit: &PolymerUnit, options: &WedgeOptions) -> u64 {
    let mut hasher = FxHasher::default();
    options.size_factor.to_bits().hash(&mut hasher);
    hash_residue_slice_summary(unit.residues(), &mut hasher);
    // Explicit change flags can differ for identical residues.
    let n = unit.element_count();
    for i in [0, n / 2, n.saturating_sub(1)] {
        unit.sec_struc_change(i).hash(&mut hasher);
    }
    hasher.finish()
}
