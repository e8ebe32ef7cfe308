//! Residue-summary hashing for cheap change detection.

use std::hash::{Hash, Hasher};

use glam::Vec3;

use crate::structure::PolymerResidue;

/// Hash a single [`Vec3`] by converting each component to bits.
pub fn hash_vec3(v: Vec3, hasher: &mut impl Hasher) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
    v.z.to_bits().hash(hasher);
}

fn hash_residue(r: &PolymerResidue, hasher: &mut impl Hasher) {
    hash_vec3(r.center, hasher);
    (r.molecule as u8).hash(hasher);
    (r.sec_struc as u8).hash(hasher);
}

/// Hash a residue slice by sampling first, middle, and last entries.
///
/// Provides good change detection without hashing every element.
pub fn hash_residue_slice_summary(
    residues: &[PolymerResidue],
    hasher: &mut impl Hasher,
) {
    residues.len().hash(hasher);
    if let Some(first) = residues.first() {
        hash_residue(first, hasher);
    }
    if residues.len() > 2 {
        hash_residue(&residues[residues.len() / 2], hasher);
    }
    if let Some(last) = residues.last() {
        hash_residue(last, hasher);
    }
}
