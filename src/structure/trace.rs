//! Deterministic traversal over a unit's backbone elements.

use glam::Vec3;

use super::{MoleculeType, PolymerUnit, SecStrucType};

/// One traversal step along the backbone.
///
/// Ephemeral: valid for a single loop iteration; the three anchors are the
/// control points of the local cardinal spline window (terminal residues
/// duplicate their own anchor for the missing neighbor).
#[derive(Debug, Clone, Copy)]
pub struct TraceElement {
    /// 0-based visitation index; equals the mesh group id.
    pub index: usize,
    /// Previous backbone anchor.
    pub prev: Vec3,
    /// Current backbone anchor.
    pub curr: Vec3,
    /// Next backbone anchor.
    pub next: Vec3,
    /// Representative position used for theme size lookup.
    pub center: Vec3,
    /// Residue molecule class.
    pub molecule: MoleculeType,
    /// Secondary structure assignment.
    pub sec_struc: SecStrucType,
    /// Whether this residue starts a new secondary-structure run.
    pub sec_struc_change: bool,
}

/// Iterator over a unit's backbone elements in residue order.
pub struct PolymerTrace<'a> {
    unit: &'a PolymerUnit,
    cursor: usize,
}

impl<'a> PolymerTrace<'a> {
    pub(super) fn new(unit: &'a PolymerUnit) -> Self {
        Self { unit, cursor: 0 }
    }
}

impl Iterator for PolymerTrace<'_> {
    type Item = TraceElement;

    fn next(&mut self) -> Option<TraceElement> {
        let residues = self.unit.residues();
        let i = self.cursor;
        if i >= residues.len() {
            return None;
        }
        self.cursor += 1;

        let last = residues.len() - 1;
        let residue = &residues[i];
        Some(TraceElement {
            index: i,
            prev: residues[i.saturating_sub(1)].center,
            curr: residue.center,
            next: residues[(i + 1).min(last)].center,
            center: residue.center,
            molecule: residue.molecule,
            sec_struc: residue.sec_struc,
            sec_struc_change: self.unit.sec_struc_change(i),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.unit.element_count() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PolymerTrace<'_> {}
