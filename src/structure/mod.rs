//! Backbone data model: residues, units, and structures.
//!
//! This is the input side of the generator: a [`PolymerUnit`] is an ordered
//! run of backbone residues (one trace anchor each) with molecule and
//! secondary-structure classification. Units derive per-residue
//! structure-change flags on construction; hosts that carry their own
//! annotation can supply explicit flags instead.

mod trace;

use glam::Vec3;
pub use trace::{PolymerTrace, TraceElement};

/// Molecule class of a backbone residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoleculeType {
    /// Amino-acid residue.
    Protein,
    /// Nucleotide residue (DNA/RNA).
    Nucleic,
}

impl MoleculeType {
    /// Whether this is a nucleic-acid residue.
    #[must_use]
    pub fn is_nucleic(self) -> bool {
        matches!(self, Self::Nucleic)
    }
}

/// Secondary structure assignment for a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecStrucType {
    /// Alpha helix.
    Helix,
    /// Beta strand.
    Sheet,
    /// Coil / loop.
    Coil,
}

impl SecStrucType {
    /// Whether the beta-strand flag is set.
    #[must_use]
    pub fn is_sheet(self) -> bool {
        matches!(self, Self::Sheet)
    }
}

/// One backbone residue: a trace anchor plus classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolymerResidue {
    /// Trace anchor position, also used for theme size lookup.
    pub center: Vec3,
    /// Molecule class.
    pub molecule: MoleculeType,
    /// Secondary structure assignment.
    pub sec_struc: SecStrucType,
}

/// An ordered run of backbone residues belonging to one structural unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolymerUnit {
    id: u32,
    residues: Vec<PolymerResidue>,
    sec_struc_changes: Vec<bool>,
}

impl PolymerUnit {
    /// Build a unit, deriving structure-change flags at the start of each
    /// contiguous secondary-structure run (the first residue always counts
    /// as a change).
    #[must_use]
    pub fn new(id: u32, residues: Vec<PolymerResidue>) -> Self {
        let sec_struc_changes = residues
            .iter()
            .enumerate()
            .map(|(i, r)| i == 0 || residues[i - 1].sec_struc != r.sec_struc)
            .collect();
        Self {
            id,
            residues,
            sec_struc_changes,
        }
    }

    /// Build a unit with host-supplied structure-change flags.
    ///
    /// Flags beyond the residue count are dropped; missing flags default to
    /// `false`.
    #[must_use]
    pub fn with_sec_struc_changes(
        id: u32,
        residues: Vec<PolymerResidue>,
        mut sec_struc_changes: Vec<bool>,
    ) -> Self {
        sec_struc_changes.resize(residues.len(), false);
        Self {
            id,
            residues,
            sec_struc_changes,
        }
    }

    /// Unit id (stable across a structure).
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of backbone elements in traversal order.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.residues.len()
    }

    /// Residues in traversal order.
    #[must_use]
    pub fn residues(&self) -> &[PolymerResidue] {
        &self.residues
    }

    /// Structure-change flag for residue `i` (false out of range).
    #[must_use]
    pub fn sec_struc_change(&self, i: usize) -> bool {
        self.sec_struc_changes.get(i).copied().unwrap_or(false)
    }

    /// Deterministic traversal over backbone elements.
    #[must_use]
    pub fn trace(&self) -> PolymerTrace<'_> {
        PolymerTrace::new(self)
    }
}

/// A collection of polymer units making up one structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    units: Vec<PolymerUnit>,
}

impl Structure {
    /// Build a structure from its units.
    #[must_use]
    pub fn new(units: Vec<PolymerUnit>) -> Self {
        Self { units }
    }

    /// All units.
    #[must_use]
    pub fn units(&self) -> &[PolymerUnit] {
        &self.units
    }

    /// Unit at `index`, if present.
    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&PolymerUnit> {
        self.units.get(index)
    }

    /// Total backbone elements across all units.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.units.iter().map(PolymerUnit::element_count).sum()
    }
}
