//! Resolving emitted geometry back to backbone elements.
//!
//! Mesh groups are assigned 0-based in traversal order, one per backbone
//! element, whether or not a wedge was emitted for it. Raw pick ids follow
//! the 1-based convention (`0` = no hit, `raw = group + 1`) so a cleared
//! pick buffer reads as background.

use glam::Vec3;

use crate::structure::PolymerUnit;

/// A typed pick target resolved from a raw pick id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// No target (background or out-of-range id).
    None,
    /// A backbone element of a unit.
    Element {
        /// Owning unit id.
        unit_id: u32,
        /// 0-based element index within the unit.
        element: u32,
    },
}

impl PickTarget {
    /// Returns `true` if this target is `None`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Element index for `Element`, `None` otherwise.
    #[must_use]
    pub fn element(&self) -> Option<u32> {
        match *self {
            Self::Element { element, .. } => Some(element),
            Self::None => None,
        }
    }
}

/// Maps raw pick ids to backbone elements of one unit.
#[derive(Debug, Clone, Copy)]
pub struct PickMap {
    unit_id: u32,
    element_count: u32,
}

impl PickMap {
    /// Build the pick map for a unit.
    #[must_use]
    pub fn from_unit(unit: &PolymerUnit) -> Self {
        Self {
            unit_id: unit.id(),
            element_count: unit.element_count() as u32,
        }
    }

    /// Resolve a raw pick id (`0` = no hit, otherwise `group + 1`).
    #[must_use]
    pub fn resolve(&self, raw_id: u32) -> PickTarget {
        if raw_id == 0 || raw_id > self.element_count {
            return PickTarget::None;
        }
        PickTarget::Element {
            unit_id: self.unit_id,
            element: raw_id - 1,
        }
    }
}

/// One pickable location: an element and its representative position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Owning unit id.
    pub unit_id: u32,
    /// 0-based element index; equals the mesh group id.
    pub element: u32,
    /// Representative position (the element's trace anchor).
    pub position: Vec3,
}

/// Iterator over a unit's pickable locations in group order.
pub struct LocationIterator<'a> {
    unit: &'a PolymerUnit,
    cursor: usize,
}

impl<'a> LocationIterator<'a> {
    /// Locations of `unit`, one per backbone element.
    #[must_use]
    pub fn from_unit(unit: &'a PolymerUnit) -> Self {
        Self { unit, cursor: 0 }
    }
}

impl Iterator for LocationIterator<'_> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let residue = self.unit.residues().get(self.cursor)?;
        let element = self.cursor as u32;
        self.cursor += 1;
        Some(Location {
            unit_id: self.unit.id(),
            element,
            position: residue.center,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.unit.element_count() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LocationIterator<'_> {}

/// Set or clear the highlight bit for a target in a host-owned per-element
/// mask. Returns whether the mask changed.
pub fn mark_element(
    target: PickTarget,
    mask: &mut [bool],
    highlighted: bool,
) -> bool {
    let Some(element) = target.element() else {
        return false;
    };
    match mask.get_mut(element as usize) {
        Some(slot) if *slot != highlighted => {
            *slot = highlighted;
            true
        }
        _ => false,
    }
}
