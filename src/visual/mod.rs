//! Host-facing visual lifecycle glue.
//!
//! A representation host owns visual lifecycle (creation, updates,
//! highlighting); this module supplies the pieces it plugs in: a geometry
//! producer, a location-iterator factory for picking, pick resolution, and
//! the mark callback. [`DirectionWedgeVisual`] bundles them for the
//! direction-indicator representation.

pub mod cache;
pub mod direction_wedge;

pub use cache::MeshCache;
pub use direction_wedge::create_direction_wedge_mesh;

use crate::error::GenerationAborted;
use crate::geometry::Mesh;
use crate::options::WedgeOptions;
use crate::picking::{
    mark_element, LocationIterator, PickMap, PickTarget,
};
use crate::progress::ProgressSink;
use crate::structure::{PolymerUnit, Structure};
use crate::theme::SizeTheme;

/// Lifecycle contract a representation host drives per unit.
pub trait UnitVisual {
    /// Produce the unit's geometry. A missing unit index yields an empty
    /// mesh.
    ///
    /// # Errors
    ///
    /// [`GenerationAborted`] when the progress sink cancels.
    fn create_geometry(
        &self,
        structure: &Structure,
        unit_index: usize,
        theme: &dyn SizeTheme,
        progress: &mut dyn ProgressSink,
        recycled: Option<Mesh>,
    ) -> Result<Mesh, GenerationAborted>;

    /// Pickable locations of a unit, in mesh group order.
    fn locations<'a>(&self, unit: &'a PolymerUnit) -> LocationIterator<'a>;

    /// Resolve a raw pick id against a unit.
    fn resolve_pick(&self, unit: &PolymerUnit, raw_id: u32) -> PickTarget;

    /// Apply a highlight change for a target; returns whether the mask
    /// changed.
    fn mark(
        &self,
        target: PickTarget,
        mask: &mut [bool],
        highlighted: bool,
    ) -> bool;
}

/// The direction-indicator wedge visual.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionWedgeVisual {
    options: WedgeOptions,
}

impl DirectionWedgeVisual {
    /// Create the visual with validated options (values are clamped).
    #[must_use]
    pub fn new(options: WedgeOptions) -> Self {
        Self {
            options: options.clamped(),
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &WedgeOptions {
        &self.options
    }
}

impl UnitVisual for DirectionWedgeVisual {
    fn create_geometry(
        &self,
        structure: &Structure,
        unit_index: usize,
        theme: &dyn SizeTheme,
        progress: &mut dyn ProgressSink,
        recycled: Option<Mesh>,
    ) -> Result<Mesh, GenerationAborted> {
        structure.unit(unit_index).map_or_else(
            || Ok(Mesh::empty(None)),
            |unit| {
                create_direction_wedge_mesh(
                    unit,
                    theme,
                    &self.options,
                    progress,
                    recycled,
                )
            },
        )
    }

    fn locations<'a>(&self, unit: &'a PolymerUnit) -> LocationIterator<'a> {
        LocationIterator::from_unit(unit)
    }

    fn resolve_pick(&self, unit: &PolymerUnit, raw_id: u32) -> PickTarget {
        PickMap::from_unit(unit).resolve(raw_id)
    }

    fn mark(
        &self,
        target: PickTarget,
        mask: &mut [bool],
        highlighted: bool,
    ) -> bool {
        mark_element(target, mask, highlighted)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::progress::NoProgress;
    use crate::structure::{MoleculeType, PolymerResidue, SecStrucType};
    use crate::theme::UniformSizeTheme;

    fn structure() -> Structure {
        Structure::new(vec![PolymerUnit::new(
            7,
            (0..4)
                .map(|i| PolymerResidue {
                    center: Vec3::new(i as f32, 0.0, 0.0),
                    molecule: MoleculeType::Protein,
                    sec_struc: SecStrucType::Coil,
                })
                .collect(),
        )])
    }

    #[test]
    fn visual_clamps_options() {
        let visual = DirectionWedgeVisual::new(WedgeOptions {
            size_factor: 42.0,
        });
        assert_eq!(visual.options().size_factor, 10.0);
    }

    #[test]
    fn missing_unit_yields_empty_mesh() {
        let visual = DirectionWedgeVisual::default();
        let mesh = visual
            .create_geometry(
                &structure(),
                5,
                &UniformSizeTheme::default(),
                &mut NoProgress,
                None,
            )
            .unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn pick_round_trip_through_visual() {
        let s = structure();
        let unit = s.unit(0).unwrap();
        let visual = DirectionWedgeVisual::default();

        let locations: Vec<_> = visual.locations(unit).collect();
        assert_eq!(locations.len(), 4);

        for loc in &locations {
            let target = visual.resolve_pick(unit, loc.element + 1);
            assert_eq!(
                target,
                PickTarget::Element {
                    unit_id: 7,
                    element: loc.element,
                }
            );
        }

        let mut mask = vec![false; 4];
        assert!(visual.mark(
            visual.resolve_pick(unit, 3),
            &mut mask,
            true
        ));
        assert_eq!(mask, vec![false, false, true, false]);
    }
}
