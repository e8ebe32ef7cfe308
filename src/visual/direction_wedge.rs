//! The direction-indicator mesh generator.
//!
//! Walks a unit's backbone trace and, for each visitable element, computes
//! the local curve frame and conditionally appends one oriented, scaled
//! copy of the unit wedge into the shared mesh accumulator. Group ids are
//! assigned unconditionally in traversal order, so emitted triangles always
//! resolve back to the element that produced them even when intermediate
//! elements are skipped.

use glam::{Mat4, Vec3};

use crate::error::GenerationAborted;
use crate::geometry::frame::{rot_y90_z180, target_to, CurveSegmentState};
use crate::geometry::mesh::{Mesh, MeshBuilder};
use crate::geometry::primitive::wedge;
use crate::options::WedgeOptions;
use crate::progress::{ProgressInfo, ProgressSink, YIELD_INTERVAL};
use crate::structure::PolymerUnit;
use crate::theme::SizeTheme;

// Fixed aspect-ratio multipliers: the indicator is a flattened wedge.
const DEPTH_FACTOR: f32 = 4.0;
const WIDTH_FACTOR: f32 = 4.0;
const HEIGHT_FACTOR: f32 = 6.0;

// One linear subdivision per element window.
const LINEAR_SEGMENTS: usize = 1;

const PROGRESS_MESSAGE: &str = "Direction wedge mesh";

/// Average and normalize the first two frame samples into an up-vector.
///
/// Opposed samples would cancel to zero; the fallback ladder substitutes
/// the first sample, then an arbitrary tangent-perpendicular axis, so the
/// orientation matrix stays invertible.
fn up_vector(samples: &[Vec3], tangent: Vec3) -> Vec3 {
    let averaged = (samples[0] + samples[1]).normalize_or_zero();
    if averaged.length_squared() > 0.5 {
        return averaged;
    }
    log::trace!("up-vector average degenerate, substituting first sample");
    let first = samples[0].normalize_or_zero();
    if first.length_squared() > 0.5 {
        return first;
    }
    log::trace!("frame samples degenerate, substituting perpendicular axis");
    let axis = if tangent.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    tangent.cross(axis).normalize_or_zero()
}

/// Build the oriented transform for one emitted wedge.
///
/// Looks from `p3` toward `p1` with the frame-derived up-vector (the wedge
/// long axis runs along the reversed local tangent), applies the fixed
/// corrective rotation, scales to `(height, width, depth)`, and places the
/// result at the interpolated midpoint `p2`.
fn wedge_transform(
    state: &CurveSegmentState,
    is_nucleic: bool,
    size: f32,
) -> Mat4 {
    let depth = DEPTH_FACTOR * size;
    let width = WIDTH_FACTOR * size;
    let height = HEIGHT_FACTOR * size;

    // Nucleic secondary structure is encoded along the binormal; protein
    // along the normal.
    let vectors = if is_nucleic {
        state.binormal_vectors()
    } else {
        state.normal_vectors()
    };
    let up = up_vector(vectors, state.tangent_vectors()[0]);

    let mut t = target_to(state.p3(), state.p1(), up)
        * rot_y90_z180()
        * Mat4::from_scale(Vec3::new(height, width, depth));
    t.w_axis = state.p2().extend(1.0);
    t
}

/// Generate the direction-indicator mesh for one unit.
///
/// Deterministic in its inputs; `recycled` only recycles allocations and
/// never changes the output. The progress sink is consulted every
/// [`YIELD_INTERVAL`] elements and may abort the build.
///
/// # Errors
///
/// [`GenerationAborted`] when the progress sink cancels; no partial mesh is
/// returned on that path.
pub fn create_direction_wedge_mesh(
    unit: &PolymerUnit,
    theme: &dyn SizeTheme,
    options: &WedgeOptions,
    progress: &mut dyn ProgressSink,
    recycled: Option<Mesh>,
) -> Result<Mesh, GenerationAborted> {
    let element_count = unit.element_count();
    if element_count == 0 {
        return Ok(Mesh::empty(recycled));
    }

    let prim = wedge();
    let mut builder = MeshBuilder::with_capacity(
        element_count * prim.positions.len(),
        element_count * prim.indices.len(),
        recycled,
    );
    let mut state = CurveSegmentState::new(LINEAR_SEGMENTS);

    let mut emitted = 0_usize;
    for elem in unit.trace() {
        let i = elem.index;
        // Group/backbone index alignment holds even for skipped elements.
        builder.set_group(i as u32);

        let is_nucleic = elem.molecule.is_nucleic();
        let is_sheet = elem.sec_struc.is_sheet();
        let tension = if is_nucleic || is_sheet { 0.5 } else { 0.9 };
        let shift = if is_nucleic { 0.3 } else { 0.5 };

        state.interpolate(&elem, tension, shift);

        // One wedge per element, except sheet continuations: strand runs
        // are marked once, at their transition residue.
        if !is_sheet || elem.sec_struc_change {
            let size = theme.size(elem.center) * options.size_factor;
            let t = wedge_transform(&state, is_nucleic, size);
            builder.add_primitive(&t, prim);
            emitted += 1;
        }

        if i % YIELD_INTERVAL == 0 && progress.should_yield() {
            progress.update(&ProgressInfo {
                message: PROGRESS_MESSAGE,
                current: i,
                max: element_count,
            })?;
        }
    }

    log::debug!(
        "direction wedge mesh: unit {} emitted {emitted}/{element_count}",
        unit.id()
    );
    Ok(builder.build())
}
