//! Curve segment interpolation state and frame/orientation helpers.
//!
//! [`CurveSegmentState`] is the per-call scratch the wedge generator reuses
//! across iterations: for each backbone element it samples the local
//! cardinal spline window and rebuilds the moving frame (tangent, normal,
//! binormal) at every sample. The state is owned by exactly one generation
//! call; independent calls never share it.

use glam::{Mat4, Vec3};

use super::spline;
use crate::structure::TraceElement;

/// Pick an axis guaranteed not to be parallel to `t`.
#[inline]
fn arbitrary_axis(t: Vec3) -> Vec3 {
    if t.x.abs() < 0.9 {
        Vec3::X
    } else {
        Vec3::Y
    }
}

/// Orthonormalize `reference` against unit tangent `t`, with an arbitrary
/// perpendicular fallback when the projection collapses.
fn orthonormal_to(t: Vec3, reference: Vec3) -> Vec3 {
    let projected = (reference - t * t.dot(reference)).normalize_or_zero();
    if projected.length_squared() > 0.5 {
        projected
    } else {
        t.cross(arbitrary_axis(t)).normalize_or_zero()
    }
}

/// Reusable interpolation state for one curve sub-segment window.
///
/// Sized for `linear_segments` subdivisions (`linear_segments + 1` samples).
/// The wedge generator uses a single subdivision; the two samples flank the
/// current backbone anchor and their frame vectors are what the up-vector is
/// averaged from.
pub struct CurveSegmentState {
    linear_segments: usize,
    curve_points: Vec<Vec3>,
    tangent_vectors: Vec<Vec3>,
    normal_vectors: Vec<Vec3>,
    binormal_vectors: Vec<Vec3>,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    // Reference normal carried across iterations so the frame does not flip
    // between neighboring elements.
    ref_normal: Option<Vec3>,
}

impl CurveSegmentState {
    /// Allocate state for `linear_segments` subdivisions (must be ≥ 1).
    #[must_use]
    pub fn new(linear_segments: usize) -> Self {
        let samples = linear_segments.max(1) + 1;
        Self {
            linear_segments: linear_segments.max(1),
            curve_points: vec![Vec3::ZERO; samples],
            tangent_vectors: vec![Vec3::ZERO; samples],
            normal_vectors: vec![Vec3::ZERO; samples],
            binormal_vectors: vec![Vec3::ZERO; samples],
            p1: Vec3::ZERO,
            p2: Vec3::ZERO,
            p3: Vec3::ZERO,
            ref_normal: None,
        }
    }

    /// Interpolate the sub-segment window for one backbone element.
    ///
    /// The window spans curve parameter `g ∈ [shift, shift + 1]` over the
    /// two spline spans `prev→curr` and `curr→next`; sample `k` sits at
    /// `g = shift + k / linear_segments`. Writes curve points and frame
    /// vectors in place and updates the frame points: `p1` is the previous
    /// anchor, `p3` the next anchor, and `p2` the interpolated window
    /// midpoint used as the wedge placement origin.
    pub fn interpolate(
        &mut self,
        elem: &TraceElement,
        tension: f32,
        shift: f32,
    ) {
        let prev = elem.prev;
        let curr = elem.curr;
        let next = elem.next;
        let outer0 = spline::mirror(prev, curr);
        let outer1 = spline::mirror(next, curr);

        let sample = |g: f32| {
            if g < 1.0 {
                spline::eval(outer0, prev, curr, next, g, tension)
            } else {
                spline::eval(prev, curr, next, outer1, g - 1.0, tension)
            }
        };
        let sample_tangent = |g: f32| {
            if g < 1.0 {
                spline::eval_tangent(outer0, prev, curr, next, g, tension)
            } else {
                spline::eval_tangent(prev, curr, next, outer1, g - 1.0, tension)
            }
        };

        let chord = (next - prev).normalize_or_zero();

        for k in 0..=self.linear_segments {
            let g = shift + k as f32 / self.linear_segments as f32;
            self.curve_points[k] = sample(g);

            let mut tangent = sample_tangent(g).normalize_or_zero();
            if tangent.length_squared() < 0.5 {
                // Coincident anchors: fall back to the chord, then to a
                // fixed axis.
                tangent = if chord.length_squared() > 0.5 {
                    chord
                } else {
                    Vec3::X
                };
            }

            let reference =
                self.ref_normal.unwrap_or_else(|| arbitrary_axis(tangent));
            let normal = orthonormal_to(tangent, reference);
            let binormal = tangent.cross(normal).normalize_or_zero();

            self.tangent_vectors[k] = tangent;
            self.normal_vectors[k] = normal;
            self.binormal_vectors[k] = binormal;
        }

        self.ref_normal = Some(self.normal_vectors[self.linear_segments]);

        self.p1 = prev;
        self.p2 = sample(shift + 0.5);
        self.p3 = next;
    }

    /// Interpolated curve samples for the current window.
    #[must_use]
    pub fn curve_points(&self) -> &[Vec3] {
        &self.curve_points
    }

    /// Unit tangents at each window sample.
    #[must_use]
    pub fn tangent_vectors(&self) -> &[Vec3] {
        &self.tangent_vectors
    }

    /// Unit normals at each window sample.
    #[must_use]
    pub fn normal_vectors(&self) -> &[Vec3] {
        &self.normal_vectors
    }

    /// Unit binormals at each window sample.
    #[must_use]
    pub fn binormal_vectors(&self) -> &[Vec3] {
        &self.binormal_vectors
    }

    /// Previous backbone anchor of the current element.
    #[must_use]
    pub fn p1(&self) -> Vec3 {
        self.p1
    }

    /// Interpolated window midpoint (wedge placement origin).
    #[must_use]
    pub fn p2(&self) -> Vec3 {
        self.p2
    }

    /// Next backbone anchor of the current element.
    #[must_use]
    pub fn p3(&self) -> Vec3 {
        self.p3
    }
}

/// Model-space look-at: a transform whose +Z column points from `target`
/// toward `eye`, with translation at `eye`.
///
/// Degenerate inputs (coincident eye/target, up parallel to the view
/// direction) substitute perpendicular fallback axes instead of producing a
/// non-invertible matrix.
#[must_use]
pub fn target_to(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let mut forward = (eye - target).normalize_or_zero();
    if forward.length_squared() < 0.5 {
        log::trace!("target_to: coincident eye/target, using +Z forward");
        forward = Vec3::Z;
    }

    let mut right = up.cross(forward).normalize_or_zero();
    if right.length_squared() < 0.5 {
        log::trace!("target_to: up parallel to view direction, substituting");
        right = arbitrary_axis(forward).cross(forward).normalize_or_zero();
    }

    let ortho_up = forward.cross(right);

    Mat4::from_cols(
        right.extend(0.0),
        ortho_up.extend(0.0),
        forward.extend(0.0),
        eye.extend(1.0),
    )
}

/// Fixed corrective rotation aligning the wedge's authored axes with the
/// [`target_to`] convention: 180° about Z, then 90° about Y.
#[must_use]
pub fn rot_y90_z180() -> Mat4 {
    Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2)
        * Mat4::from_rotation_z(std::f32::consts::PI)
}
