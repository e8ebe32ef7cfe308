//! Cardinal spline evaluation for backbone curve segments.
//!
//! Pure Vec3 → Vec3 math with no mesh or structure dependencies. The basis
//! is a tension-parameterized Hermite (cardinal) spline: `tension = 0.5`
//! reproduces Catmull-Rom, higher tension flattens the tangents so the
//! curve hugs the straight lines between control points.

use glam::Vec3;

/// Tangent scale for a given tension. Catmull-Rom at `tension = 0.5`.
#[inline]
fn tangent_scale(tension: f32) -> f32 {
    1.0 - tension
}

/// Evaluate the cardinal spline span between `b` and `c` at `t` in [0, 1].
///
/// `a` and `d` are the outer control points; use [`mirror`] to synthesize
/// them at chain ends.
pub fn eval(a: Vec3, b: Vec3, c: Vec3, d: Vec3, t: f32, tension: f32) -> Vec3 {
    let s = tangent_scale(tension);
    let m1 = (c - a) * s;
    let m2 = (d - b) * s;

    let t2 = t * t;
    let t3 = t2 * t;

    let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h2 = -2.0 * t3 + 3.0 * t2;
    let h3 = t3 - 2.0 * t2 + t;
    let h4 = t3 - t2;

    b * h1 + c * h2 + m1 * h3 + m2 * h4
}

/// Derivative of [`eval`] with respect to `t` (unnormalized tangent).
pub fn eval_tangent(
    a: Vec3,
    b: Vec3,
    c: Vec3,
    d: Vec3,
    t: f32,
    tension: f32,
) -> Vec3 {
    let s = tangent_scale(tension);
    let m1 = (c - a) * s;
    let m2 = (d - b) * s;

    let t2 = t * t;

    let h1 = 6.0 * t2 - 6.0 * t;
    let h2 = -6.0 * t2 + 6.0 * t;
    let h3 = 3.0 * t2 - 4.0 * t + 1.0;
    let h4 = 3.0 * t2 - 2.0 * t;

    b * h1 + c * h2 + m1 * h3 + m2 * h4
}

/// Synthesize a missing outer control point by mirroring `inner` through
/// `end`.
#[inline]
pub fn mirror(end: Vec3, inner: Vec3) -> Vec3 {
    end * 2.0 - inner
}
