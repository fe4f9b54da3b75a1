use crate::error::{Error, Result};

use super::vec2i::IVec2;

/// Lagrange (Gaussian) reduction of a 2D lattice basis.
///
/// Returns a basis of the same lattice whose vectors are as short as the
/// lattice allows and near-orthogonal. The returned pair is ordered shortest
/// first and satisfies `|dot(m1, m2)| <= length_squared(m1)`, the
/// Lagrange-reduced fixed point.
///
/// Each step replaces the longer vector by its remainder against the nearest
/// integer multiple of the shorter one. The quotient is the round-to-nearest
/// of `dot(u, v) / |v|^2`, computed in integer arithmetic as
/// `floor((2*num + den) / (2*den))`. The division must round toward negative
/// infinity (`div_euclid`), not toward zero: `num` is negative whenever the
/// vectors point into opposing half-planes.
///
/// Termination: `|cross(u, v)|` (twice the lattice cell area) is invariant
/// across steps, while the squared length of the working short vector is a
/// nonnegative integer that strictly decreases on every non-trivial step, so
/// the fixed point is reached after finitely many (typically single-digit)
/// iterations.
///
/// # Errors
/// [`Error::DegenerateLattice`] if `u` and `v` are parallel; a collapsed
/// basis has `|v|^2 = 0` reachable and no reduced form.
pub fn lattice_reduction(u: IVec2, v: IVec2) -> Result<(IVec2, IVec2)> {
    if u.cross(v) == 0 {
        return Err(Error::DegenerateLattice(format!(
            "parallel basis vectors {u:?} and {v:?}"
        )));
    }

    // enforce start order |v| <= |u|
    let (mut u, mut v) = if v.length_squared() > u.length_squared() {
        (v, u)
    } else {
        (u, v)
    };

    let cell = u.cross(v).abs();
    while v.length_squared() < u.length_squared() {
        let num = u.dot(v);
        let den = v.length_squared();
        let q = (2 * num + den).div_euclid(2 * den);
        (u, v) = (v, u - q * v);
        debug_assert_eq!(u.cross(v).abs(), cell, "reduction step changed the lattice");
    }

    Ok((u, v))
}
