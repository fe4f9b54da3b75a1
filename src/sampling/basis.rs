use crate::error::{Error, Result};

use super::vec2i::IVec2;

/// Build two generators of the displacement lattice induced by `delta` on a
/// grid of the given width.
///
/// Stepping a running index by `delta` and reading the grid row-major, the
/// set of index-differences reachable by repeated steps forms a 2D lattice.
/// `b1` is the displacement after one step; `b2` is the displacement after
/// the smallest number of steps `k >= 2` that is not collinear with `b1`.
///
/// If `delta` is an exact multiple of `width` it is bumped by one before
/// constructing the basis: the raw value would give `b1` a zero x-component
/// and every further multiple would stay parallel to it, so the search for a
/// second generator would never terminate. The adjustment is local to this
/// function; callers keep their own nominal delta (see `make_delta`).
///
/// # Errors
/// * [`Error::InvalidArgument`] if `delta <= 0` or `width <= 0`.
/// * [`Error::DegenerateLattice`] if `width == 1`: every displacement is
///   vertical and no second independent generator exists.
pub fn make_basis(delta: i64, width: i64) -> Result<(IVec2, IVec2)> {
    if delta <= 0 || width <= 0 {
        return Err(Error::InvalidArgument(format!(
            "make_basis requires delta > 0 and width > 0, got delta={delta}, width={width}"
        )));
    }
    if width == 1 {
        return Err(Error::DegenerateLattice(
            "width 1 grid has only collinear displacements".to_string(),
        ));
    }

    let mut delta = delta;
    if delta % width == 0 {
        delta += 1; // avoids a zero x-component and a non-terminating search below
    }

    let b1 = IVec2::new(delta % width, delta / width);
    let mut k: i64 = 2;
    loop {
        let b2 = IVec2::new((k * delta) % width, (k * delta) / width);
        if b1.cross(b2) != 0 {
            return Ok((b1, b2));
        }
        k += 1;
    }
}
