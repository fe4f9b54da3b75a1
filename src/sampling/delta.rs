use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MAX_COS_ANGLE;
use crate::error::{Error, Result};

use super::basis::make_basis;
use super::reduction::lattice_reduction;
use super::vec2i::{gcd, IVec2};

/// Quality of one stride candidate, derived from its reduced lattice basis.
///
/// `error` is the distance of the reduced length ratio from 1 (isotropic
/// cell); `cos_angle` is the absolute cosine between the reduced vectors.
/// Low error with `cos_angle` below [`MAX_COS_ANGLE`] reads as a uniform,
/// non-streaky point placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaScore {
    pub delta: i64,
    pub error: f64,
    pub cos_angle: f64,
    pub m1: IVec2,
    pub m2: IVec2,
}

/// Score a single stride candidate against a grid of the given width.
///
/// Returns `None` when the candidate induces no 2D lattice (degenerate
/// `width == 1` grids); the search treats such candidates as skipped.
pub fn score_stride(delta: i64, width: i64) -> Option<DeltaScore> {
    let (b1, b2) = make_basis(delta, width).ok()?;
    // basis vectors are non-parallel by construction, reduction cannot fail
    let (m1, m2) = lattice_reduction(b1, b2).ok()?;
    let ratio = m1.length() / m2.length();
    Some(DeltaScore {
        delta,
        error: (1.0 - ratio).abs(),
        cos_angle: (m1.dot(m2) as f64).abs() / (m1.length() * m2.length()),
        m1,
        m2,
    })
}

/// Find a stride whose induced lattice is closest to isotropic.
///
/// Sweeps up to `test_count_max` candidates coprime with
/// `area = width * height`, starting from the coverage estimate
/// `ceil(area / samples)`, and keeps the candidate with the smallest ratio
/// error among those whose reduced basis passes the angle constraint. Ties
/// go to the first candidate found. If no candidate passes the constraint
/// the initial estimate is returned unchanged.
///
/// For even areas the sweep is restricted to odd strides: an even stride on
/// an even area generates a sublattice that halves effective coverage.
///
/// # Errors
/// [`Error::InvalidArgument`] unless all four arguments are positive.
pub fn make_delta(width: i64, height: i64, samples: i64, test_count_max: i64) -> Result<i64> {
    let (delta0, step, area) = search_start(width, height, samples, test_count_max)?;

    let mut best_delta = delta0;
    let mut best_error = f64::INFINITY;
    for delta in candidate_strides(area, delta0, step).take(test_count_max as usize) {
        if let Some(score) = score_stride(delta, width) {
            if score.error < best_error && score.cos_angle < MAX_COS_ANGLE {
                debug!(
                    "delta {} accepted: error {:.4}, |cos| {:.4}",
                    delta, score.error, score.cos_angle
                );
                best_error = score.error;
                best_delta = delta;
            }
        }
    }

    Ok(best_delta)
}

/// Parallel variant of [`make_delta`] with identical observable output.
///
/// Candidates are scored independently and reduced to the minimum error
/// under the same angle constraint, with ties broken by the smallest
/// candidate index, which reproduces the sequential first-found rule.
#[cfg(feature = "parallel")]
pub fn make_delta_parallel(
    width: i64,
    height: i64,
    samples: i64,
    test_count_max: i64,
) -> Result<i64> {
    use rayon::prelude::*;
    use std::cmp::Ordering;

    let (delta0, step, area) = search_start(width, height, samples, test_count_max)?;
    let candidates: Vec<i64> = candidate_strides(area, delta0, step)
        .take(test_count_max as usize)
        .collect();

    let best = candidates
        .into_par_iter()
        .enumerate()
        .filter_map(|(index, delta)| score_stride(delta, width).map(|score| (index, score)))
        .filter(|(_, score)| score.cos_angle < MAX_COS_ANGLE)
        .min_by(|(ia, a), (ib, b)| {
            a.error
                .partial_cmp(&b.error)
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        });

    Ok(best.map(|(_, score)| score.delta).unwrap_or(delta0))
}

/// Validate arguments and compute the initial estimate, step, and area.
fn search_start(
    width: i64,
    height: i64,
    samples: i64,
    test_count_max: i64,
) -> Result<(i64, i64, i64)> {
    if width <= 0 || height <= 0 || samples <= 0 || test_count_max <= 0 {
        return Err(Error::InvalidArgument(format!(
            "make_delta requires positive arguments, got width={width}, height={height}, \
             samples={samples}, test_count_max={test_count_max}"
        )));
    }

    let area = width * height;
    let even = area % 2 == 0;

    // enough to cover the surface, rounded up
    let mut delta0 = (area + samples - 1) / samples;
    if even && delta0 % 2 == 0 {
        delta0 += 1; // keep strides odd on even areas
    }

    Ok((delta0, if even { 2 } else { 1 }, area))
}

/// Lazy sequence of strides coprime with `area`, from `start` in increments
/// of `step`. Infinite; callers bound it with `take`.
pub(crate) fn candidate_strides(area: i64, start: i64, step: i64) -> impl Iterator<Item = i64> {
    let mut delta = start;
    std::iter::from_fn(move || {
        while gcd(area, delta) != 1 {
            delta += step;
        }
        let found = delta;
        delta += step;
        Some(found)
    })
}
