//! Per-vertex shading normals from the current grid positions.
//!
//! Offsets are taken as point minus neighbor: `R`, `D`, `L`, `U` for the right
//! (`col + 1`), down (`row + 1`), left and up neighbors. Interior points use
//! the average of `D × R` and `U × L`.
//!
//! Edge policy: boundary points have no neighbor on one or two sides. Instead
//! of reading outside the grid they sum whichever of the four quadrant
//! products `D × R`, `R × U`, `U × L`, `L × D` have both neighbors present.
//! Every point of a grid with resolution ≥ 2 has at least one such quadrant,
//! and all four agree in orientation, so a flat sheet gets the same normal
//! everywhere.

use crate::float::Float;
use crate::grid::index;
use crate::vec::Vec3;

/// Recompute `normals` from `positions` on a `resolution × resolution` grid.
///
/// A normal whose products cancel (fully collapsed neighborhood) keeps its
/// previous value.
pub fn estimate<F: Float>(positions: &[Vec3<F>], resolution: usize, normals: &mut [Vec3<F>]) {
    debug_assert_eq!(positions.len(), resolution * resolution);
    debug_assert_eq!(normals.len(), positions.len());

    for row in 0..resolution {
        for col in 0..resolution {
            let here = index(resolution, row, col);
            let p = positions[here];
            let offset = |r: usize, c: usize| p - positions[index(resolution, r, c)];

            let right = (col + 1 < resolution).then(|| offset(row, col + 1));
            let down = (row + 1 < resolution).then(|| offset(row + 1, col));
            let left = (col > 0).then(|| offset(row, col - 1));
            let up = (row > 0).then(|| offset(row - 1, col));

            let quadrants = [(down, right), (right, up), (up, left), (left, down)];
            let sum = match (right, down, left, up) {
                (Some(r), Some(d), Some(l), Some(u)) => (d.cross(r) + u.cross(l)).scale(F::half()),
                _ => quadrants
                    .iter()
                    .filter_map(|&(a, b)| Some(a?.cross(b?)))
                    .fold(Vec3::zero(), |acc, n| acc + n),
            };

            let n = sum.normalize();
            if n != Vec3::zero() {
                normals[here] = n;
            }
        }
    }
}
