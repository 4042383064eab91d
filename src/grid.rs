//! Cloth topology: the point grid and its structural, shear and bend springs.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::point::GridPoint;
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Point and spring arenas for a square grid. Springs reference points by index.
#[derive(Clone, Debug)]
pub struct Topology<F: Float> {
    pub points: AllocVec<GridPoint<F>>,
    pub springs: AllocVec<Spring<F>>,
}

/// Row-major index of grid cell `(row, col)`.
pub fn index(resolution: usize, row: usize, col: usize) -> usize {
    row * resolution + col
}

impl<F: Float> Topology<F> {
    /// Build a `resolution × resolution` sheet.
    ///
    /// Point `(i, j)` (row `i`, column `j`) starts at `(i/res, j/res, 0)` at rest
    /// with `config.point_mass`. Springs are emitted per cell, never pointing
    /// past the last row or column:
    /// - Structural: `(i, j)–(i, j+1)` and `(i, j)–(i+1, j)`, rest `1/res`
    /// - Bend: `(i, j)–(i, j+2)` and `(i, j)–(i+2, j)`, rest `2/res`
    /// - Shear: `(i, j)–(i+1, j+1)` and `(i, j+1)–(i+1, j)`, rest `√2/res`
    pub fn build(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let res = config.resolution;
        if res < 2 {
            return Err(ClothError::InvalidResolution { resolution: res });
        }
        if !(config.point_mass > F::zero()) || !config.point_mass.is_finite() {
            return Err(ClothError::InvalidMass);
        }

        let inv_res = F::one() / F::from_usize(res);
        let mut points = AllocVec::with_capacity(res * res);
        for i in 0..res {
            for j in 0..res {
                let position = Vec3::new(F::from_usize(i) * inv_res, F::from_usize(j) * inv_res, F::zero());
                points.push(GridPoint::new(position, config.point_mass, index(res, i, j)));
            }
        }

        let structural_length = inv_res;
        let bend_length = F::two() * inv_res;
        let shear_length = F::two().sqrt() * inv_res;

        let mut topology = Topology { points, springs: AllocVec::new() };
        for i in 0..res {
            for j in 0..res {
                let here = index(res, i, j);

                if j + 1 < res {
                    topology.link(SpringKind::Structural, here, index(res, i, j + 1), structural_length, config);
                }
                if i + 1 < res {
                    topology.link(SpringKind::Structural, here, index(res, i + 1, j), structural_length, config);
                }

                if j + 2 < res {
                    topology.link(SpringKind::Bend, here, index(res, i, j + 2), bend_length, config);
                }
                if i + 2 < res {
                    topology.link(SpringKind::Bend, here, index(res, i + 2, j), bend_length, config);
                }

                if i + 1 < res && j + 1 < res {
                    topology.link(SpringKind::Shear, here, index(res, i + 1, j + 1), shear_length, config);
                    topology.link(SpringKind::Shear, index(res, i, j + 1), index(res, i + 1, j), shear_length, config);
                }
            }
        }

        Ok(topology)
    }

    fn link(&mut self, kind: SpringKind, a: usize, b: usize, rest_length: F, config: &ClothConfig<F>) {
        let count = self.points.len();
        assert!(a != b, "spring {:?} connects point {} to itself", kind, a);
        assert!(a < count && b < count, "spring {:?} ({}, {}) out of range for {} points", kind, a, b, count);
        let stiffness = match kind {
            SpringKind::Structural => config.structural_stiffness,
            SpringKind::Shear => config.shear_stiffness,
            SpringKind::Bend => config.bend_stiffness,
        };
        self.springs.push(Spring::new(kind, a, b, rest_length, stiffness, config.spring_damping));
    }

    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    /// Number of springs of one family.
    pub fn count_of(&self, kind: SpringKind) -> usize {
        self.springs.iter().filter(|s| s.kind == kind).count()
    }
}

/// Triangle list covering the sheet, two triangles per cell, as flat `u32` triples.
///
/// Cell `(i, j)` yields `(i,j) (i,j+1) (i+1,j)` and `(i,j+1) (i+1,j+1) (i+1,j)`.
pub fn triangle_indices(resolution: usize) -> AllocVec<u32> {
    let cells = resolution.saturating_sub(1);
    let mut tris = AllocVec::with_capacity(cells * cells * 6);
    for i in 0..cells {
        for j in 0..cells {
            let tl = index(resolution, i, j) as u32;
            let tr = index(resolution, i, j + 1) as u32;
            let bl = index(resolution, i + 1, j) as u32;
            let br = index(resolution, i + 1, j + 1) as u32;
            tris.extend_from_slice(&[tl, tr, bl, tr, br, bl]);
        }
    }
    tris
}
