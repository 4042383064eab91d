//! Anchors: grid points forced back to fixed world positions every pass.

use crate::float::Float;
use crate::point::GridPoint;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A grid point pinned to a constant world coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor<F: Float> {
    pub index: usize,
    pub target: Vec3<F>,
}

/// The small set of anchors enforced after every relaxation pass.
#[derive(Clone, Debug, Default)]
pub struct AnchorSet<F: Float> {
    anchors: AllocVec<Anchor<F>>,
}

impl<F: Float> AnchorSet<F> {
    pub fn new() -> Self {
        AnchorSet { anchors: AllocVec::new() }
    }

    /// Pin `index` to `target`, replacing any existing anchor on that point.
    pub fn insert(&mut self, points: &mut [GridPoint<F>], index: usize, target: Vec3<F>) {
        match self.anchors.iter_mut().find(|a| a.index == index) {
            Some(existing) => existing.target = target,
            None => self.anchors.push(Anchor { index, target }),
        }
        points[index].pinned = true;
        points[index].place(target);
    }

    /// Release the anchor on `index`. Returns whether one existed.
    pub fn remove(&mut self, points: &mut [GridPoint<F>], index: usize) -> bool {
        let before = self.anchors.len();
        self.anchors.retain(|a| a.index != index);
        let removed = self.anchors.len() != before;
        if removed {
            points[index].pinned = false;
        }
        removed
    }

    /// Snap every anchored point back to its target. Overrides whatever the
    /// preceding spring pass did to those points.
    pub fn enforce(&self, points: &mut [GridPoint<F>]) {
        for anchor in &self.anchors {
            points[anchor.index].place(anchor.target);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.anchors.iter().any(|a| a.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor<F>> {
        self.anchors.iter()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
