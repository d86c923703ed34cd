use std::hash::{Hash, Hasher};

use crate::{
    dcel::Dcel,
    element::{Handle, HH, VH},
    point::Point,
};

/// A location in the plane together with the halfedges that leave it.
///
/// Two vertices compare equal when their coordinates are equal, regardless of
/// which slot of the [`Dcel`] they occupy. A map keyed by `Vertex` therefore
/// collapses coincident vertices into one entry. NaN coordinates are not
/// supported.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(crate) point: Point,
    pub(crate) index: VH,
    pub(crate) incident: Vec<HH>,
}

impl Vertex {
    pub(crate) fn new(index: VH, point: Point) -> Self {
        Vertex {
            point,
            index,
            incident: Vec::new(),
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    pub fn coordinates(&self) -> (f64, f64) {
        self.point.coordinates()
    }

    pub fn index(&self) -> VH {
        self.index
    }

    /// Number of incident (outgoing) halfedges.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Outgoing halfedges. Sorted by descending angle once the [`Dcel`] is
    /// built.
    pub fn incident(&self) -> &[HH] {
        &self.incident
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.point.x == other.point.x && self.point.y == other.point.y
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding zero folds -0.0 into 0.0 so equal coordinates hash equally.
        (self.point.x + 0.0).to_bits().hash(state);
        (self.point.y + 0.0).to_bits().hash(state);
    }
}

impl Dcel {
    /// Sort the incident halfedges of `v` by angle, in descending order.
    ///
    /// The sort is stable: halfedges with identical angles keep the order in
    /// which they were added.
    pub fn sort_incident(&mut self, v: VH) {
        let mut incident = std::mem::take(&mut self.vertices[v.index() as usize].incident);
        incident.sort_by(|a, b| {
            self.halfedge_angle(*b)
                .total_cmp(&self.halfedge_angle(*a))
        });
        self.vertices[v.index() as usize].incident = incident;
    }
}
