use crate::{dcel::Dcel, point::Point};
use std::fmt::{Debug, Display};

/**
 * All elements of the DCEL implement this trait. They are identified by their
 * index into the arena that owns them.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VH {
    idx: u32,
}

/**
 * Halfedge handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FH {
    idx: u32,
}

impl Handle for VH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for VH {
    fn from(idx: u32) -> Self {
        VH { idx }
    }
}

impl From<&u32> for VH {
    fn from(idx: &u32) -> Self {
        VH { idx: *idx }
    }
}

impl Handle for HH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for HH {
    fn from(idx: u32) -> Self {
        HH { idx }
    }
}

impl From<&u32> for HH {
    fn from(idx: &u32) -> Self {
        HH { idx: *idx }
    }
}

impl Handle for FH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for FH {
    fn from(idx: u32) -> Self {
        FH { idx }
    }
}

impl From<&u32> for FH {
    fn from(idx: &u32) -> Self {
        FH { idx: *idx }
    }
}

impl Display for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Display for HH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HH({})", self.index())
    }
}

impl Display for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

impl Debug for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Debug for HH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HH({})", self.index())
    }
}

impl Debug for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

impl VH {
    pub fn point(self, dcel: &Dcel) -> Point {
        dcel.vertex(self).point()
    }

    /// The number of halfedges originating at this vertex.
    pub fn degree(self, dcel: &Dcel) -> usize {
        dcel.vertex(self).degree()
    }

    /// Check if this vertex is valid for the `dcel`.
    ///
    /// The index has to be less than the number of vertices.
    pub fn is_valid(self, dcel: &Dcel) -> bool {
        (self.idx as usize) < dcel.num_vertices()
    }
}

impl HH {
    pub fn origin(self, dcel: &Dcel) -> VH {
        dcel.halfedge(self).origin()
    }

    /// See [`Dcel::halfedge_destination`] for how this is resolved.
    pub fn destination(self, dcel: &Dcel) -> VH {
        dcel.halfedge_destination(self)
    }

    pub fn twin(self, dcel: &Dcel) -> Option<HH> {
        dcel.halfedge(self).twin()
    }

    pub fn next(self, dcel: &Dcel) -> Option<HH> {
        dcel.halfedge(self).next()
    }

    pub fn prev(self, dcel: &Dcel) -> Option<HH> {
        dcel.halfedge(self).prev()
    }

    pub fn face(self, dcel: &Dcel) -> Option<FH> {
        dcel.halfedge(self).face()
    }

    pub fn length(self, dcel: &Dcel) -> f64 {
        dcel.halfedge_length(self)
    }

    pub fn angle(self, dcel: &Dcel) -> f64 {
        dcel.halfedge_angle(self)
    }

    /// Check if this halfedge is valid for the `dcel`.
    ///
    /// The index has to be less than the number of halfedges.
    pub fn is_valid(self, dcel: &Dcel) -> bool {
        (self.idx as usize) < dcel.num_halfedges()
    }
}

impl FH {
    pub fn wedge(self, dcel: &Dcel) -> Option<HH> {
        dcel.face(self).wedge()
    }

    pub fn is_external(self, dcel: &Dcel) -> bool {
        dcel.face(self).is_external()
    }

    pub fn area(self, dcel: &Dcel) -> f64 {
        dcel.face_area(self)
    }

    /// Check if this face is valid for the `dcel`.
    ///
    /// The index has to be less than the number of faces.
    pub fn is_valid(self, dcel: &Dcel) -> bool {
        (self.idx as usize) < dcel.num_faces()
    }
}
