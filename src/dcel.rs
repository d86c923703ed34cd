use std::fmt::Display;

use crate::{
    element::{Handle, FH, HH, VH},
    error::Error,
    face::Face,
    halfedge::Halfedge,
    iterator,
    point::Point,
    vertex::Vertex,
};

/// How faces are classified as external once they are extracted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FaceClassification {
    /// A face is external if its signed area is positive.
    ///
    /// Boundaries are linked so that every face lies to the right of its
    /// halfedges. Bounded faces are then traversed clockwise and have a
    /// negative signed area, while the unbounded region around each connected
    /// component is traversed counter-clockwise. Faces with zero area are
    /// internal.
    #[default]
    SignedArea,
    /// A face is external if its (absolute) area is negative. This never
    /// happens, so every face is internal.
    AbsoluteArea,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub classification: FaceClassification,
}

/// Aggregate counts and measures of a [`Dcel`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Statistics {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub internal_faces: usize,
    /// Sum of the perimeters of the internal faces.
    pub total_perimeter: f64,
    /// Sum of the areas of the internal faces.
    pub total_area: f64,
}

/// Doubly connected edge list of a planar subdivision.
///
/// Vertices, halfedges and faces live in append-only arenas and refer to each
/// other by handle. The structure is meant to be built once, with
/// [`Dcel::build`] or [`Dcel::from_parts`], and queried afterwards. Adding
/// edges after the build does not update the faces, and cached lengths,
/// angles and areas are never invalidated.
#[derive(Debug, Clone, Default)]
pub struct Dcel {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) halfedges: Vec<Halfedge>,
    pub(crate) faces: Vec<Face>,
    options: BuildOptions,
}

impl Dcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Dcel {
            options,
            ..Self::default()
        }
    }

    pub fn with_capacity(nverts: usize, nedges: usize, nfaces: usize) -> Self {
        Dcel {
            vertices: Vec::with_capacity(nverts),
            halfedges: Vec::with_capacity(nedges * 2),
            faces: Vec::with_capacity(nfaces),
            options: BuildOptions::default(),
        }
    }

    /// Create and build a DCEL from vertex coordinates and pairs of vertex
    /// indices.
    pub fn from_parts(vertices: &[(f64, f64)], edges: &[(usize, usize)]) -> Result<Self, Error> {
        let mut dcel = Dcel::with_capacity(vertices.len(), edges.len(), edges.len());
        dcel.build(vertices, edges)?;
        Ok(dcel)
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    pub fn vertex(&self, v: VH) -> &Vertex {
        &self.vertices[v.index() as usize]
    }

    pub fn halfedge(&self, h: HH) -> &Halfedge {
        &self.halfedges[h.index() as usize]
    }

    pub(crate) fn halfedge_mut(&mut self, h: HH) -> &mut Halfedge {
        &mut self.halfedges[h.index() as usize]
    }

    pub fn face(&self, f: FH) -> &Face {
        &self.faces[f.index() as usize]
    }

    pub fn vertex_records(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    pub fn num_edges(&self) -> usize {
        self.halfedges.len() / 2
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<> {
        (0..(self.num_vertices() as u32)).map(|i| i.into())
    }

    pub fn halfedges(&self) -> impl Iterator<Item = HH> + use<> {
        (0..(self.num_halfedges() as u32)).map(|i| i.into())
    }

    pub fn faces(&self) -> impl Iterator<Item = FH> + use<> {
        (0..(self.num_faces() as u32)).map(|i| i.into())
    }

    pub fn internal_faces(&self) -> impl Iterator<Item = FH> + use<'_> {
        self.faces().filter(|f| !self.face(*f).external)
    }

    pub fn external_faces(&self) -> impl Iterator<Item = FH> + use<'_> {
        self.faces().filter(|f| self.face(*f).external)
    }

    /// Vertices reached by the halfedges leaving `v`, in sorted order.
    pub fn vertex_neighbors(&self, v: VH) -> impl Iterator<Item = VH> + use<'_> {
        iterator::vv_iter(self, v)
    }

    /// Faces bordering the halfedges leaving `v`.
    pub fn vertex_faces(&self, v: VH) -> impl Iterator<Item = FH> + use<'_> {
        iterator::vf_iter(self, v)
    }

    pub fn add_vertex(&mut self, x: f64, y: f64) -> VH {
        let vi: VH = (self.vertices.len() as u32).into();
        self.vertices.push(Vertex::new(vi, Point::new(x, y)));
        vi
    }

    fn check_vertex_index(&self, index: usize) -> Result<VH, Error> {
        if index < self.vertices.len() {
            Ok((index as u32).into())
        } else {
            Err(Error::VertexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }

    /// Add an edge between the vertices at indices `from` and `to`, as a pair
    /// of twin halfedges `from -> to` and `to -> from`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(HH, HH), Error> {
        let v0 = self.check_vertex_index(from)?;
        let v1 = self.check_vertex_index(to)?;
        let h0 = self.add_halfedge(v0, v1)?;
        let h1 = self.add_halfedge(v1, v0)?;
        self.set_twin(h0, h1);
        Ok((h0, h1))
    }

    /// Add the given vertices and edges, link the halfedges around every
    /// vertex, and extract the faces.
    ///
    /// Edge indices refer to all vertices of this DCEL, including the ones
    /// being added. Nothing is modified if an index is out of range, or if a
    /// halfedge already in this DCEL has no twin. Building the same instance
    /// twice appends a second copy of the input instead of replacing the
    /// first.
    pub fn build(&mut self, vertices: &[(f64, f64)], edges: &[(usize, usize)]) -> Result<(), Error> {
        let count = self.vertices.len() + vertices.len();
        if let Some(&index) = edges
            .iter()
            .flat_map(|(i, j)| [i, j])
            .find(|i| **i >= count)
        {
            return Err(Error::VertexOutOfRange { index, count });
        }
        // Linking needs the twin of every halfedge.
        if let Some(h) = self.halfedges().find(|h| self.halfedge(*h).twin().is_none()) {
            return Err(Error::MissingTwin(h));
        }
        for (x, y) in vertices {
            self.add_vertex(*x, *y);
        }
        for (i, j) in edges {
            self.add_edge(*i, *j)?;
        }
        for v in self.vertices() {
            self.sort_incident(v);
            self.link_incident(v)?;
        }
        let first = self.faces.len();
        self.extract_faces()?;
        self.classify_faces(first);
        tracing::debug!(
            vertices = self.num_vertices(),
            edges = self.num_edges(),
            faces = self.num_faces(),
            external = self.external_faces().count(),
            "built dcel"
        );
        Ok(())
    }

    /// Link the sorted incident halfedges of `v`. Each halfedge continues
    /// into the twin of its successor around `v`, and its predecessor is the
    /// halfedge before it around `v`.
    fn link_incident(&mut self, v: VH) -> Result<(), Error> {
        let incident = &self.vertices[v.index() as usize].incident;
        let n = incident.len();
        for k in 0..n {
            let h = incident[k];
            let succ = incident[(k + 1) % n];
            let next = self.halfedges[succ.index() as usize]
                .twin
                .ok_or(Error::MissingTwin(succ))?;
            let hedge = &mut self.halfedges[h.index() as usize];
            hedge.next = Some(next);
            hedge.prev = Some(incident[(k + n - 1) % n]);
        }
        Ok(())
    }

    /// Walk the boundary of every halfedge that has no face yet, in index
    /// order, creating one face per cycle.
    fn extract_faces(&mut self) -> Result<(), Error> {
        let mut visited: Vec<bool> = self.halfedges.iter().map(|h| h.face.is_some()).collect();
        for h in self.halfedges() {
            if visited[h.index() as usize] {
                continue;
            }
            let f = self.add_face(Some(h))?;
            for hh in iterator::loop_iter(self, h) {
                visited[hh.index() as usize] = true;
            }
            tracing::trace!(face = %f, wedge = %h, "extracted face");
        }
        Ok(())
    }

    fn classify_faces(&mut self, first: usize) {
        for f in self.faces().skip(first) {
            let external = match self.options.classification {
                FaceClassification::SignedArea => self.face_signed_area(f) > 0.0,
                FaceClassification::AbsoluteArea => self.face_area(f) < 0.0,
            };
            self.faces[f.index() as usize].external = external;
        }
    }

    pub fn statistics(&self) -> Statistics {
        self.internal_faces().fold(
            Statistics {
                vertices: self.num_vertices(),
                edges: self.num_edges(),
                faces: self.num_faces(),
                ..Statistics::default()
            },
            |mut stats, f| {
                stats.internal_faces += 1;
                stats.total_perimeter += self.face_perimeter(f);
                stats.total_area += self.face_area(f);
                stats
            },
        )
    }

    /// The first internal face that contains `point`, including its
    /// boundary.
    pub fn locate(&self, point: impl Into<Point>) -> Option<FH> {
        let p = point.into();
        self.internal_faces().find(|f| self.face_contains(*f, p))
    }
}

impl Display for Dcel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DCEL(vertices={}, edges={}, faces={})",
            self.num_vertices(),
            self.num_edges(),
            self.num_faces()
        )
    }
}
