use std::{f64::consts::TAU, sync::OnceLock};

use crate::{
    dcel::Dcel,
    element::{Handle, FH, HH, VH},
    error::Error,
    point::Point,
};

/// One direction of an edge.
#[derive(Debug, Clone)]
pub struct Halfedge {
    pub(crate) origin: VH,
    pub(crate) twin: Option<HH>,
    pub(crate) next: Option<HH>,
    pub(crate) prev: Option<HH>,
    pub(crate) face: Option<FH>,
    /// Destination captured at creation, used only while there is no twin.
    pub(crate) fallback: VH,
    pub(crate) length: OnceLock<f64>,
    pub(crate) angle: OnceLock<f64>,
}

impl Halfedge {
    pub(crate) fn new(origin: VH, destination: VH) -> Self {
        Halfedge {
            origin,
            twin: None,
            next: None,
            prev: None,
            face: None,
            fallback: destination,
            length: OnceLock::new(),
            angle: OnceLock::new(),
        }
    }

    pub fn origin(&self) -> VH {
        self.origin
    }

    pub fn twin(&self) -> Option<HH> {
        self.twin
    }

    pub fn next(&self) -> Option<HH> {
        self.next
    }

    pub fn prev(&self) -> Option<HH> {
        self.prev
    }

    pub fn face(&self) -> Option<FH> {
        self.face
    }
}

impl Dcel {
    /// Create a halfedge from `from` to `to` without a twin.
    ///
    /// The halfedge is appended to the incident list of `from`. This is the
    /// building block of [`Dcel::add_edge`], and can be used to assemble
    /// boundaries by hand together with [`Dcel::set_twin`],
    /// [`Dcel::set_next_halfedge`] and [`Dcel::add_face`].
    pub fn add_halfedge(&mut self, from: VH, to: VH) -> Result<HH, Error> {
        for v in [from, to] {
            if !v.is_valid(self) {
                return Err(Error::VertexOutOfRange {
                    index: v.index() as usize,
                    count: self.num_vertices(),
                });
            }
        }
        let h: HH = (self.halfedges.len() as u32).into();
        self.halfedges.push(Halfedge::new(from, to));
        self.vertices[from.index() as usize].incident.push(h);
        Ok(h)
    }

    /// Make `a` and `b` twins of each other.
    pub fn set_twin(&mut self, a: HH, b: HH) {
        self.halfedge_mut(a).twin = Some(b);
        self.halfedge_mut(b).twin = Some(a);
    }

    /// Link `hprev` and `hnext` as consecutive halfedges of a boundary.
    pub fn set_next_halfedge(&mut self, hprev: HH, hnext: HH) {
        self.halfedge_mut(hprev).next = Some(hnext);
        self.halfedge_mut(hnext).prev = Some(hprev);
    }

    /// The vertex `h` points to.
    ///
    /// Once a twin is attached the destination is the origin of the twin.
    /// Before that, it is the vertex the halfedge was created with. Relinking
    /// the twin therefore changes the destination.
    pub fn halfedge_destination(&self, h: HH) -> VH {
        let hedge = self.halfedge(h);
        match hedge.twin {
            Some(twin) => self.halfedge(twin).origin,
            None => hedge.fallback,
        }
    }

    /// Origin and destination coordinates of `h`.
    pub fn halfedge_points(&self, h: HH) -> (Point, Point) {
        (
            self.vertex(self.halfedge(h).origin).point,
            self.vertex(self.halfedge_destination(h)).point,
        )
    }

    /// Length of `h`. Computed on first access and cached from then on.
    pub fn halfedge_length(&self, h: HH) -> f64 {
        *self.halfedge(h).length.get_or_init(|| {
            let (a, b) = self.halfedge_points(h);
            a.distance_to(b)
        })
    }

    /// Angle of `h` with the positive x axis, in `[0, 2π)`. Computed on first
    /// access and cached from then on.
    pub fn halfedge_angle(&self, h: HH) -> f64 {
        *self.halfedge(h).angle.get_or_init(|| {
            let (a, b) = self.halfedge_points(h);
            let angle = (b.y - a.y).atan2(b.x - a.x);
            if angle >= 0.0 {
                angle
            } else {
                let angle = angle + TAU;
                // Tiny negative angles round up to exactly 2π.
                if angle < TAU { angle } else { 0.0 }
            }
        })
    }

    pub fn halfedge_midpoint(&self, h: HH) -> Point {
        let (a, b) = self.halfedge_points(h);
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}
