use crate::{
    dcel::Dcel,
    element::{FH, Handle},
    error::Error,
    iterator,
};

fn check_vertices(dcel: &Dcel) -> Result<(), Error> {
    for v in dcel.vertices() {
        for h in dcel.vertex(v).incident() {
            // Must originate here.
            if !h.is_valid(dcel) || h.origin(dcel) != v {
                return Err(Error::InvalidIncidentHalfedge(v, *h));
            }
        }
    }
    Ok(())
}

fn check_halfedges(dcel: &Dcel) -> Result<(), Error> {
    for h in dcel.halfedges() {
        let hedge = dcel.halfedge(h);
        let twin = hedge.twin().ok_or(Error::MissingTwin(h))?;
        if !twin.is_valid(dcel)
            || twin.twin(dcel) != Some(h)
            || hedge.origin() != twin.destination(dcel)
        {
            return Err(Error::InvalidTwinLink(h));
        }
        // The next halfedge must continue from where this one ends. Linking
        // walks boundaries against the halfedge direction, so it ends where
        // this one starts.
        match hedge.next() {
            Some(next) if next.is_valid(dcel) && next.destination(dcel) == hedge.origin() => {}
            _ => return Err(Error::InvalidHalfedgeLink(h)),
        }
        if hedge.face().is_none() {
            return Err(Error::InconsistentFaceInLoop(h));
        }
    }
    Ok(())
}

fn check_loops(dcel: &Dcel, hvisited: &mut [bool]) -> Result<(), Error> {
    hvisited.fill(false);
    for f in dcel.faces() {
        let Some(start) = f.wedge(dcel) else {
            continue;
        };
        if start.face(dcel) != Some(f) {
            return Err(Error::InvalidFaceHalfedgeLink(f, start));
        }
        let mut last = start;
        for h in iterator::loop_iter(dcel, start) {
            if std::mem::replace(&mut hvisited[h.index() as usize], true) {
                return Err(Error::InvalidLoopTopology(h));
            }
            if h.face(dcel) != Some(f) {
                return Err(Error::InconsistentFaceInLoop(h));
            }
            last = h;
        }
        if last.next(dcel) != Some(start) {
            return Err(Error::OpenBoundary(start));
        }
    }
    // Every halfedge must be on the loop of the face it belongs to.
    for h in dcel.halfedges() {
        if !hvisited[h.index() as usize] {
            let f: Option<FH> = h.face(dcel);
            return match f {
                Some(f) => Err(Error::InvalidFaceHalfedgeLink(f, h)),
                None => Err(Error::InconsistentFaceInLoop(h)),
            };
        }
    }
    Ok(())
}

impl Dcel {
    /// Check the topology of a built DCEL.
    ///
    /// Verifies that twins are mutual, every halfedge is linked into a loop,
    /// every loop closes at the wedge of its face, and every halfedge is
    /// visited by exactly one face loop.
    pub fn check_topology(&self) -> Result<(), Error> {
        let mut hvisited = vec![false; self.num_halfedges()].into_boxed_slice();
        check_vertices(self)?;
        check_halfedges(self)?;
        check_loops(self, &mut hvisited)?;
        Ok(())
    }
}
