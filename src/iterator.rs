use crate::{
    dcel::Dcel,
    element::{Handle, FH, HH, VH},
};

/// Walks the `next` links of a boundary cycle.
///
/// The walk is bounded by the number of halfedges, so it terminates even when
/// the links of a hand-assembled boundary never return to the start.
struct LoopHalfedgeIter<'a> {
    dcel: &'a Dcel,
    hstart: HH,
    hcurrent: Option<HH>,
    remaining: usize,
}

impl Iterator for LoopHalfedgeIter<'_> {
    type Item = HH;

    fn next(&mut self) -> Option<Self::Item> {
        match self.hcurrent {
            Some(current) if self.remaining > 0 => {
                self.remaining -= 1;
                self.hcurrent = match self.dcel.halfedge(current).next {
                    Some(next) if next != self.hstart => Some(next),
                    _ => None,
                };
                Some(current)
            }
            _ => None,
        }
    }
}

pub(crate) fn loop_iter(dcel: &Dcel, h: HH) -> impl Iterator<Item = HH> + use<'_> {
    LoopHalfedgeIter {
        dcel,
        hstart: h,
        hcurrent: Some(h),
        remaining: dcel.num_halfedges(),
    }
}

pub(crate) fn fh_iter(dcel: &Dcel, f: FH) -> impl Iterator<Item = HH> + use<'_> {
    let h = dcel.face(f).wedge;
    LoopHalfedgeIter {
        dcel,
        hstart: h.unwrap_or(0.into()),
        hcurrent: h,
        remaining: dcel.num_halfedges(),
    }
}

pub(crate) fn fv_iter(dcel: &Dcel, f: FH) -> impl Iterator<Item = VH> + use<'_> {
    fh_iter(dcel, f).map(|h| dcel.halfedge(h).origin)
}

pub(crate) fn fev_iter(dcel: &Dcel, f: FH) -> impl Iterator<Item = (VH, VH)> + use<'_> {
    fh_iter(dcel, f).map(|h| (dcel.halfedge(h).origin, dcel.halfedge_destination(h)))
}

pub(crate) fn vv_iter(dcel: &Dcel, v: VH) -> impl Iterator<Item = VH> + use<'_> {
    dcel.vertices[v.index() as usize]
        .incident
        .iter()
        .map(|h| dcel.halfedge_destination(*h))
}

pub(crate) fn vf_iter(dcel: &Dcel, v: VH) -> impl Iterator<Item = FH> + use<'_> {
    dcel.vertices[v.index() as usize]
        .incident
        .iter()
        .filter_map(|h| dcel.halfedge(*h).face)
}
