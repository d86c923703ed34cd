use std::sync::OnceLock;

use crate::{
    dcel::Dcel,
    element::{FH, HH, VH},
    error::Error,
    iterator,
    point::{Point, signed_area},
};

/// Absolute tolerance for a point to lie on a slanted boundary edge.
const ON_EDGE_TOLERANCE: f64 = 1e-10;

/// A closed boundary cycle of halfedges, anchored at `wedge`.
///
/// A face without a wedge is empty: it has no boundary, zero area and no
/// centroid.
#[derive(Debug, Clone, Default)]
pub struct Face {
    pub(crate) wedge: Option<HH>,
    pub(crate) external: bool,
    pub(crate) shoelace: OnceLock<f64>,
    pub(crate) perimeter: OnceLock<f64>,
    pub(crate) centroid: OnceLock<Point>,
}

impl Face {
    pub fn wedge(&self) -> Option<HH> {
        self.wedge
    }

    /// Whether this face was classified as the unbounded region around a
    /// connected component.
    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Whether `p` lies on the segment `a`-`b`.
fn on_edge(p: Point, a: Point, b: Point) -> bool {
    let (xmin, xmax) = (a.x.min(b.x), a.x.max(b.x));
    let (ymin, ymax) = (a.y.min(b.y), a.y.max(b.y));
    if p.x < xmin || p.x > xmax || p.y < ymin || p.y > ymax {
        return false;
    }
    if a.x == b.x {
        return p.x == a.x;
    }
    if a.y == b.y {
        return p.y == a.y;
    }
    let slope = (b.y - a.y) / (b.x - a.x);
    let expected = a.y + slope * (p.x - a.x);
    (expected - p.y).abs() < ON_EDGE_TOLERANCE
}

impl Dcel {
    /// Add a face anchored at `wedge`, or an empty face if `wedge` is `None`.
    ///
    /// Every halfedge on the `next` cycle through `wedge` is assigned to the
    /// new face. Fails without modifying anything if the cycle does not
    /// return to `wedge`.
    pub fn add_face(&mut self, wedge: Option<HH>) -> Result<FH, Error> {
        let fi: FH = (self.faces.len() as u32).into();
        if let Some(start) = wedge {
            let last = iterator::loop_iter(self, start)
                .last()
                .unwrap_or(start);
            if self.halfedge(last).next != Some(start) {
                return Err(Error::OpenBoundary(start));
            }
            let mut current = start;
            loop {
                let hedge = self.halfedge_mut(current);
                hedge.face = Some(fi);
                match hedge.next {
                    Some(next) if next != start => current = next,
                    _ => break,
                }
            }
        }
        self.faces.push(Face {
            wedge,
            ..Face::default()
        });
        Ok(fi)
    }

    /// Halfedges on the boundary of `f`, starting at its wedge.
    pub fn face_halfedges(&self, f: FH) -> impl Iterator<Item = HH> + use<'_> {
        iterator::fh_iter(self, f)
    }

    /// Origins of the boundary halfedges of `f`.
    pub fn face_vertices(&self, f: FH) -> impl Iterator<Item = VH> + use<'_> {
        iterator::fv_iter(self, f)
    }

    /// `(origin, destination)` of each boundary halfedge of `f`.
    pub fn face_edge_vertices(&self, f: FH) -> impl Iterator<Item = (VH, VH)> + use<'_> {
        iterator::fev_iter(self, f)
    }

    pub fn face_vertex_count(&self, f: FH) -> usize {
        iterator::fh_iter(self, f).count()
    }

    /// Signed area of `f` by the shoelace formula. The sign encodes the
    /// orientation of the boundary: positive for counter-clockwise.
    pub fn face_signed_area(&self, f: FH) -> f64 {
        *self.face(f).shoelace.get_or_init(|| {
            iterator::fh_iter(self, f)
                .map(|h| {
                    let (a, b) = self.halfedge_points(h);
                    a.x * b.y - b.x * a.y
                })
                .sum::<f64>()
                / 2.0
        })
    }

    pub fn face_area(&self, f: FH) -> f64 {
        self.face_signed_area(f).abs()
    }

    pub fn face_perimeter(&self, f: FH) -> f64 {
        *self.face(f).perimeter.get_or_init(|| {
            iterator::fh_iter(self, f)
                .map(|h| self.halfedge_length(h))
                .sum()
        })
    }

    /// Centroid of the region enclosed by the boundary of `f`.
    pub fn face_centroid(&self, f: FH) -> Result<Point, Error> {
        if self.face(f).wedge.is_none() {
            return Err(Error::EmptyFace(f));
        }
        let area = self.face_signed_area(f);
        if area == 0.0 {
            return Err(Error::DegenerateFace(f));
        }
        Ok(*self.face(f).centroid.get_or_init(|| {
            let (cx, cy) = iterator::fh_iter(self, f).fold((0.0, 0.0), |(cx, cy), h| {
                let (a, b) = self.halfedge_points(h);
                let cross = a.x * b.y - b.x * a.y;
                (cx + (a.x + b.x) * cross, cy + (a.y + b.y) * cross)
            });
            let factor = 1.0 / (6.0 * area);
            Point::new(cx * factor, cy * factor)
        }))
    }

    /// Check if `point` is inside `f` or on its boundary.
    ///
    /// Points that coincide with a boundary vertex, or lie on a boundary edge,
    /// are inside. Everything else is decided by the winding number of the
    /// boundary around the point.
    pub fn face_contains(&self, f: FH, point: impl Into<Point>) -> bool {
        let p = point.into();
        for h in iterator::fh_iter(self, f) {
            let (a, b) = self.halfedge_points(h);
            if p == a || p == b || on_edge(p, a, b) {
                return true;
            }
        }
        let winding = iterator::fh_iter(self, f).fold(0i64, |winding, h| {
            let (a, b) = self.halfedge_points(h);
            if a.y <= p.y {
                if b.y > p.y && signed_area(a, b, p) > 0.0 {
                    return winding + 1;
                }
            } else if b.y <= p.y && signed_area(a, b, p) < 0.0 {
                return winding - 1;
            }
            winding
        });
        winding != 0
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::SQRT_2;

    use crate::{
        dcel::Dcel,
        element::{FH, HH, VH},
        error::Error,
        macros::assert_f64_eq,
        point::Point,
    };

    /// Builds a single face by hand from a closed polygon, linking the
    /// halfedges in order without twins.
    fn polygon(coords: &[(f64, f64)]) -> (Dcel, FH) {
        let mut dcel = Dcel::new();
        let verts: Vec<VH> = coords.iter().map(|(x, y)| dcel.add_vertex(*x, *y)).collect();
        let hedges: Vec<HH> = (0..verts.len())
            .map(|i| {
                dcel.add_halfedge(verts[i], verts[(i + 1) % verts.len()])
                    .expect("Cannot add halfedge")
            })
            .collect();
        for i in 0..hedges.len() {
            dcel.set_next_halfedge(hedges[i], hedges[(i + 1) % hedges.len()]);
        }
        let f = dcel.add_face(Some(hedges[0])).expect("Cannot add face");
        (dcel, f)
    }

    fn unit_square() -> (Dcel, FH) {
        polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn t_empty_face() {
        let mut dcel = Dcel::new();
        let f = dcel.add_face(None).expect("Cannot add face");
        assert_eq!(f.wedge(&dcel), None);
        assert!(!f.is_external(&dcel));
        assert_eq!(dcel.face_area(f), 0.0);
        assert_eq!(dcel.face_perimeter(f), 0.0);
        assert_eq!(dcel.face_vertex_count(f), 0);
        assert_eq!(dcel.face_vertices(f).count(), 0);
        assert!(!dcel.face_contains(f, (0.0, 0.0)));
        assert!(matches!(dcel.face_centroid(f), Err(Error::EmptyFace(ff)) if ff == f));
    }

    #[test]
    fn t_square_properties() {
        let (dcel, f) = unit_square();
        assert_f64_eq!(dcel.face_area(f), 1.0);
        assert_f64_eq!(dcel.face_signed_area(f), 1.0);
        assert_f64_eq!(dcel.face_perimeter(f), 4.0);
        assert_eq!(dcel.face_vertex_count(f), 4);
        let c = dcel.face_centroid(f).expect("Cannot compute centroid");
        assert_f64_eq!(c.x, 0.5);
        assert_f64_eq!(c.y, 0.5);
    }

    #[test]
    fn t_triangle_properties() {
        let (dcel, f) = polygon(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_f64_eq!(dcel.face_area(f), 0.5);
        assert_f64_eq!(dcel.face_perimeter(f), 2.0 + SQRT_2);
        assert_eq!(dcel.face_vertex_count(f), 3);
        let c = dcel.face_centroid(f).expect("Cannot compute centroid");
        assert_f64_eq!(c.x, 1.0 / 3.0);
        assert_f64_eq!(c.y, 1.0 / 3.0);
    }

    #[test]
    fn t_clockwise_centroid() {
        let (dcel, f) = polygon(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert_f64_eq!(dcel.face_signed_area(f), -4.0);
        assert_f64_eq!(dcel.face_area(f), 4.0);
        let c = dcel.face_centroid(f).expect("Cannot compute centroid");
        assert_f64_eq!(c.x, 1.0);
        assert_f64_eq!(c.y, 1.0);
    }

    #[test]
    fn t_degenerate_centroid() {
        let (dcel, f) = polygon(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(dcel.face_area(f), 0.0);
        assert!(matches!(dcel.face_centroid(f), Err(Error::DegenerateFace(ff)) if ff == f));
    }

    #[test]
    fn t_point_inside_square() {
        let (dcel, f) = unit_square();
        for (point, expected) in [
            ((0.5, 0.5), true),
            ((0.0, 0.0), true),
            ((0.5, 0.0), true),
            ((2.0, 2.0), false),
            ((0.5, -0.1), false),
            ((1.0, 1.0), true),
            ((1.0, 0.25), true),
            ((-0.5, 0.5), false),
        ] {
            assert_eq!(dcel.face_contains(f, point), expected, "{:?}", point);
        }
    }

    #[test]
    fn t_point_on_slanted_edge() {
        let (dcel, f) = polygon(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
        assert!(dcel.face_contains(f, (1.0, 1.0)));
        assert!(dcel.face_contains(f, (0.5, 1.5)));
        assert!(!dcel.face_contains(f, (1.0, 1.0 + 1e-6)));
    }

    #[test]
    fn t_point_inside_concave() {
        /*
           7-----6
           |     |
           |  4--5
           |  |
           |  3--2
           |     |
           0-----1
        */
        let (dcel, f) = polygon(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (3.0, 2.0),
            (3.0, 3.0),
            (0.0, 3.0),
        ]);
        assert_f64_eq!(dcel.face_area(f), 7.0);
        assert!(dcel.face_contains(f, (0.5, 1.5)));
        assert!(dcel.face_contains(f, (2.0, 0.5)));
        assert!(dcel.face_contains(f, (2.0, 2.5)));
        assert!(!dcel.face_contains(f, (2.0, 1.5)));
        assert!(!dcel.face_contains(f, (4.0, 1.5)));
    }

    #[test]
    fn t_point_inside_clockwise() {
        let (dcel, f) = polygon(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(dcel.face_contains(f, Point::new(0.25, 0.75)));
        assert!(!dcel.face_contains(f, Point::new(1.25, 0.75)));
    }

    #[test]
    fn t_vertex_iteration() {
        let (dcel, f) = unit_square();
        let coords: Vec<(f64, f64)> = dcel
            .face_vertices(f)
            .map(|v| dcel.vertex(v).coordinates())
            .collect();
        assert_eq!(coords, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    }

    #[test]
    fn t_edge_iteration() {
        let (dcel, f) = unit_square();
        let edges: Vec<HH> = dcel.face_halfedges(f).collect();
        assert_eq!(edges.len(), 4);
        for i in 0..4 {
            assert_eq!(edges[i].next(&dcel), Some(edges[(i + 1) % 4]));
            assert_eq!(edges[i].prev(&dcel), Some(edges[(i + 3) % 4]));
            assert_eq!(edges[i].face(&dcel), Some(f));
        }
        // Restartable.
        assert_eq!(dcel.face_halfedges(f).collect::<Vec<_>>(), edges);
    }

    #[test]
    fn t_edge_vertices_iteration() {
        let (dcel, f) = unit_square();
        let pairs: Vec<_> = dcel
            .face_edge_vertices(f)
            .map(|(a, b)| (dcel.vertex(a).coordinates(), dcel.vertex(b).coordinates()))
            .collect();
        assert_eq!(
            pairs,
            [
                ((0.0, 0.0), (1.0, 0.0)),
                ((1.0, 0.0), (1.0, 1.0)),
                ((1.0, 1.0), (0.0, 1.0)),
                ((0.0, 1.0), (0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn t_open_boundary_is_rejected() {
        let mut dcel = Dcel::new();
        let a = dcel.add_vertex(0.0, 0.0);
        let b = dcel.add_vertex(1.0, 0.0);
        let c = dcel.add_vertex(0.0, 1.0);
        let h0 = dcel.add_halfedge(a, b).expect("Cannot add halfedge");
        let h1 = dcel.add_halfedge(b, c).expect("Cannot add halfedge");
        dcel.set_next_halfedge(h0, h1);
        assert!(matches!(dcel.add_face(Some(h0)), Err(Error::OpenBoundary(h)) if h == h0));
        assert_eq!(dcel.num_faces(), 0);
        assert_eq!(h0.face(&dcel), None);
    }

    #[test]
    fn t_cached_face_values_are_stable() {
        let (dcel, f) = polygon(&[(0.1, 0.2), (3.7, 0.9), (2.2, 4.4), (-1.3, 2.5)]);
        let first = (dcel.face_area(f), dcel.face_perimeter(f));
        let second = (dcel.face_area(f), dcel.face_perimeter(f));
        assert_eq!(first.0.to_bits(), second.0.to_bits());
        assert_eq!(first.1.to_bits(), second.1.to_bits());
    }
}
