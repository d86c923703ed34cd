/*!
A doubly connected edge list (DCEL) for planar subdivisions.

# Overview

+ A [`Dcel`] is built once from a list of vertex coordinates and a list of
  edges given as pairs of vertex indices. Each edge becomes two twin
  halfedges. The halfedges leaving every vertex are sorted by angle and
  linked, and the faces of the subdivision are extracted by walking the
  resulting boundary cycles.

+ Vertices, halfedges and faces are stored in flat arenas owned by the
  [`Dcel`], and refer to each other through the handle types [`VH`], [`HH`]
  and [`FH`].

+ Faces answer geometric queries: area, perimeter, centroid and point
  containment by winding number. Lengths, angles and face measures are
  computed on first access and cached, so a built [`Dcel`] should be treated
  as a read-only snapshot. It is `Send` and `Sync`.

+ Faces that bound the unbounded region around a connected component are
  marked external according to [`FaceClassification`].

+ With the `obj` feature, a [`Dcel`] can be loaded from the faces of an OBJ
  file, projected onto the XY plane.

```
use pdcel::Dcel;

let dcel = Dcel::from_parts(
    &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
    &[(0, 1), (1, 2), (2, 3), (3, 0)],
)
.unwrap();
let stats = dcel.statistics();
assert_eq!(stats.faces, 2);
assert_eq!(stats.internal_faces, 1);
assert!((stats.total_area - 1.0).abs() < 1e-12);
```
*/

mod check;
mod dcel;
mod element;
mod error;
mod face;
mod halfedge;
mod iterator;
mod macros;
#[cfg(feature = "obj")]
mod obj;
mod point;
mod vertex;

pub use dcel::{BuildOptions, Dcel, FaceClassification, Statistics};
pub use element::{FH, HH, Handle, VH};
pub use error::Error;
pub use face::Face;
pub use halfedge::Halfedge;
pub use point::{Point, signed_area};
pub use vertex::Vertex;
