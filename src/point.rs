use glam::DVec2;
use std::ops::{Add, Mul, Sub};

/// A location in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        (DVec2::from(self) + DVec2::from(other)).into()
    }

    pub fn sub(self, other: Point) -> Point {
        (DVec2::from(self) - DVec2::from(other)).into()
    }

    pub fn scale(self, k: f64) -> Point {
        (DVec2::from(self) * k).into()
    }

    /// Euclidean distance.
    pub fn distance_to(self, other: Point) -> f64 {
        DVec2::from(self).distance(other.into())
    }

    pub fn coordinates(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::sub(self, rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        glam::dvec2(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

/// Twice the signed area of the triangle `(a, b, c)`. Positive when `c` is to
/// the left of the directed line from `a` to `b`.
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}
