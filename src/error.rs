use std::fmt::Display;

use crate::element::{FH, HH, VH};

#[derive(Debug)]
pub enum Error {
    // Construction.
    VertexOutOfRange { index: usize, count: usize },
    MissingTwin(HH),
    OpenBoundary(HH),
    // Geometry.
    EmptyFace(FH),
    /// The signed area of the face is exactly zero, so it has no centroid.
    DegenerateFace(FH),
    // Topology.
    InvalidTwinLink(HH),
    InvalidHalfedgeLink(HH),
    InconsistentFaceInLoop(HH),
    InvalidLoopTopology(HH),
    InvalidFaceHalfedgeLink(FH, HH),
    InvalidIncidentHalfedge(VH, HH),
    // Obj.
    ObjLoadFailed(String),
    IncorrectNumberOfCoordinates(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::VertexOutOfRange { index, count } => {
                write!(f, "Vertex index {} out of range for {} vertices", index, count)
            }
            Error::MissingTwin(h) => write!(f, "{} has no twin", h),
            Error::OpenBoundary(h) => write!(f, "Boundary walk from {} does not close", h),
            Error::EmptyFace(fh) => write!(f, "{} has no edges", fh),
            Error::DegenerateFace(fh) => write!(f, "{} has zero area", fh),
            Error::InvalidTwinLink(h) => write!(f, "Invalid twin link at {}", h),
            Error::InvalidHalfedgeLink(h) => write!(f, "Invalid boundary link at {}", h),
            Error::InconsistentFaceInLoop(h) => write!(f, "Inconsistent face in loop at {}", h),
            Error::InvalidLoopTopology(h) => write!(f, "Invalid loop topology at {}", h),
            Error::InvalidFaceHalfedgeLink(fh, h) => {
                write!(f, "{} is anchored at {} which it does not own", fh, h)
            }
            Error::InvalidIncidentHalfedge(v, h) => {
                write!(f, "{} lists {} which does not originate there", v, h)
            }
            Error::ObjLoadFailed(msg) => write!(f, "Failed to load obj: {}", msg),
            Error::IncorrectNumberOfCoordinates(n) => {
                write!(f, "Expected a multiple of 3 coordinates, found {}", n)
            }
        }
    }
}

impl std::error::Error for Error {}
