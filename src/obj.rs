use std::{collections::HashSet, io::BufRead, path::Path};

use crate::{dcel::Dcel, error::Error};

/// Collect the coordinates and the distinct polygon sides of the models.
///
/// Positions are projected onto the XY plane. Sides are undirected and listed
/// in the order they are first seen. Sides that start and end at the same
/// vertex are skipped.
fn planar_parts(models: &[tobj::Model]) -> Result<(Vec<(f64, f64)>, Vec<(usize, usize)>), Error> {
    let mut coords = Vec::new();
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for model in models {
        let mesh = &model.mesh;
        if mesh.positions.len() % 3 != 0 {
            return Err(Error::IncorrectNumberOfCoordinates(mesh.positions.len()));
        }
        let voffset = coords.len();
        coords.extend(mesh.positions.chunks(3).map(|triplet| (triplet[0], triplet[1])));
        let arities: Vec<usize> = if mesh.face_arities.is_empty() {
            // Only triangles.
            vec![3; mesh.indices.len() / 3]
        } else {
            mesh.face_arities.iter().map(|a| *a as usize).collect()
        };
        let mut start = 0usize;
        for size in arities {
            let indices = &mesh.indices[start..(start + size)];
            start += size;
            for i in 0..size {
                let a = indices[i] as usize + voffset;
                let b = indices[(i + 1) % size] as usize + voffset;
                if a == b {
                    continue;
                }
                if seen.insert((a.min(b), a.max(b))) {
                    edges.push((a, b));
                }
            }
        }
    }
    Ok((coords, edges))
}

impl Dcel {
    /// Build a DCEL from the faces of an OBJ file, projected onto the XY
    /// plane.
    pub fn load_obj(path: &Path) -> Result<Self, Error> {
        let options = tobj::LoadOptions::default();
        let (models, _) =
            tobj::load_obj(path, &options).map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        tracing::debug!(path = %path.display(), models = models.len(), "loaded obj");
        Self::from_models(&models)
    }

    /// Same as [`Dcel::load_obj`], reading the OBJ data from `reader`.
    /// Material libraries are ignored.
    pub fn read_obj<R: BufRead>(reader: &mut R) -> Result<Self, Error> {
        let options = tobj::LoadOptions::default();
        let (models, _) = tobj::load_obj_buf(reader, &options, |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })
        .map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        Self::from_models(&models)
    }

    fn from_models(models: &[tobj::Model]) -> Result<Self, Error> {
        let (coords, edges) = planar_parts(models)?;
        tracing::debug!(
            vertices = coords.len(),
            edges = edges.len(),
            "extracted planar graph from obj"
        );
        Self::from_parts(&coords, &edges)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::{dcel::Dcel, error::Error, macros::assert_f64_eq};

    #[test]
    fn t_read_quad() {
        let data = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let dcel = Dcel::read_obj(&mut Cursor::new(data)).expect("Cannot read obj");
        assert_eq!(dcel.num_vertices(), 4);
        assert_eq!(dcel.num_edges(), 4);
        assert_eq!(dcel.num_faces(), 2);
        let stats = dcel.statistics();
        assert_eq!(stats.internal_faces, 1);
        assert_f64_eq!(stats.total_area, 1.0);
    }

    #[test]
    fn t_read_shared_edges() {
        // Two triangles sharing the diagonal, with the z coordinate dropped.
        let data = "v 0 0 5\nv 1 0 5\nv 1 1 5\nv 0 1 5\nf 1 2 3\nf 1 3 4\n";
        let dcel = Dcel::read_obj(&mut Cursor::new(data)).expect("Cannot read obj");
        assert_eq!(dcel.num_vertices(), 4);
        assert_eq!(dcel.num_edges(), 5);
        assert_eq!(dcel.num_faces(), 3);
        assert_eq!(dcel.internal_faces().count(), 2);
        dcel.check_topology().expect("Invalid topology");
    }

    #[test]
    fn t_missing_file() {
        let result = Dcel::load_obj(std::path::Path::new("/nonexistent/planar.obj"));
        assert!(matches!(result, Err(Error::ObjLoadFailed(_))));
    }
}
