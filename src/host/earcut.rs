use super::{HostError, MeshOps};
use crate::domain::{MeshData, Mode, Polygon, SceneObject};
use crate::mesh::triangulate_polygon_3d;

/// Standalone host operators backed by earcut triangulation
#[derive(Debug, Default)]
pub struct EarcutOps;

impl EarcutOps {
    pub fn new() -> Self {
        Self
    }
}

fn mesh_mut(object: &mut SceneObject) -> Result<&mut MeshData, HostError> {
    let name = &object.name;
    object
        .mesh
        .as_mut()
        .ok_or_else(|| HostError::NoMeshData(name.clone()))
}

fn require_edit_mode(object: &SceneObject) -> Result<(), HostError> {
    if object.mode != Mode::Edit {
        return Err(HostError::WrongMode {
            object: object.name.clone(),
            expected: Mode::Edit,
            found: object.mode,
        });
    }
    Ok(())
}

impl MeshOps for EarcutOps {
    fn set_mode(&mut self, object: &mut SceneObject, mode: Mode) -> Result<(), HostError> {
        if object.mesh.is_none() {
            return Err(HostError::NoMeshData(object.name.clone()));
        }
        object.mode = mode;
        Ok(())
    }

    fn select_all(&mut self, object: &mut SceneObject) -> Result<(), HostError> {
        require_edit_mode(object)?;
        for polygon in &mut mesh_mut(object)?.polygons {
            polygon.selected = true;
        }
        Ok(())
    }

    fn quads_convert_to_tris(&mut self, object: &mut SceneObject) -> Result<usize, HostError> {
        require_edit_mode(object)?;
        let name = object.name.clone();
        let mesh = mesh_mut(object)?;

        let vertex_count = mesh.vertices.len();
        for (index, polygon) in mesh.polygons.iter().enumerate() {
            if let Some(&v) = polygon.vertices.iter().find(|&&v| v as usize >= vertex_count) {
                return Err(HostError::InvalidVertexIndex {
                    object: name,
                    polygon: index,
                    vertex: v,
                });
            }
        }

        let mut converted = 0;
        let mut polygons = Vec::with_capacity(mesh.polygons.len());

        for polygon in std::mem::take(&mut mesh.polygons) {
            if !polygon.selected || polygon.len() <= 3 {
                polygons.push(polygon);
                continue;
            }

            let points: Vec<[f32; 3]> = polygon
                .vertices
                .iter()
                .map(|&v| mesh.vertices[v as usize])
                .collect();

            let triangles = triangulate_polygon_3d(&points);
            if triangles.is_empty() {
                // Degenerate, left as-is for the caller to report
                polygons.push(polygon);
                continue;
            }

            for tri in triangles {
                polygons.push(Polygon {
                    vertices: tri.iter().map(|&i| polygon.vertices[i]).collect(),
                    selected: polygon.selected,
                });
            }
            converted += 1;
        }

        mesh.polygons = polygons;
        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObjectKind;
    use crate::host::triangulate_in_place;

    fn quad_object() -> SceneObject {
        SceneObject::mesh(
            "Plane",
            MeshData::from_faces(
                vec![
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    [1.0, 1.0, 0.0],
                    [0.0, 1.0, 0.0],
                ],
                &[&[0, 1, 2, 3]],
            ),
        )
    }

    #[test]
    fn test_quad_becomes_two_triangles() {
        let mut obj = quad_object();
        let converted = triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap();

        let mesh = obj.mesh.as_ref().unwrap();
        assert_eq!(converted, 1);
        assert_eq!(mesh.polygons.len(), 2);
        assert!(mesh.polygons.iter().all(|p| p.is_triangle()));
        assert!(mesh.polygons.iter().all(|p| p.selected));
        assert_eq!(obj.mode, Mode::Object);
    }

    #[test]
    fn test_pentagon_becomes_three_triangles() {
        let mut obj = SceneObject::mesh(
            "Pent",
            MeshData::from_faces(
                vec![
                    [0.0, 0.0, 0.0],
                    [2.0, 0.0, 0.0],
                    [2.0, 1.0, 0.0],
                    [1.0, 2.0, 0.0],
                    [0.0, 1.0, 0.0],
                ],
                &[&[0, 1, 2, 3, 4]],
            ),
        );
        triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap();

        let mesh = obj.mesh.as_ref().unwrap();
        assert_eq!(mesh.polygons.len(), 3);
        let mut used: Vec<u32> = mesh
            .polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_triangles_are_untouched() {
        let mut obj = SceneObject::mesh(
            "Tri",
            MeshData::from_faces(
                vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                &[&[2, 0, 1]],
            ),
        );
        let converted = triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap();

        assert_eq!(converted, 0);
        assert_eq!(obj.mesh.as_ref().unwrap().polygons[0].vertices, vec![2, 0, 1]);
    }

    #[test]
    fn test_degenerate_polygon_is_kept() {
        let mut obj = SceneObject::mesh(
            "Line",
            MeshData::from_faces(
                vec![
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    [2.0, 0.0, 0.0],
                    [3.0, 0.0, 0.0],
                ],
                &[&[0, 1, 2, 3]],
            ),
        );
        let converted = triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap();

        assert_eq!(converted, 0);
        assert_eq!(obj.mesh.as_ref().unwrap().polygons[0].len(), 4);
    }

    #[test]
    fn test_operators_require_edit_mode() {
        let mut ops = EarcutOps::new();
        let mut obj = quad_object();

        assert!(matches!(
            ops.select_all(&mut obj),
            Err(HostError::WrongMode { .. })
        ));
        assert!(matches!(
            ops.quads_convert_to_tris(&mut obj),
            Err(HostError::WrongMode { .. })
        ));
    }

    #[test]
    fn test_unselected_polygons_are_not_converted() {
        let mut ops = EarcutOps::new();
        let mut obj = quad_object();
        ops.set_mode(&mut obj, Mode::Edit).unwrap();

        assert_eq!(ops.quads_convert_to_tris(&mut obj).unwrap(), 0);
        assert_eq!(obj.mesh.as_ref().unwrap().polygons.len(), 1);
    }

    #[test]
    fn test_object_without_mesh_fails() {
        let mut obj = SceneObject::without_mesh("Camera", ObjectKind::Camera);
        let err = triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap_err();
        assert!(matches!(err, HostError::NoMeshData(_)));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let mut obj = SceneObject::mesh(
            "Broken",
            MeshData::from_faces(
                vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
                &[&[0, 1, 2, 9]],
            ),
        );
        let err = triangulate_in_place(&mut EarcutOps::new(), &mut obj).unwrap_err();
        assert!(matches!(err, HostError::InvalidVertexIndex { vertex: 9, .. }));
    }
}
