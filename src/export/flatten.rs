use crate::domain::Polygon;

/// Flatten vertex positions, converting from Z-up to Y-up
///
/// Each `(x, y, z)` becomes `(x, z, -y)`. Order is preserved.
pub fn flatten_vertices(vertices: &[[f32; 3]]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(vertices.len() * 3);
    for v in vertices {
        flat.extend_from_slice(&[v[0], v[2], -v[1]]);
    }
    flat
}

/// Polygon that could not be exported as a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedPolygon {
    pub index: usize,
    pub vertex_count: usize,
}

/// Flatten triangle indices in polygon order
///
/// Triangles are emitted with their winding as given. Polygons with any
/// other vertex count are left out and returned in the skip list.
pub fn flatten_indices(polygons: &[Polygon]) -> (Vec<u32>, Vec<SkippedPolygon>) {
    let mut indices = Vec::with_capacity(polygons.len() * 3);
    let mut skipped = Vec::new();

    for (index, polygon) in polygons.iter().enumerate() {
        if polygon.is_triangle() {
            indices.extend_from_slice(&polygon.vertices);
        } else {
            skipped.push(SkippedPolygon {
                index,
                vertex_count: polygon.len(),
            });
        }
    }

    (indices, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_permutation() {
        assert_eq!(flatten_vertices(&[[1.0, 2.0, 3.0]]), vec![1.0, 3.0, -2.0]);
    }

    #[test]
    fn test_vertex_order_preserved() {
        let flat = flatten_vertices(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]]);
        assert_eq!(flat, vec![0.0, 0.0, -0.0, 1.0, 1.0, -1.0, 0.0, 0.0, -0.0]);
    }

    #[test]
    fn test_triangles_flattened_in_order() {
        let polygons = vec![Polygon::new(vec![0, 1, 2]), Polygon::new(vec![0, 2, 3])];
        let (indices, skipped) = flatten_indices(&polygons);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_winding_not_corrected() {
        let (indices, _) = flatten_indices(&[Polygon::new(vec![2, 1, 0])]);
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_non_triangles_skipped() {
        let polygons = vec![
            Polygon::new(vec![0, 1, 2]),
            Polygon::new(vec![0, 1, 2, 3, 4]),
            Polygon::new(vec![2, 3, 4]),
        ];
        let (indices, skipped) = flatten_indices(&polygons);
        assert_eq!(indices, vec![0, 1, 2, 2, 3, 4]);
        assert_eq!(
            skipped,
            vec![SkippedPolygon {
                index: 1,
                vertex_count: 5
            }]
        );
    }
}
