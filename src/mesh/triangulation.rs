use earcutr::earcut;

/// Triangulate a planar polygon given as 2D points
///
/// Returns flat triangle indices into `outer`, three per triangle.
pub fn triangulate_polygon(outer: &[(f32, f32)]) -> Vec<usize> {
    if outer.len() < 3 {
        return Vec::new();
    }

    let mut vertices: Vec<f64> = Vec::with_capacity(outer.len() * 2);
    for &(x, y) in outer {
        vertices.push(x as f64);
        vertices.push(y as f64);
    }

    earcut(&vertices, &[], 2).unwrap_or_default()
}

/// Triangulate a polygon in 3D space
///
/// The polygon is projected onto the coordinate plane that its Newell normal
/// is most aligned with, then triangulated with earcut. The projection is
/// mirrored when the normal points along the negative axis, which keeps the
/// projected ring counter-clockwise and the output winding equal to the
/// polygon's.
///
/// Returns triangles as indices into `points`. Empty if the polygon is
/// degenerate.
pub fn triangulate_polygon_3d(points: &[[f32; 3]]) -> Vec<[usize; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }

    let normal = newell_normal(points);
    let (axis, sign) = dominant_axis(normal);
    if sign == 0.0 {
        return Vec::new();
    }

    let projected: Vec<(f32, f32)> = points
        .iter()
        .map(|p| {
            let (u, v) = match axis {
                0 => (p[1], p[2]),
                1 => (p[2], p[0]),
                _ => (p[0], p[1]),
            };
            (u * sign, v)
        })
        .collect();

    let flat = triangulate_polygon(&projected);
    let mut triangles: Vec<[usize; 3]> = flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect();

    // earcut does not preserve ring orientation; the projected ring is
    // counter-clockwise, so each triangle must be too
    for tri in &mut triangles {
        if signed_area(&[projected[tri[0]], projected[tri[1]], projected[tri[2]]]) < 0.0 {
            tri.swap(1, 2);
        }
    }

    triangles
}

/// Polygon normal via Newell's method (not normalized)
fn newell_normal(points: &[[f32; 3]]) -> [f32; 3] {
    let mut n = [0.0f32; 3];
    for (i, cur) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        n[0] += (cur[1] - next[1]) * (cur[2] + next[2]);
        n[1] += (cur[2] - next[2]) * (cur[0] + next[0]);
        n[2] += (cur[0] - next[0]) * (cur[1] + next[1]);
    }
    n
}

/// Index of the largest normal component and the sign of that component
fn dominant_axis(normal: [f32; 3]) -> (usize, f32) {
    let abs = [normal[0].abs(), normal[1].abs(), normal[2].abs()];
    let axis = if abs[0] >= abs[1] && abs[0] >= abs[2] {
        0
    } else if abs[1] >= abs[2] {
        1
    } else {
        2
    };

    if !normal[axis].is_finite() || abs[axis] < 1e-12 {
        (axis, 0.0)
    } else {
        (axis, normal[axis].signum())
    }
}

fn signed_area(points: &[(f32, f32)]) -> f32 {
    let mut area = 0.0;
    for (i, &(x0, y0)) in points.iter().enumerate() {
        let (x1, y1) = points[(i + 1) % points.len()];
        area += x0 * y1 - x1 * y0;
    }
    area * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_of(points: &[[f32; 3]], tri: [usize; 3]) -> [f32; 3] {
        newell_normal(&[points[tri[0]], points[tri[1]], points[tri[2]]])
    }

    #[test]
    fn test_triangulate_square() {
        let square = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let indices = triangulate_polygon(&square);
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn test_triangulate_empty() {
        let empty: Vec<(f32, f32)> = vec![];
        let indices = triangulate_polygon(&empty);
        assert!(indices.is_empty());
    }

    #[test]
    fn test_triangulate_quad_in_xy_plane() {
        let quad = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let tris = triangulate_polygon_3d(&quad);
        assert_eq!(tris.len(), 2);
        for tri in tris {
            assert!(normal_of(&quad, tri)[2] > 0.0);
        }
    }

    #[test]
    fn test_triangulate_keeps_winding_for_negative_normal() {
        // Bottom face of a cube, seen from below
        let quad = [
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ];
        let tris = triangulate_polygon_3d(&quad);
        assert_eq!(tris.len(), 2);
        for tri in tris {
            assert!(normal_of(&quad, tri)[2] < 0.0);
        }
    }

    #[test]
    fn test_triangulate_vertical_pentagon() {
        let pentagon = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 0.0, 1.0],
            [1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0],
        ];
        let tris = triangulate_polygon_3d(&pentagon);
        assert_eq!(tris.len(), 3);
        for tri in tris {
            assert!(normal_of(&pentagon, tri)[1] < 0.0);
        }
    }

    #[test]
    fn test_collinear_polygon_is_degenerate() {
        let line = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        assert!(triangulate_polygon_3d(&line).is_empty());
    }
}
