//! Sanity checks for exported documents
//!
//! Reports problems a consumer would trip over when building an index
//! buffer from the file:
//! - Array lengths that are not multiples of 3
//! - Indices pointing past the last vertex
//! - NaN/Inf coordinates
//! - Degenerate triangles (zero area)
//! - Index values too large for a 16-bit index buffer

use super::ExportDocument;

/// Result of document validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Number of complete triangles checked
    pub total: usize,
    /// Number of vertices in the document
    pub vertex_count: usize,
    /// Leftover floats after the last full vertex
    pub trailing_vertex_components: usize,
    /// Leftover indices after the last full triangle
    pub trailing_indices: usize,
    /// Triangles referencing a vertex that does not exist
    pub out_of_range: usize,
    /// Vertices with NaN/Inf components
    pub invalid_coords: usize,
    /// Triangles with zero or near-zero area
    pub degenerate: usize,
    /// Index entries above `u16::MAX`
    pub wide_indices: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Check if the document can be loaded as an indexed triangle mesh
    pub fn is_valid(&self) -> bool {
        self.trailing_vertex_components == 0
            && self.trailing_indices == 0
            && self.out_of_range == 0
            && self.invalid_coords == 0
    }

    /// Check if the document has any issues at all
    pub fn has_issues(&self) -> bool {
        !self.is_valid() || self.degenerate > 0 || self.wide_indices > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!(
                "Document valid: {} vertices, {} triangles, no issues",
                self.vertex_count, self.total
            )
        } else {
            format!(
                "Document issues: {} triangles, {} out of range, {} invalid coords, {} degenerate, {} wide indices",
                self.total, self.out_of_range, self.invalid_coords, self.degenerate, self.wide_indices
            )
        }
    }
}

/// Minimum area threshold for non-degenerate triangles
const MIN_TRIANGLE_AREA: f32 = 1e-10;

/// Validate a document and return a detailed report
pub fn validate_document(doc: &ExportDocument) -> ValidationResult {
    let positions: Vec<[f32; 3]> = doc
        .vertices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let mut result = ValidationResult {
        total: doc.indices.len() / 3,
        vertex_count: positions.len(),
        trailing_vertex_components: doc.vertices.len() % 3,
        trailing_indices: doc.indices.len() % 3,
        ..Default::default()
    };

    if result.trailing_vertex_components > 0 {
        result.warnings.push(format!(
            "vertices has {} values, not a multiple of 3",
            doc.vertices.len()
        ));
    }
    if result.trailing_indices > 0 {
        result.warnings.push(format!(
            "indices has {} values, not a multiple of 3",
            doc.indices.len()
        ));
    }

    for (i, p) in positions.iter().enumerate() {
        if p.iter().any(|c| !c.is_finite()) {
            result.invalid_coords += 1;
            result
                .warnings
                .push(format!("Vertex {} has NaN/Inf coordinates", i));
        }
    }

    for (i, tri) in doc.indices.chunks_exact(3).enumerate() {
        let corners: Option<Vec<[f32; 3]>> = tri
            .iter()
            .map(|&idx| positions.get(idx as usize).copied())
            .collect();

        let corners = match corners {
            Some(c) => c,
            None => {
                result.out_of_range += 1;
                result.warnings.push(format!(
                    "Triangle {} references a vertex beyond {}",
                    i,
                    positions.len()
                ));
                continue;
            }
        };

        if triangle_area(&[corners[0], corners[1], corners[2]]) < MIN_TRIANGLE_AREA {
            result.degenerate += 1;
        }
    }

    if result.degenerate > 0 {
        result
            .warnings
            .push(format!("{} degenerate triangles detected", result.degenerate));
    }

    result.wide_indices = doc
        .indices
        .iter()
        .filter(|&&i| i > u16::MAX as u32)
        .count();
    if result.wide_indices > 0 {
        result.warnings.push(format!(
            "{} indices exceed {} and need a 32-bit index buffer",
            result.wide_indices,
            u16::MAX
        ));
    }

    result
}

/// Calculate the area of a triangle from its vertices
fn triangle_area(vertices: &[[f32; 3]; 3]) -> f32 {
    let v0 = vertices[0];
    let v1 = vertices[1];
    let v2 = vertices[2];

    let edge_a = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let edge_b = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let cx = edge_a[1] * edge_b[2] - edge_a[2] * edge_b[1];
    let cy = edge_a[2] * edge_b[0] - edge_a[0] * edge_b[2];
    let cz = edge_a[0] * edge_b[1] - edge_a[1] * edge_b[0];

    0.5 * (cx * cx + cy * cy + cz * cz).sqrt()
}
