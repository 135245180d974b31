use super::document::ExportDocument;
use super::error::ExportResult;
use super::flatten::{flatten_indices, flatten_vertices};
use super::path::{DEFAULT_SUFFIX, output_path};
use crate::domain::{ObjectKind, Scene, SceneObject};
use crate::host::{HostError, MeshOps, triangulate_in_place};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default JSON indentation
pub const DEFAULT_INDENT: usize = 4;

/// Settings for a single export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Appended to the object name to form the file stem
    pub suffix: String,
    /// Spaces per JSON nesting level, 0 for compact output
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Something the exporter wants the user to know about
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// No object was given, or it is not a mesh
    WrongObjectType {
        object: Option<String>,
        kind: Option<ObjectKind>,
    },
    /// A polygon was still not a triangle after conversion and was skipped
    NonTriangularPolygon {
        object: String,
        polygon: usize,
        vertex_count: usize,
    },
    /// The document was never saved, so there is nowhere to write
    MissingDocumentPath,
    /// The file was written
    Exported { path: PathBuf },
}

impl Diagnostic {
    pub fn is_warning(&self) -> bool {
        !matches!(self, Diagnostic::Exported { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::WrongObjectType {
                object: Some(name),
                kind: Some(kind),
            } => write!(
                f,
                "Please select a mesh object ('{}' is {})",
                name, kind
            ),
            Diagnostic::WrongObjectType { .. } => write!(f, "Please select a mesh object"),
            Diagnostic::NonTriangularPolygon {
                object,
                polygon,
                vertex_count,
            } => write!(
                f,
                "Warning: non-triangular face detected on {} (polygon {} has {} vertices); only triangles are exported",
                object, polygon, vertex_count
            ),
            Diagnostic::MissingDocumentPath => write!(
                f,
                "Make sure the current document or imported model file has been saved"
            ),
            Diagnostic::Exported { path } => {
                write!(f, "Vertex and index data exported to: {}", path.display())
            }
        }
    }
}

/// Outcome of an export call
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Diagnostics in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
    /// Where the document was written, if it was
    pub output: Option<PathBuf>,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Polygons the host converted to triangles
    pub converted_polygons: usize,
    /// Polygons left out of the index list
    pub skipped_polygons: usize,
}

impl ExportReport {
    pub fn written(&self) -> bool {
        self.output.is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match &self.output {
            Some(path) if self.skipped_polygons > 0 => format!(
                "{} vertices, {} triangles ({} polygons skipped) -> {}",
                self.vertex_count,
                self.triangle_count,
                self.skipped_polygons,
                path.display()
            ),
            Some(path) => format!(
                "{} vertices, {} triangles -> {}",
                self.vertex_count,
                self.triangle_count,
                path.display()
            ),
            None => "Nothing exported".to_string(),
        }
    }
}

/// Triangulate an object and write its geometry as JSON next to the document
///
/// Precondition failures (no mesh object, unsaved document) and skipped
/// polygons are reported through the returned [`ExportReport`]. Host and
/// file errors are returned as [`ExportError`](super::ExportError).
///
/// The object is triangulated before the document path is checked, so it is
/// left triangulated even when nothing gets written.
pub fn export(
    ops: &mut impl MeshOps,
    object: Option<&mut SceneObject>,
    document_path: Option<&Path>,
    options: &ExportOptions,
) -> ExportResult<ExportReport> {
    let mut report = ExportReport::default();

    let object = match object {
        Some(obj) if obj.is_mesh() => obj,
        other => {
            report.diagnostics.push(Diagnostic::WrongObjectType {
                object: other.as_ref().map(|o| o.name.clone()),
                kind: other.as_ref().map(|o| o.kind),
            });
            return Ok(report);
        }
    };

    report.converted_polygons = triangulate_in_place(ops, object)?;

    let mesh = object
        .mesh
        .as_ref()
        .ok_or_else(|| HostError::NoMeshData(object.name.clone()))?;

    let vertices = flatten_vertices(&mesh.vertices);
    let (indices, skipped) = flatten_indices(&mesh.polygons);
    for s in &skipped {
        report.diagnostics.push(Diagnostic::NonTriangularPolygon {
            object: object.name.clone(),
            polygon: s.index,
            vertex_count: s.vertex_count,
        });
    }

    let document = ExportDocument::new(vertices, indices);
    report.vertex_count = document.vertex_count();
    report.triangle_count = document.triangle_count();
    report.skipped_polygons = skipped.len();

    let path = match output_path(document_path, &object.name, &options.suffix) {
        Some(p) => p,
        None => {
            report.diagnostics.push(Diagnostic::MissingDocumentPath);
            return Ok(report);
        }
    };

    document.write_to(&path, options.indent)?;

    report
        .diagnostics
        .push(Diagnostic::Exported { path: path.clone() });
    report.output = Some(path);

    Ok(report)
}

/// Export the scene's active object
pub fn export_active(
    ops: &mut impl MeshOps,
    scene: &mut Scene,
    options: &ExportOptions,
) -> ExportResult<ExportReport> {
    let (object, document_path) = scene.split_active();
    export(ops, object, document_path, options)
}
