pub mod document;
pub mod error;
pub mod exporter;
pub mod flatten;
pub mod path;
pub mod validation;

pub use document::ExportDocument;
pub use error::{ExportError, ExportResult};
pub use exporter::{
    DEFAULT_INDENT, Diagnostic, ExportOptions, ExportReport, export, export_active,
};
pub use flatten::{SkippedPolygon, flatten_indices, flatten_vertices};
pub use path::{DEFAULT_SUFFIX, output_path};
pub use validation::{ValidationResult, validate_document};
