use super::error::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The exported artifact: flat vertex components and flat triangle indices
///
/// `vertices` holds three floats per vertex and `indices` three entries per
/// triangle. Index `i` refers to `vertices[3 * i..3 * i + 3]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl ExportDocument {
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Encode as JSON. An `indent` of 0 produces compact output, anything
    /// else pretty-prints with that many spaces per level.
    pub fn to_json_bytes(&self, indent: usize) -> ExportResult<Vec<u8>> {
        let mut out = Vec::with_capacity(16 * (self.vertices.len() + self.indices.len()) + 64);
        if indent == 0 {
            serde_json::to_writer(&mut out, self)?;
        } else {
            let pad = vec![b' '; indent];
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
            self.serialize(&mut ser)?;
        }
        Ok(out)
    }

    /// Write the document to `path` in one go, replacing any existing file
    pub fn write_to(&self, path: &Path, indent: usize) -> ExportResult<()> {
        let bytes = self.to_json_bytes(indent)?;
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        Ok(())
    }

    /// Parse a previously exported file
    pub fn read_from(path: &Path) -> ExportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_pretty_output_uses_four_spaces() {
        let doc = ExportDocument::new(vec![1.0, 3.0, -2.0], vec![0, 0, 0]);
        let text = String::from_utf8(doc.to_json_bytes(4).unwrap()).unwrap();

        assert!(text.starts_with("{\n    \"vertices\": [\n        1.0,"));
        assert!(text.contains("\n    \"indices\": [\n        0,"));
        assert!(text.ends_with("\n    ]\n}"));
    }

    #[test]
    fn test_compact_output() {
        let doc = ExportDocument::new(vec![0.5, 0.0, -0.25], vec![0, 1, 2]);
        let text = String::from_utf8(doc.to_json_bytes(0).unwrap()).unwrap();
        assert_eq!(text, r#"{"vertices":[0.5,0.0,-0.25],"indices":[0,1,2]}"#);
    }

    #[test]
    fn test_key_order_is_vertices_then_indices() {
        let doc = ExportDocument::default();
        let text = String::from_utf8(doc.to_json_bytes(4).unwrap()).unwrap();
        let v = text.find("vertices").unwrap();
        let i = text.find("indices").unwrap();
        assert!(v < i);
    }

    #[test]
    fn test_write_then_read_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mesh_model_data.json");
        let doc = ExportDocument::new(
            vec![0.1, 1.0e-7, -3.4028235e38, 123.456, 0.0, -0.0],
            vec![0, 1, 1, 1, 0, 0],
        );

        doc.write_to(&path, 4).unwrap();
        let back = ExportDocument::read_from(&path).unwrap();

        assert_eq!(back, doc);
        assert_eq!(back.vertex_count(), 2);
        assert_eq!(back.triangle_count(), 2);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "a much longer stale payload that should disappear").unwrap();

        ExportDocument::default().write_to(&path, 0).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"vertices":[],"indices":[]}"#);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = ExportDocument::default().write_to(&path, 4).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_read_rejects_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"vertices": "nope", "indices": []}"#).unwrap();

        let err = ExportDocument::read_from(&path).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }
}
