//! Wavefront OBJ loading
//!
//! Builds a [`Scene`] from OBJ text. Vertex positions in OBJ are global to
//! the file; each object gets its own vertex list holding only the vertices
//! its faces reference, in order of first use.

use crate::domain::{MeshData, ObjectKind, Polygon, Scene, SceneObject};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::path::Path;

/// Name used for geometry that appears before any `o` statement
pub const DEFAULT_OBJECT_NAME: &str = "Object";

#[derive(Debug, Default)]
struct ObjectBuilder {
    name: String,
    /// Global vertex index -> local index
    remap: HashMap<usize, u32>,
    vertices: Vec<[f32; 3]>,
    polygons: Vec<Polygon>,
    has_lines: bool,
}

impl ObjectBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        self.polygons.is_empty() && !self.has_lines
    }

    fn local_index(&mut self, global: usize, positions: &[[f32; 3]]) -> u32 {
        if let Some(&local) = self.remap.get(&global) {
            return local;
        }
        let local = self.vertices.len() as u32;
        self.vertices.push(positions[global]);
        self.remap.insert(global, local);
        local
    }

    fn finish(self) -> SceneObject {
        if !self.polygons.is_empty() {
            SceneObject::mesh(self.name, MeshData::new(self.vertices, self.polygons))
        } else if self.has_lines {
            SceneObject::without_mesh(self.name, ObjectKind::Curve)
        } else {
            SceneObject::without_mesh(self.name, ObjectKind::Empty)
        }
    }
}

/// Parse OBJ text into a scene
///
/// `document_path` is stored on the scene as-is. `fallback_name` names
/// geometry that is not preceded by an `o` statement.
pub fn parse_obj(
    source: &str,
    fallback_name: &str,
    document_path: Option<&Path>,
) -> Result<Scene> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut objects: Vec<SceneObject> = Vec::new();
    let mut current = ObjectBuilder::new(fallback_name.to_string());
    let mut seen_object = false;
    let mut current_named = false;

    for (line_no, raw) in source.lines().enumerate() {
        let line_no = line_no + 1;
        let line = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let keyword = match parts.next() {
            Some(k) => k,
            None => continue,
        };

        match keyword {
            "v" => {
                let coords: Vec<&str> = parts.collect();
                if coords.len() < 3 {
                    bail!("line {}: vertex needs 3 coordinates", line_no);
                }
                let mut position = [0.0f32; 3];
                for (slot, value) in position.iter_mut().zip(&coords) {
                    *slot = value
                        .parse()
                        .with_context(|| format!("line {}: invalid coordinate '{}'", line_no, value))?;
                    if !slot.is_finite() {
                        bail!("line {}: coordinate '{}' is not finite", line_no, value);
                    }
                }
                positions.push(position);
            }
            "o" | "g" => {
                // Groups only name objects until the first explicit `o`
                if keyword == "g" && seen_object {
                    continue;
                }
                let name = parts.collect::<Vec<_>>().join(" ");
                let name = if name.is_empty() {
                    fallback_name.to_string()
                } else {
                    name
                };

                if current.is_blank() && !current_named {
                    current.name = name;
                } else {
                    let finished = std::mem::replace(&mut current, ObjectBuilder::new(name));
                    objects.push(finished.finish());
                }
                current_named = true;
                if keyword == "o" {
                    seen_object = true;
                }
            }
            "f" => {
                let refs: Vec<&str> = parts.collect();
                if refs.len() < 3 {
                    bail!("line {}: face needs at least 3 vertices", line_no);
                }
                let mut indices = Vec::with_capacity(refs.len());
                for r in refs {
                    let global = resolve_index(r, positions.len())
                        .with_context(|| format!("line {}: invalid face vertex '{}'", line_no, r))?;
                    indices.push(current.local_index(global, &positions));
                }
                current.polygons.push(Polygon::new(indices));
            }
            "l" => {
                current.has_lines = true;
            }
            // vt, vn, s, usemtl, mtllib and anything else carry no geometry we keep
            _ => {}
        }
    }

    if !current.is_blank() || current_named || (objects.is_empty() && !positions.is_empty()) {
        objects.push(current.finish());
    }

    Ok(Scene::new(objects, document_path.map(Path::to_path_buf)))
}

/// Resolve a face vertex reference (`v`, `v/vt`, `v//vn`, `v/vt/vn`) to a
/// zero-based position index. Negative indices count back from the last
/// vertex defined so far.
fn resolve_index(reference: &str, defined: usize) -> Result<usize> {
    let head = reference.split('/').next().unwrap_or_default();
    let index: i64 = head.parse().context("not an integer")?;

    let resolved = if index > 0 {
        index - 1
    } else if index < 0 {
        defined as i64 + index
    } else {
        bail!("OBJ indices start at 1");
    };

    if resolved < 0 || resolved as usize >= defined {
        bail!("index {} out of range ({} vertices defined)", index, defined);
    }
    Ok(resolved as usize)
}

/// Load an OBJ document from disk
///
/// Geometry outside any `o` statement is named after the file stem.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_OBJECT_NAME.to_string());
    parse_obj(&source, &stem, Some(path))
        .with_context(|| format!("Failed to parse OBJ file: {}", path.display()))
}
