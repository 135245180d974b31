//! Host operations the exporter depends on
//!
//! The exporter never touches scene internals for anything but reading.
//! Mode switches and triangulation go through [`MeshOps`], so a modeling
//! application (or a test double) can supply its own implementation.

pub mod earcut;

pub use earcut::EarcutOps;

use crate::domain::{Mode, SceneObject};
use thiserror::Error;

/// Errors raised by host operations
#[derive(Debug, Error)]
pub enum HostError {
    /// The object has no mesh data to edit
    #[error("Object '{0}' has no mesh data")]
    NoMeshData(String),

    /// An edit operator was invoked outside edit mode
    #[error("Object '{object}' must be in {expected:?} mode, found {found:?}")]
    WrongMode {
        object: String,
        expected: Mode,
        found: Mode,
    },

    /// A polygon references a vertex that does not exist
    #[error("Object '{object}' polygon {polygon} references missing vertex {vertex}")]
    InvalidVertexIndex {
        object: String,
        polygon: usize,
        vertex: u32,
    },
}

/// Mesh editing operators provided by the host application
pub trait MeshOps {
    /// Switch the object between object and edit mode
    fn set_mode(&mut self, object: &mut SceneObject, mode: Mode) -> Result<(), HostError>;

    /// Select all geometry of an object in edit mode
    fn select_all(&mut self, object: &mut SceneObject) -> Result<(), HostError>;

    /// Convert selected polygons with more than three vertices into triangles
    ///
    /// Returns the number of polygons that were converted.
    fn quads_convert_to_tris(&mut self, object: &mut SceneObject) -> Result<usize, HostError>;
}

/// Run the host's triangulation sequence on an object
///
/// Enters edit mode, selects everything, converts to triangles and returns
/// to object mode. The object is left triangulated.
pub fn triangulate_in_place(
    ops: &mut impl MeshOps,
    object: &mut SceneObject,
) -> Result<usize, HostError> {
    ops.set_mode(object, Mode::Edit)?;
    ops.select_all(object)?;
    let converted = ops.quads_convert_to_tris(object)?;
    ops.set_mode(object, Mode::Object)?;
    Ok(converted)
}
