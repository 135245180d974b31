pub mod object;
pub mod scene;

pub use object::{MeshData, Mode, ObjectKind, Polygon, SceneObject};
pub use scene::Scene;
