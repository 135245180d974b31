/// Kind tag of a scene object. Only `Mesh` objects can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Empty,
    Camera,
    Light,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "MESH",
            ObjectKind::Curve => "CURVE",
            ObjectKind::Empty => "EMPTY",
            ObjectKind::Camera => "CAMERA",
            ObjectKind::Light => "LIGHT",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interaction mode of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Object,
    Edit,
}

/// A polygon as an ordered list of vertex indices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<u32>,
    /// Edit-mode selection state
    pub selected: bool,
}

impl Polygon {
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            selected: false,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}

/// Vertex positions and polygons of a mesh object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<[f32; 3]>,
    pub polygons: Vec<Polygon>,
}

impl MeshData {
    pub fn new(vertices: Vec<[f32; 3]>, polygons: Vec<Polygon>) -> Self {
        Self { vertices, polygons }
    }

    /// Build mesh data from plain index lists
    pub fn from_faces(vertices: Vec<[f32; 3]>, faces: &[&[u32]]) -> Self {
        let polygons = faces.iter().map(|f| Polygon::new(f.to_vec())).collect();
        Self { vertices, polygons }
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.is_triangle()).count()
    }
}

/// An object in the scene graph
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub mode: Mode,
    pub mesh: Option<MeshData>,
}

impl SceneObject {
    /// Create a mesh object in object mode
    pub fn mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            mode: Mode::Object,
            mesh: Some(mesh),
        }
    }

    /// Create an object that carries no mesh data
    pub fn without_mesh(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mode: Mode::Object,
            mesh: None,
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }
}
