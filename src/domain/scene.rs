use super::SceneObject;
use std::path::{Path, PathBuf};

/// The loaded document: its objects, the active one, and where it lives on disk
#[derive(Debug, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub active: Option<usize>,
    /// None for documents that were never saved (e.g. read from stdin)
    pub document_path: Option<PathBuf>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>, document_path: Option<PathBuf>) -> Self {
        let active = if objects.is_empty() { None } else { Some(0) };
        Self {
            objects,
            active,
            document_path,
        }
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.objects.get(self.active?)
    }

    /// Make the named object active. Returns false if no object has that name.
    pub fn set_active_by_name(&mut self, name: &str) -> bool {
        match self.objects.iter().position(|o| o.name == name) {
            Some(i) => {
                self.active = Some(i);
                true
            }
            None => false,
        }
    }

    /// Borrow the active object mutably together with the document path
    pub fn split_active(&mut self) -> (Option<&mut SceneObject>, Option<&Path>) {
        let object = match self.active {
            Some(i) => self.objects.get_mut(i),
            None => None,
        };
        (object, self.document_path.as_deref())
    }
}
