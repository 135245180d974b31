//! mesh2json - Export triangulated mesh geometry to flat vertex/index JSON

pub mod config;
pub mod domain;
pub mod export;
pub mod host;
pub mod mesh;
pub mod obj;
