pub mod triangulation;

pub use triangulation::{triangulate_polygon, triangulate_polygon_3d};
