pub mod parser;

pub use parser::{load_scene, parse_obj};
