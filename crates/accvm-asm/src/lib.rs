pub mod model;

pub use model::{assemble_file, object_path, write_object, FileReport};
