pub mod reader;

pub use reader::check_file;
