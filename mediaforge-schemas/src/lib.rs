pub mod file_formats;
pub mod formula;
