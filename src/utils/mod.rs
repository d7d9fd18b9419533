pub mod paths;

pub use paths::{format_path_with_tilde, open_input, validate_file_size};
