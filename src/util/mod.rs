//! Utility modules

pub mod file_validation;
pub mod text;

pub use file_validation::{
    filename_for_display, is_likely_binary, validate_file_for_opening, BufferLoadError,
    MAX_FILE_SIZE,
};
pub use text::{escape_markup, pluralize};
