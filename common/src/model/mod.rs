pub mod document;
pub mod payload;
pub mod readiness;
pub mod selection;
pub mod source_file;
