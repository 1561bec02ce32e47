pub mod source_model;
pub mod url_pattern;
