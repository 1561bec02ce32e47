pub mod catalog_model;
pub mod samples;
pub mod store;
